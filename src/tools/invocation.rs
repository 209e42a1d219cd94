//! Tool invocation
//!
//! # Flow (strict order)
//!
//! 1. Assign a call id and open an observation scope
//! 2. Resolve the tool by name
//! 3. Validate arguments against the tool's parameter list
//! 4. Run the engine operation
//! 5. Record the outcome in metrics and close the scope

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::observability::{MetricsRegistry, MetricsSnapshot, ObservationScope};
use crate::query::{Clock, QueryEngine, QueryOutput, SystemClock};
use crate::roster::RecordSource;

use super::arguments::Arguments;
use super::catalog::Tool;
use super::errors::{InvocationError, InvocationResult};

/// A request to run one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name
    pub tool: String,
    /// Named arguments
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    /// Creates a call with no arguments
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            arguments: Map::new(),
        }
    }

    /// Adds one argument
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Parses a call from one JSON document
    pub fn parse(json: &str) -> InvocationResult<Self> {
        serde_json::from_str(json).map_err(|e| InvocationError::MalformedCall(e.to_string()))
    }
}

/// A successfully answered call
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Unique id of this call
    pub call_id: Uuid,
    /// Tool that ran
    pub tool: Tool,
    /// Operation result
    pub output: QueryOutput,
}

/// Runs tool calls against a query engine
pub struct Invoker<S, C = SystemClock> {
    engine: QueryEngine<S, C>,
    metrics: MetricsRegistry,
}

impl<S: RecordSource, C: Clock> Invoker<S, C> {
    /// Creates an invoker over the given engine
    pub fn new(engine: QueryEngine<S, C>) -> Self {
        Self {
            engine,
            metrics: MetricsRegistry::new(),
        }
    }

    /// Returns the engine
    pub fn engine(&self) -> &QueryEngine<S, C> {
        &self.engine
    }

    /// Counters for calls handled so far
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Runs one call
    pub fn invoke(&self, call: &ToolCall) -> InvocationResult<Invocation> {
        self.metrics.increment_received();
        let call_id = Uuid::new_v4();
        let call_id_text = call_id.to_string();
        let scope = ObservationScope::begin(&[
            ("call_id", call_id_text.as_str()),
            ("tool", call.tool.as_str()),
        ]);

        match self.resolve_and_run(call) {
            Ok((tool, output)) => {
                let records = output.record_count().to_string();
                let absent = output.is_absent();
                self.metrics.record_answered(absent);
                scope.complete(&[
                    ("records", records.as_str()),
                    ("absent", if absent { "true" } else { "false" }),
                ]);
                Ok(Invocation {
                    call_id,
                    tool,
                    output,
                })
            }
            Err(err) => {
                let reason = err.to_string();
                if err.is_rejection() {
                    self.metrics.increment_rejected();
                    scope.reject(err.code(), &reason);
                } else {
                    self.metrics.increment_failed();
                    scope.fail(err.code(), &reason);
                }
                Err(err)
            }
        }
    }

    fn resolve_and_run(&self, call: &ToolCall) -> InvocationResult<(Tool, QueryOutput)> {
        let tool = Tool::from_name(&call.tool)
            .ok_or_else(|| InvocationError::UnknownTool(call.tool.clone()))?;
        let args = Arguments::new(tool, &call.arguments)?;
        let output = self.run(tool, &args)?;
        Ok((tool, output))
    }

    /// Argument validation completes before the engine is called
    fn run(&self, tool: Tool, args: &Arguments<'_>) -> InvocationResult<QueryOutput> {
        let engine = &self.engine;
        let output = match tool {
            Tool::FindStudent => {
                let first_name = args.string("firstName")?;
                let last_name = args.string("lastName")?;
                QueryOutput::Student(engine.find_student(first_name, last_name)?)
            }
            Tool::ListBySchool => {
                let school = args.string("school")?;
                QueryOutput::SchoolRoster(engine.list_by_school(school)?)
            }
            Tool::SchoolExtremum => {
                let pick_largest = args.boolean_or("pickLargest", true)?;
                QueryOutput::SchoolCount(engine.school_extremum(pick_largest)?)
            }
            Tool::GroupedBySchool => QueryOutput::Groups(engine.grouped_by_school_descending()?),
            Tool::OlderThan => {
                let age_limit = args.integer("ageLimit")?;
                QueryOutput::Students(engine.age_older_than(age_limit)?)
            }
            Tool::YoungerThan => {
                let age_limit = args.integer("ageLimit")?;
                QueryOutput::Students(engine.age_younger_than(age_limit)?)
            }
            Tool::BirthdaysWithinMonths => {
                let months_ahead = args.bounded_integer("monthsAhead", 0, i64::MAX)?;
                QueryOutput::Students(engine.birthday_within_months(months_ahead)?)
            }
            Tool::BornInMonth => {
                let month = args.bounded_integer("month", 1, 12)?;
                QueryOutput::Students(engine.students_born_in_month(month)?)
            }
        };
        Ok(output)
    }
}
