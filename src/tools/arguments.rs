//! Argument validation
//!
//! Checks a call's arguments against the tool's parameter list before the
//! engine is touched: no unknown names, no missing required values, exact
//! JSON types. `null` counts as absent.

use serde_json::{Map, Value};

use super::catalog::Tool;
use super::errors::{InvocationError, InvocationResult};

/// Validated view of one call's arguments
#[derive(Debug)]
pub struct Arguments<'a> {
    tool: Tool,
    values: &'a Map<String, Value>,
}

impl<'a> Arguments<'a> {
    /// Wraps the arguments, rejecting names the tool does not declare
    pub fn new(tool: Tool, values: &'a Map<String, Value>) -> InvocationResult<Self> {
        for name in values.keys() {
            if !tool.params().iter().any(|p| p.name == name.as_str()) {
                return Err(InvocationError::invalid(
                    tool.name(),
                    name.as_str(),
                    "not a parameter of this tool",
                ));
            }
        }
        Ok(Self { tool, values })
    }

    fn present(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    fn required(&self, name: &'static str) -> InvocationResult<&'a Value> {
        self.present(name)
            .ok_or(InvocationError::MissingArgument {
                tool: self.tool.name(),
                argument: name,
            })
    }

    fn invalid(&self, name: &str, reason: impl Into<String>) -> InvocationError {
        InvocationError::invalid(self.tool.name(), name, reason)
    }

    /// Required text argument. Empty text is allowed.
    pub fn string(&self, name: &'static str) -> InvocationResult<&'a str> {
        self.required(name)?
            .as_str()
            .ok_or_else(|| self.invalid(name, "expected a string"))
    }

    /// Required whole-number argument
    pub fn integer(&self, name: &'static str) -> InvocationResult<i64> {
        self.required(name)?
            .as_i64()
            .ok_or_else(|| self.invalid(name, "expected an integer"))
    }

    /// Required whole-number argument within `min..=max`
    pub fn bounded_integer(&self, name: &'static str, min: i64, max: i64) -> InvocationResult<i64> {
        let value = self.integer(name)?;
        if value < min || value > max {
            return Err(self.invalid(
                name,
                format!("{} is outside the allowed range {}..={}", value, min, max),
            ));
        }
        Ok(value)
    }

    /// Optional boolean argument
    pub fn boolean_or(&self, name: &'static str, default: bool) -> InvocationResult<bool> {
        match self.present(name) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.invalid(name, "expected a boolean")),
        }
    }
}
