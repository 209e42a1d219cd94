//! Tool catalog
//!
//! The complete public surface offered to callers: one named tool per query
//! operation, each with typed parameters and a human-readable description.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// JSON type a parameter must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
}

/// Default applied when an optional parameter is omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Boolean(bool),
}

/// One tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamDefault>,
    pub description: &'static str,
}

impl ParamSpec {
    const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description,
        }
    }
}

/// Serializable description of one tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParamSpec],
}

/// The named query operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    FindStudent,
    ListBySchool,
    SchoolExtremum,
    GroupedBySchool,
    OlderThan,
    YoungerThan,
    BirthdaysWithinMonths,
    BornInMonth,
}

const FIND_STUDENT_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("firstName", ParamKind::String, "student first name, e.g. Kim"),
    ParamSpec::required("lastName", ParamKind::String, "student last name, e.g. Ash"),
];

const LIST_BY_SCHOOL_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "school",
    ParamKind::String,
    "the school name, e.g. Nursing",
)];

const SCHOOL_EXTREMUM_PARAMS: &[ParamSpec] = &[ParamSpec {
    name: "pickLargest",
    kind: ParamKind::Boolean,
    required: false,
    default: Some(ParamDefault::Boolean(true)),
    description: "true for the school with the most students, false for the fewest",
}];

const AGE_LIMIT_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "ageLimit",
    ParamKind::Integer,
    "age limit in whole calendar years",
)];

const MONTHS_AHEAD_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "monthsAhead",
    ParamKind::Integer,
    "number of months after the current month to include (0 or more)",
)];

const MONTH_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "month",
    ParamKind::Integer,
    "month number, 1 (January) to 12 (December)",
)];

impl Tool {
    /// Every tool, in catalog order
    pub const ALL: [Tool; 8] = [
        Tool::FindStudent,
        Tool::ListBySchool,
        Tool::SchoolExtremum,
        Tool::GroupedBySchool,
        Tool::OlderThan,
        Tool::YoungerThan,
        Tool::BirthdaysWithinMonths,
        Tool::BornInMonth,
    ];

    /// Name used by callers to select the tool
    pub fn name(&self) -> &'static str {
        match self {
            Tool::FindStudent => "find_student",
            Tool::ListBySchool => "list_by_school",
            Tool::SchoolExtremum => "school_extremum",
            Tool::GroupedBySchool => "grouped_by_school",
            Tool::OlderThan => "older_than",
            Tool::YoungerThan => "younger_than",
            Tool::BirthdaysWithinMonths => "birthdays_within_months",
            Tool::BornInMonth => "born_in_month",
        }
    }

    /// Looks a tool up by its exact name
    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Tool::FindStudent => "Get student details by first name and last name",
            Tool::ListBySchool => "Get students in a school given the school name",
            Tool::SchoolExtremum => "Get the school with the most or the fewest students",
            Tool::GroupedBySchool => "Get students grouped by school, largest school first",
            Tool::OlderThan => "Get students older than an age limit",
            Tool::YoungerThan => "Get students younger than an age limit",
            Tool::BirthdaysWithinMonths => {
                "Get students with a birthday from this month through the next n months. \
                 The window does not continue past December."
            }
            Tool::BornInMonth => "Get students born in a given month",
        }
    }

    /// Parameter list
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            Tool::FindStudent => FIND_STUDENT_PARAMS,
            Tool::ListBySchool => LIST_BY_SCHOOL_PARAMS,
            Tool::SchoolExtremum => SCHOOL_EXTREMUM_PARAMS,
            Tool::GroupedBySchool => &[],
            Tool::OlderThan | Tool::YoungerThan => AGE_LIMIT_PARAMS,
            Tool::BirthdaysWithinMonths => MONTHS_AHEAD_PARAMS,
            Tool::BornInMonth => MONTH_PARAMS,
        }
    }

    /// Serializable description
    pub fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name(),
            description: self.description(),
            parameters: self.params(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::from_name(s).ok_or_else(|| format!("unknown tool '{}'", s))
    }
}

/// Descriptions of every tool, in catalog order
pub fn catalog() -> Vec<ToolSpec> {
    Tool::ALL.iter().map(Tool::spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
            assert_eq!(tool.to_string().parse::<Tool>().unwrap(), tool);
        }
        assert_eq!(Tool::from_name("FindStudent"), None);
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = Tool::ALL.iter().map(Tool::name).collect();
        assert_eq!(names.len(), Tool::ALL.len());
    }

    #[test]
    fn test_only_pick_largest_is_optional() {
        for tool in Tool::ALL {
            for param in tool.params() {
                if param.name == "pickLargest" {
                    assert!(!param.required);
                    assert_eq!(param.default, Some(ParamDefault::Boolean(true)));
                } else {
                    assert!(param.required, "{} should be required", param.name);
                }
            }
        }
    }

    #[test]
    fn test_catalog_json() {
        let value = serde_json::to_value(catalog()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 8);

        let extremum = &value[2];
        assert_eq!(extremum["name"], "school_extremum");
        assert_eq!(extremum["parameters"][0]["kind"], "boolean");
        assert_eq!(extremum["parameters"][0]["default"], true);

        let find = &value[0];
        assert!(find["parameters"][0].get("default").is_none());
        assert_eq!(value[3]["parameters"], serde_json::json!([]));
    }
}
