//! Result presentation
//!
//! Converts query outputs into response envelopes or plain text. The shape
//! of the result (single record, list, groups, count) is kept intact.

use serde_json::{json, Value};

use crate::query::QueryOutput;

use super::errors::InvocationError;
use super::invocation::Invocation;

/// Success envelope: `{"status":"ok","call_id":…,"tool":…,"data":…}`
pub fn success_envelope(invocation: &Invocation) -> Value {
    json!({
        "status": "ok",
        "call_id": invocation.call_id.to_string(),
        "tool": invocation.tool.name(),
        "data": invocation.output.to_json(),
    })
}

/// Error envelope: `{"status":"error","code":…,"message":…}`
pub fn error_envelope(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message,
    })
}

/// Error envelope for a failed invocation
pub fn invocation_error_envelope(err: &InvocationError) -> Value {
    error_envelope(err.code(), &err.to_string())
}

/// Human-readable rendering
pub fn render_text(output: &QueryOutput) -> String {
    if output.is_absent() {
        return "no matching records".to_string();
    }
    match output {
        QueryOutput::Student(Some(student)) => student.to_string(),
        QueryOutput::SchoolCount(Some(count)) => {
            format!("{} has {} students", count.school, count.count)
        }
        other => pretty_json(&other.to_json()),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SchoolCount;
    use crate::roster::Student;
    use crate::tools::Tool;
    use uuid::Uuid;

    #[test]
    fn test_success_envelope_keeps_shape() {
        let invocation = Invocation {
            call_id: Uuid::nil(),
            tool: Tool::OlderThan,
            output: QueryOutput::Students(vec![Student::new(2, "Ann", "Fay", "Mining")]),
        };

        let value = success_envelope(&invocation);
        assert_eq!(value["status"], "ok");
        assert_eq!(value["tool"], "older_than");
        assert_eq!(value["data"][0]["id"], 2);
        assert_eq!(value["call_id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_absent_data_is_null() {
        let invocation = Invocation {
            call_id: Uuid::nil(),
            tool: Tool::FindStudent,
            output: QueryOutput::Student(None),
        };
        assert_eq!(success_envelope(&invocation)["data"], Value::Null);
    }

    #[test]
    fn test_error_envelope() {
        let err = InvocationError::UnknownTool("nope".into());
        let value = invocation_error_envelope(&err);
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "ROSTER_UNKNOWN_TOOL");
        assert_eq!(value["message"], "Unknown tool: nope");
    }

    #[test]
    fn test_render_text() {
        let count = QueryOutput::SchoolCount(Some(SchoolCount {
            school: "Nursing".to_string(),
            count: 32,
        }));
        assert_eq!(render_text(&count), "Nursing has 32 students");

        assert_eq!(render_text(&QueryOutput::SchoolRoster(None)), "no matching records");
        assert_eq!(render_text(&QueryOutput::Students(Vec::new())), "[]");

        let student = QueryOutput::Student(Some(Student::new(1, "Tom", "Max", "Nursing")));
        assert_eq!(
            render_text(&student),
            "Tom Max (id 1), school Nursing, born unknown"
        );
    }
}
