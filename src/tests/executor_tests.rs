use std::sync::Arc;

use crate::errors::ToolError;
use crate::executor::{ERROR_HANDLER_NAME, ToolExecutor};
use crate::registry::ToolRegistry;
use crate::schema::ToolDefinition;
use crate::types::ToolCallRequest;

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_add() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry
            .register(
                ToolDefinition::builder("add")
                    .description("Adds two whole numbers.")
                    .param("a", "int", "First operand")
                    .param("b", "int", "Second operand")
                    .build(),
                |args| {
                    let a = args
                        .get("a")
                        .and_then(|v| v.as_i64())
                        .ok_or_else(|| ToolError::invalid("missing integer 'a'"))?;
                    let b = args
                        .get("b")
                        .and_then(|v| v.as_i64())
                        .ok_or_else(|| ToolError::invalid("missing integer 'b'"))?;
                    Ok((a + b).to_string())
                },
            )
            .unwrap();
        registry
    }

    fn request(name: &str, args: &str) -> ToolCallRequest {
        ToolCallRequest {
            id: "call-1".to_string(),
            name: name.to_string(),
            raw_arguments: args.to_string(),
        }
    }

    #[test]
    fn test_execute_success_returns_stringified_value() {
        let executor = ToolExecutor::new(Arc::new(registry_with_add()));
        let result = executor.execute(&request("add", r#"{"a": 2, "b": 3}"#));

        assert_eq!(result.content, "5");
        assert_eq!(result.name, "add");
        assert_eq!(result.tool_call_id, "call-1");
    }

    #[test]
    fn test_execute_unknown_tool_reports_not_found() {
        let executor = ToolExecutor::new(Arc::new(registry_with_add()));
        let result = executor.execute(&request("ghost_tool", "{}"));

        assert!(result.content.contains("not found"));
        assert!(result.content.contains("ghost_tool"));
        assert_eq!(result.name, ERROR_HANDLER_NAME);
        assert_eq!(result.tool_call_id, "call-1");
    }

    #[test]
    fn test_execute_malformed_json_reports_invalid_format() {
        let executor = ToolExecutor::new(Arc::new(registry_with_add()));
        let result = executor.execute(&request("add", "{not json"));

        assert!(result.content.contains("Invalid arguments format"));
        assert_eq!(result.name, ERROR_HANDLER_NAME);
        assert_eq!(result.tool_call_id, "call-1");
    }

    #[test]
    fn test_execute_non_object_json_reports_invalid_format() {
        let executor = ToolExecutor::new(Arc::new(registry_with_add()));
        let result = executor.execute(&request("add", "[1, 2]"));

        assert!(result.content.contains("Invalid arguments format"));
        assert_eq!(result.name, ERROR_HANDLER_NAME);
    }

    #[test]
    fn test_execute_wrong_keys_reports_invalid_arguments() {
        let executor = ToolExecutor::new(Arc::new(registry_with_add()));
        let result = executor.execute(&request("add", r#"{"x": 2}"#));

        assert!(result.content.contains("invalid arguments for tool 'add'"));
        // The failing call still answers under the tool's own name.
        assert_eq!(result.name, "add");
        assert_eq!(result.tool_call_id, "call-1");
    }

    #[test]
    fn test_execute_tool_runtime_failure_reports_unexpected_error() {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDefinition::builder("flaky").build(), |_| {
                Err(ToolError::runtime("database went away"))
            })
            .unwrap();
        let executor = ToolExecutor::new(Arc::new(registry));

        let result = executor.execute(&request("flaky", "{}"));
        assert!(result.content.contains("unexpected error"));
        assert!(result.content.contains("database went away"));
    }

    #[test]
    fn test_builtin_tools_dispatch_through_executor() {
        let mut registry = ToolRegistry::new();
        crate::tools::register_all(&mut registry).unwrap();
        let executor = ToolExecutor::new(Arc::new(registry));

        let roster = executor.execute(&request("list_students", "{}"));
        assert!(roster.content.contains("Ada Lovelace"));

        let avg = executor.execute(&request("average_grade", r#"{"student_id": 1}"#));
        assert_eq!(avg.content, "92.0");

        let missing = executor.execute(&request("average_grade", r#"{"student_id": 999}"#));
        assert!(missing.content.contains("unexpected error"));

        // Record for a student with no seed grades, then read it back.
        let recorded = executor.execute(&request(
            "record_grade",
            r#"{"student_id": 4, "subject": "math", "score": 90.0}"#,
        ));
        assert!(recorded.content.contains("recorded"));
        let avg4 = executor.execute(&request("average_grade", r#"{"student_id": 4}"#));
        assert_eq!(avg4.content, "90.0");

        let out_of_range = executor.execute(&request(
            "record_grade",
            r#"{"student_id": 4, "subject": "math", "score": 140.0}"#,
        ));
        assert!(out_of_range.content.contains("invalid arguments for tool 'record_grade'"));
    }
}
