pub use self::grades::{average_grade, record_grade};
pub use self::roster::{find_student, list_students};

mod grades;
mod roster;

use serde_json::{Map, Value};

use crate::errors::{RegistryError, ToolError};
use crate::registry::ToolRegistry;
use crate::schema::ToolDefinition;

/// Registers every built-in school-records tool. Called once at
/// startup; a duplicate name here is a programming defect and aborts.
pub fn register_all(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolDefinition::builder("list_students")
            .description("Lists every student on the roster with id and year.")
            .build(),
        |_args| list_students(),
    )?;

    registry.register(
        ToolDefinition::builder("find_student")
            .description("Looks up a student by name and returns their record.")
            .param("name", "string", "Full or partial student name")
            .build(),
        |args| find_student(req_str(args, "name")?),
    )?;

    registry.register(
        ToolDefinition::builder("average_grade")
            .description("Computes a student's average score across all subjects.")
            .param("student_id", "int", "Numeric id of the student")
            .build(),
        |args| average_grade(req_i64(args, "student_id")?),
    )?;

    registry.register(
        ToolDefinition::builder("record_grade")
            .description("Records a score for a student in one subject.")
            .param("student_id", "int", "Numeric id of the student")
            .param("subject", "string", "Subject the score belongs to")
            .param("score", "float", "Score between 0 and 100")
            .build(),
        |args| {
            record_grade(
                req_i64(args, "student_id")?,
                req_str(args, "subject")?,
                req_f64(args, "score")?,
            )
        },
    )?;

    Ok(())
}

pub fn req_str<'a>(args: &'a Map<String, Value>, key: &str) -> Result<&'a str, ToolError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::invalid(format!("missing or non-string argument '{}'", key)))
}

pub fn req_i64(args: &Map<String, Value>, key: &str) -> Result<i64, ToolError> {
    args.get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ToolError::invalid(format!("missing or non-integer argument '{}'", key)))
}

pub fn req_f64(args: &Map<String, Value>, key: &str) -> Result<f64, ToolError> {
    args.get(key)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| ToolError::invalid(format!("missing or non-numeric argument '{}'", key)))
}
