use std::sync::{Mutex, OnceLock};

use crate::errors::ToolError;
use crate::tools::roster::ROSTER;

struct Grade {
    student_id: i64,
    subject: String,
    score: f64,
}

fn grade_book() -> &'static Mutex<Vec<Grade>> {
    static GRADES: OnceLock<Mutex<Vec<Grade>>> = OnceLock::new();
    GRADES.get_or_init(|| {
        Mutex::new(vec![
            Grade { student_id: 1, subject: "math".into(), score: 96.0 },
            Grade { student_id: 1, subject: "history".into(), score: 88.0 },
            Grade { student_id: 2, subject: "math".into(), score: 99.0 },
            Grade { student_id: 3, subject: "math".into(), score: 94.0 },
            Grade { student_id: 3, subject: "literature".into(), score: 81.0 },
        ])
    })
}

pub fn average_grade(student_id: i64) -> Result<String, ToolError> {
    if !ROSTER.iter().any(|s| s.id == student_id) {
        return Err(ToolError::runtime(format!("no student with id {}", student_id)));
    }

    let grades = grade_book().lock().unwrap();
    let scores: Vec<f64> = grades
        .iter()
        .filter(|g| g.student_id == student_id)
        .map(|g| g.score)
        .collect();

    if scores.is_empty() {
        return Ok(format!("student {} has no recorded grades", student_id));
    }
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;
    Ok(format!("{:.1}", avg))
}

pub fn record_grade(student_id: i64, subject: &str, score: f64) -> Result<String, ToolError> {
    if !ROSTER.iter().any(|s| s.id == student_id) {
        return Err(ToolError::runtime(format!("no student with id {}", student_id)));
    }
    if !(0.0..=100.0).contains(&score) {
        return Err(ToolError::invalid(format!(
            "score must be between 0 and 100, got {}",
            score
        )));
    }

    grade_book().lock().unwrap().push(Grade {
        student_id,
        subject: subject.to_string(),
        score,
    });
    Ok(format!(
        "recorded {} = {} for student {}",
        subject, score, student_id
    ))
}
