use crate::errors::ToolError;

pub struct Student {
    pub id: i64,
    pub name: &'static str,
    pub year: u8,
}

// Stand-in for the persistence layer, which lives outside this
// runtime and exposes plain record-returning functions.
pub const ROSTER: &[Student] = &[
    Student { id: 1, name: "Ada Lovelace", year: 10 },
    Student { id: 2, name: "Emmy Noether", year: 11 },
    Student { id: 3, name: "Alan Turing", year: 12 },
    Student { id: 4, name: "Grace Hopper", year: 10 },
];

pub fn list_students() -> Result<String, ToolError> {
    let lines: Vec<String> = ROSTER
        .iter()
        .map(|s| format!("{}: {} (year {})", s.id, s.name, s.year))
        .collect();
    Ok(lines.join("\n"))
}

pub fn find_student(name: &str) -> Result<String, ToolError> {
    let needle = name.to_lowercase();
    let matches: Vec<String> = ROSTER
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .map(|s| format!("{}: {} (year {})", s.id, s.name, s.year))
        .collect();

    if matches.is_empty() {
        return Err(ToolError::runtime(format!("no student matching '{}'", name)));
    }
    Ok(matches.join("\n"))
}
