//! JSON documents exchanged with surrounding tools.
//!
//! - [`ProjectDocument`]: roster and backlog, top-level keys `employees`
//!   and `tasks` (either may be missing).
//! - [`AssignmentExport`]: the latest run's `assignments` plus its `summary`.
//!
//! Both read and write strings, readers/writers, or files by path. File
//! open and create failures surface as [`AssignError::Io`](crate::AssignError::Io).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::assigner::AssignmentSummary;
use crate::error::Result;
use crate::models::{Assignment, Employee, Task};

/// Roster and backlog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Output of an assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExport {
    pub assignments: Vec<Assignment>,
    pub summary: AssignmentSummary,
}

impl ProjectDocument {
    pub fn new(employees: Vec<Employee>, tasks: Vec<Task>) -> Self {
        Self { employees, tasks }
    }

    /// Parses a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        from_json_str(json)
    }

    /// Parses a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        from_reader(reader)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes pretty-printed JSON to `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Reads JSON from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load(path.as_ref())
    }

    /// Writes pretty-printed JSON to the file at `path`, replacing it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save(self, path.as_ref())
    }
}

impl AssignmentExport {
    /// Parses an export from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        from_json_str(json)
    }

    /// Parses an export from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        from_reader(reader)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes pretty-printed JSON to `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Reads JSON from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load(path.as_ref())
    }

    /// Writes pretty-printed JSON to the file at `path`, replacing it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save(self, path.as_ref())
    }
}

fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

fn from_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<T> {
    Ok(serde_json::from_reader(reader)?)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

fn save<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignError;
    use crate::models::{Complexity, ExperienceLevel, Priority};

    const PROJECT: &str = r#"{
        "employees": [
            {
                "id": "emp1",
                "name": "Alice Johnson",
                "skills": ["python", "django", "postgresql"],
                "experience_level": "senior",
                "availability_hours": 40.0
            }
        ],
        "tasks": [
            {
                "id": "task1",
                "title": "Backend API Development",
                "description": "Develop REST API endpoints",
                "required_skills": ["python", "django"],
                "estimated_hours": 16.0,
                "priority": "high",
                "complexity": "moderate",
                "dependencies": []
            },
            {
                "id": "task2",
                "title": "Deploy",
                "description": "Ship it",
                "required_skills": [],
                "estimated_hours": 4,
                "priority": "critical",
                "complexity": "simple",
                "dependencies": ["task1"]
            }
        ]
    }"#;

    #[test]
    fn test_parse_project() {
        let doc = ProjectDocument::from_json_str(PROJECT).unwrap();
        assert_eq!(doc.employees.len(), 1);
        assert_eq!(doc.employees[0].experience_level, ExperienceLevel::Senior);
        assert_eq!(doc.tasks.len(), 2);
        assert_eq!(doc.tasks[1].priority, Priority::Critical);
        assert_eq!(doc.tasks[1].complexity, Complexity::Simple);
        assert_eq!(doc.tasks[1].dependencies, vec!["task1"]);
        assert!((doc.tasks[1].estimated_hours - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let doc = ProjectDocument::from_json_str(r#"{"tasks": []}"#).unwrap();
        assert!(doc.employees.is_empty());
        let doc = ProjectDocument::from_json_str("{}").unwrap();
        assert_eq!(doc, ProjectDocument::default());
    }

    #[test]
    fn test_reader_and_writer() {
        let doc = ProjectDocument::from_reader(PROJECT.as_bytes()).unwrap();
        let mut buf = Vec::new();
        doc.to_writer(&mut buf).unwrap();
        let back = ProjectDocument::from_reader(buf.as_slice()).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_invalid_json() {
        let err = ProjectDocument::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AssignError::Serialization(_)));
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");

        let doc = ProjectDocument::from_json_str(PROJECT).unwrap();
        doc.save(&path).unwrap();
        assert_eq!(ProjectDocument::load(&path).unwrap(), doc);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectDocument::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AssignError::Io(_)));

        let err = ProjectDocument::default()
            .save(dir.path().join("no_such_dir").join("out.json"))
            .unwrap_err();
        assert!(matches!(err, AssignError::Io(_)));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let json = PROJECT.replace("\"senior\"", "\"principal\"");
        assert!(ProjectDocument::from_json_str(&json).is_err());
    }
}
