//! JSON file record source
//!
//! The roster file is a JSON array of student objects. It is re-read on every
//! snapshot, so edits made between calls become visible on the next call.
//! The file handle lives only for the duration of one `snapshot()` call.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::errors::{SourceError, SourceResult};
use super::source::{RecordSource, Snapshot};
use super::student::Student;

/// Record source backed by a JSON roster file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the given file. The file is not opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the roster file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_text(&self) -> SourceResult<String> {
        let io_error = |source| SourceError::Io {
            path: self.path.clone(),
            source,
        };

        let file = File::open(&self.path).map_err(io_error)?;
        let mut text = String::new();
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(io_error)?;
        Ok(text)
    }
}

impl RecordSource for JsonFileSource {
    fn snapshot(&self) -> SourceResult<Snapshot> {
        let text = self.read_text()?;
        let students = parse_roster(&self.path.display().to_string(), &text)?;
        Snapshot::new(students)
    }
}

/// Parses a JSON roster document
pub(crate) fn parse_roster(origin: &str, text: &str) -> SourceResult<Vec<Student>> {
    serde_json::from_str(text).map_err(|e| SourceError::malformed(origin, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_roster(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_roster_in_file_order() {
        let file = write_roster(
            r#"[
                {"id": 2, "firstName": "Ann", "lastName": "Fay", "school": "Mining"},
                {"id": 1, "firstName": "Tom", "lastName": "Max", "school": "Nursing",
                 "dateOfBirth": "2005-03-12"}
            ]"#,
        );

        let source = JsonFileSource::new(file.path());
        let snapshot = source.snapshot().unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, 2);
        assert_eq!(snapshot[1].id, 1);
        assert!(snapshot[1].date_of_birth.is_some());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));

        assert!(matches!(source.snapshot(), Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_roster(r#"{"id": 1}"#);
        let source = JsonFileSource::new(file.path());

        assert!(matches!(
            source.snapshot(),
            Err(SourceError::Malformed { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids() {
        let file = write_roster(
            r#"[{"id": 1, "school": "Mining"}, {"id": 1, "school": "Nursing"}]"#,
        );
        let source = JsonFileSource::new(file.path());

        assert!(matches!(source.snapshot(), Err(SourceError::DuplicateId(1))));
    }

    #[test]
    fn test_changes_visible_on_next_snapshot() {
        let file = write_roster(r#"[{"id": 1, "school": "Mining"}]"#);
        let source = JsonFileSource::new(file.path().to_path_buf());
        assert_eq!(source.snapshot().unwrap().len(), 1);

        let first = source.snapshot().unwrap();

        std::fs::write(
            file.path(),
            r#"[{"id": 1, "school": "Mining"}, {"id": 2, "school": "Nursing"}]"#,
        )
        .unwrap();

        assert_eq!(source.snapshot().unwrap().len(), 2);
        // Earlier snapshot is unaffected
        assert_eq!(first.len(), 1);
    }
}
