//! In-memory record source

use super::errors::SourceResult;
use super::source::{RecordSource, Snapshot};
use super::student::Student;

/// A fixed roster held in memory
///
/// Every snapshot shares the same records.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    snapshot: Snapshot,
}

impl InMemorySource {
    /// Creates a source over the given students, in the given order
    pub fn new(students: Vec<Student>) -> SourceResult<Self> {
        Ok(Self {
            snapshot: Snapshot::new(students)?,
        })
    }

    /// A source with no students
    pub fn empty() -> Self {
        Self {
            snapshot: Snapshot::empty(),
        }
    }

    /// Number of students held
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Returns true if the roster is empty
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

impl RecordSource for InMemorySource {
    fn snapshot(&self) -> SourceResult<Snapshot> {
        Ok(self.snapshot.clone())
    }
}

impl From<Snapshot> for InMemorySource {
    fn from(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}
