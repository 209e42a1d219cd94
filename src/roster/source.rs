//! Record source capability
//!
//! A source hands out whole-collection snapshots. The engine acquires exactly
//! one snapshot per operation, so every computation sees one consistent view
//! even if the underlying roster changes between calls.

use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use super::errors::{SourceError, SourceResult};
use super::student::Student;

/// Read-only supplier of the full student collection
pub trait RecordSource {
    /// Returns all current students in stable collection order
    fn snapshot(&self) -> SourceResult<Snapshot>;
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn snapshot(&self) -> SourceResult<Snapshot> {
        (**self).snapshot()
    }
}

impl<T: RecordSource + ?Sized> RecordSource for Arc<T> {
    fn snapshot(&self) -> SourceResult<Snapshot> {
        (**self).snapshot()
    }
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn snapshot(&self) -> SourceResult<Snapshot> {
        (**self).snapshot()
    }
}

/// Immutable, ordered view of the roster
///
/// Cloning is cheap: the records are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    students: Arc<[Student]>,
}

impl Snapshot {
    /// Builds a snapshot, rejecting duplicate ids
    pub fn new(students: Vec<Student>) -> SourceResult<Self> {
        let mut seen = HashSet::with_capacity(students.len());
        for student in &students {
            if !seen.insert(student.id) {
                return Err(SourceError::DuplicateId(student.id));
            }
        }
        Ok(Self {
            students: students.into(),
        })
    }

    /// An empty roster
    pub fn empty() -> Self {
        Self {
            students: Arc::from(Vec::new()),
        }
    }

    /// Students in collection order
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

impl Deref for Snapshot {
    type Target = [Student];

    fn deref(&self) -> &Self::Target {
        &self.students
    }
}
