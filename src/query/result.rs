//! Result types for query operations

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::roster::Student;

/// A school and how many students it has
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCount {
    /// School name
    pub school: String,
    /// Number of students
    pub count: usize,
}

/// A school with its members in collection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolGroup {
    /// School name
    pub school: String,
    /// Members in collection order
    pub members: Vec<Student>,
}

impl SchoolGroup {
    /// Creates an empty group
    pub fn new(school: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            members: Vec::new(),
        }
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Group size as a count
    pub fn count(&self) -> SchoolCount {
        SchoolCount {
            school: self.school.clone(),
            count: self.members.len(),
        }
    }
}

impl Serialize for SchoolGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SchoolGroup", 3)?;
        state.serialize_field("school", &self.school)?;
        state.serialize_field("count", &self.members.len())?;
        state.serialize_field("members", &self.members)?;
        state.end()
    }
}

/// The result of any query operation, preserving its shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    /// Single record or absent
    Student(Option<Student>),
    /// Possibly empty list
    Students(Vec<Student>),
    /// Non-empty list or absent
    SchoolRoster(Option<Vec<Student>>),
    /// School with its size, or absent
    SchoolCount(Option<SchoolCount>),
    /// Ordered school groups
    Groups(Vec<SchoolGroup>),
}

impl QueryOutput {
    /// Returns true if the output is the absent marker
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            QueryOutput::Student(None)
                | QueryOutput::SchoolRoster(None)
                | QueryOutput::SchoolCount(None)
        )
    }

    /// Number of student records carried by the output
    pub fn record_count(&self) -> usize {
        match self {
            QueryOutput::Student(s) => usize::from(s.is_some()),
            QueryOutput::Students(list) => list.len(),
            QueryOutput::SchoolRoster(list) => list.as_ref().map_or(0, Vec::len),
            QueryOutput::SchoolCount(_) => 0,
            QueryOutput::Groups(groups) => groups.iter().map(SchoolGroup::len).sum(),
        }
    }

    /// JSON form. Absent renders as `null`.
    pub fn to_json(&self) -> Value {
        match self {
            QueryOutput::Student(s) => json!(s),
            QueryOutput::Students(list) => json!(list),
            QueryOutput::SchoolRoster(list) => json!(list),
            QueryOutput::SchoolCount(count) => json!(count),
            QueryOutput::Groups(groups) => json!(groups),
        }
    }
}
