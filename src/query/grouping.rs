//! Partitioning students by school
//!
//! The partition is built in one scan and keeps groups in the order their
//! school was first encountered. All tie-breaks between equally sized groups
//! resolve to that first-seen order.

use std::collections::HashMap;

use crate::roster::Student;

use super::result::{SchoolCount, SchoolGroup};

/// Students grouped by school, groups in first-seen order
#[derive(Debug, Clone, Default)]
pub struct SchoolPartition {
    groups: Vec<SchoolGroup>,
}

impl SchoolPartition {
    /// Partitions students by exact school name
    pub fn build(students: &[Student]) -> Self {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<SchoolGroup> = Vec::new();

        for student in students {
            let slot = *slots.entry(student.school.as_str()).or_insert_with(|| {
                groups.push(SchoolGroup::new(student.school.as_str()));
                groups.len() - 1
            });
            groups[slot].members.push(student.clone());
        }

        Self { groups }
    }

    /// Groups in first-seen order
    pub fn groups(&self) -> &[SchoolGroup] {
        &self.groups
    }

    /// Number of distinct schools
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Largest or smallest group. Equal sizes resolve to the first-seen school.
    ///
    /// Returns `None` only for an empty partition.
    pub fn extremum(&self, pick_largest: bool) -> Option<SchoolCount> {
        let mut best: Option<&SchoolGroup> = None;
        for group in &self.groups {
            let replace = match best {
                None => true,
                Some(current) if pick_largest => group.len() > current.len(),
                Some(current) => group.len() < current.len(),
            };
            if replace {
                best = Some(group);
            }
        }
        best.map(SchoolGroup::count)
    }

    /// Groups by descending size, equal sizes in first-seen order
    pub fn into_ranked(self) -> Vec<SchoolGroup> {
        let mut ranked: Vec<(usize, SchoolGroup)> = self.groups.into_iter().enumerate().collect();
        ranked.sort_by(|(a_seen, a), (b_seen, b)| {
            b.len().cmp(&a.len()).then(a_seen.cmp(b_seen))
        });
        ranked.into_iter().map(|(_, group)| group).collect()
    }
}
