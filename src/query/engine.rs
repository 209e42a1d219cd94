//! Query engine for rosterdb
//!
//! Every operation acquires one snapshot from the record source, computes
//! over it, and returns. The engine holds no state of its own beyond the
//! injected source and clock, so it can be shared freely across threads
//! whenever those are.

use crate::roster::{RecordSource, Student};

use super::clock::{Clock, SystemClock};
use super::errors::QueryResult;
use super::filters::BirthFilter;
use super::grouping::SchoolPartition;
use super::result::{SchoolCount, SchoolGroup};

/// Read-only query engine over a record source
#[derive(Debug, Clone)]
pub struct QueryEngine<S, C = SystemClock> {
    source: S,
    clock: C,
}

impl<S: RecordSource> QueryEngine<S, SystemClock> {
    /// Creates an engine that reads "today" from the local clock
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock)
    }
}

impl<S: RecordSource, C: Clock> QueryEngine<S, C> {
    /// Creates an engine with an explicit clock
    pub fn with_clock(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    /// Returns the record source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// First student, in collection order, whose first and last names both
    /// match exactly.
    pub fn find_student(&self, first_name: &str, last_name: &str) -> QueryResult<Option<Student>> {
        let snapshot = self.source.snapshot()?;
        Ok(snapshot
            .iter()
            .find(|s| s.has_name(first_name, last_name))
            .cloned())
    }

    /// All students of one school in collection order.
    ///
    /// Zero matches yields `None`, never an empty list.
    pub fn list_by_school(&self, school: &str) -> QueryResult<Option<Vec<Student>>> {
        let snapshot = self.source.snapshot()?;
        let members: Vec<Student> = snapshot
            .iter()
            .filter(|s| s.school == school)
            .cloned()
            .collect();

        Ok(if members.is_empty() { None } else { Some(members) })
    }

    /// School with the most (or fewest) students.
    ///
    /// Ties go to the school encountered first. `None` only for an empty roster.
    pub fn school_extremum(&self, pick_largest: bool) -> QueryResult<Option<SchoolCount>> {
        let snapshot = self.source.snapshot()?;
        Ok(SchoolPartition::build(&snapshot).extremum(pick_largest))
    }

    /// Every school with its members, largest first, ties in first-seen order
    pub fn grouped_by_school_descending(&self) -> QueryResult<Vec<SchoolGroup>> {
        let snapshot = self.source.snapshot()?;
        Ok(SchoolPartition::build(&snapshot).into_ranked())
    }

    /// Students whose calendar age is strictly greater than `age_limit`
    pub fn age_older_than(&self, age_limit: i64) -> QueryResult<Vec<Student>> {
        self.filter_by_birth(BirthFilter::OlderThan(age_limit))
    }

    /// Students whose calendar age is strictly less than `age_limit`
    pub fn age_younger_than(&self, age_limit: i64) -> QueryResult<Vec<Student>> {
        self.filter_by_birth(BirthFilter::YoungerThan(age_limit))
    }

    /// Students whose birth month falls in `[this month, this month + months_ahead]`.
    ///
    /// Known limitation: the window does not wrap into the next year.
    pub fn birthday_within_months(&self, months_ahead: i64) -> QueryResult<Vec<Student>> {
        self.filter_by_birth(BirthFilter::UpcomingWithin(months_ahead))
    }

    /// Students born in the given month (1-12). Other values match nothing.
    pub fn students_born_in_month(&self, month: i64) -> QueryResult<Vec<Student>> {
        self.filter_by_birth(BirthFilter::BornInMonth(month))
    }

    fn filter_by_birth(&self, filter: BirthFilter) -> QueryResult<Vec<Student>> {
        let snapshot = self.source.snapshot()?;
        let today = self.clock.today();
        Ok(filter.apply(&snapshot, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FixedClock;
    use crate::roster::{InMemorySource, JsonFileSource};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine(students: Vec<Student>) -> QueryEngine<InMemorySource, FixedClock> {
        QueryEngine::with_clock(
            InMemorySource::new(students).unwrap(),
            FixedClock(date(2025, 6, 15)),
        )
    }

    fn reference_roster() -> Vec<Student> {
        vec![
            Student::new(1, "Tom", "Max", "Nursing").born(date(2005, 3, 12)),
            Student::new(2, "Ann", "Fay", "Mining").born(date(2004, 7, 22)),
            Student::new(3, "Joe", "Sun", "Nursing").born(date(2003, 11, 5)),
        ]
    }

    fn ids(students: &[Student]) -> Vec<i64> {
        students.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_find_student_first_match_wins() {
        let engine = engine(vec![
            Student::new(1, "Tom", "Max", "Nursing"),
            Student::new(2, "Tom", "Max", "Mining"),
        ]);

        let found = engine.find_student("Tom", "Max").unwrap().unwrap();
        assert_eq!(found.id, 1);
        assert!(engine.find_student("Tom", "Min").unwrap().is_none());
        assert!(engine.find_student("", "").unwrap().is_none());
    }

    #[test]
    fn test_list_by_school() {
        let engine = engine(reference_roster());

        let nursing = engine.list_by_school("Nursing").unwrap().unwrap();
        assert_eq!(ids(&nursing), vec![1, 3]);
        assert_eq!(engine.list_by_school("Law").unwrap(), None);
        assert_eq!(engine.list_by_school("nursing").unwrap(), None);
    }

    #[test]
    fn test_school_extremum() {
        let engine = engine(reference_roster());

        let largest = engine.school_extremum(true).unwrap().unwrap();
        assert_eq!(largest.school, "Nursing");
        assert_eq!(largest.count, 2);

        let smallest = engine.school_extremum(false).unwrap().unwrap();
        assert_eq!(smallest.school, "Mining");
        assert_eq!(smallest.count, 1);
    }

    #[test]
    fn test_grouped_by_school_descending() {
        let engine = engine(reference_roster());
        let groups = engine.grouped_by_school_descending().unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].school, "Nursing");
        assert_eq!(ids(&groups[0].members), vec![1, 3]);
        assert_eq!(groups[1].school, "Mining");
    }

    #[test]
    fn test_reference_date_example() {
        let engine = engine(reference_roster());

        assert_eq!(ids(&engine.age_older_than(20).unwrap()), vec![2, 3]);
        assert_eq!(ids(&engine.age_younger_than(21).unwrap()), vec![1]);
        assert_eq!(ids(&engine.students_born_in_month(11).unwrap()), vec![3]);
        assert_eq!(ids(&engine.birthday_within_months(1).unwrap()), vec![2]);
        assert!(engine.birthday_within_months(0).unwrap().is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let engine = engine(Vec::new());

        assert!(engine.find_student("Tom", "Max").unwrap().is_none());
        assert!(engine.list_by_school("Nursing").unwrap().is_none());
        assert!(engine.school_extremum(true).unwrap().is_none());
        assert!(engine.school_extremum(false).unwrap().is_none());
        assert!(engine.grouped_by_school_descending().unwrap().is_empty());
        assert!(engine.age_older_than(0).unwrap().is_empty());
        assert!(engine.age_younger_than(100).unwrap().is_empty());
        assert!(engine.birthday_within_months(12).unwrap().is_empty());
        assert!(engine.students_born_in_month(6).unwrap().is_empty());
    }

    #[test]
    fn test_source_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let engine = QueryEngine::new(JsonFileSource::new(dir.path().join("absent.json")));

        let err = engine.find_student("Tom", "Max").unwrap_err();
        assert_eq!(err.code(), crate::query::QueryErrorCode::SourceUnavailable);
    }

    #[test]
    fn test_engine_does_not_mutate_source() {
        let engine = engine(reference_roster());
        let before = engine.source().snapshot().unwrap();

        engine.grouped_by_school_descending().unwrap();
        engine.age_older_than(0).unwrap();

        assert_eq!(engine.source().snapshot().unwrap(), before);
    }
}
