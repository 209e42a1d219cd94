//! Birth-date filters
//!
//! Every filter pattern-matches the optional birth date first: a student
//! without one never matches, whatever the filter.
//!
//! Date arithmetic is deliberately coarse:
//! - Age is `today.year - birth.year`. Month and day are ignored.
//! - The upcoming-birthday window compares raw month numbers and does not
//!   wrap past December. October + 4 months matches October..=December only.

use chrono::{Datelike, NaiveDate};

use crate::roster::Student;

/// A predicate over a student's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthFilter {
    /// Calendar age strictly greater than the limit
    OlderThan(i64),
    /// Calendar age strictly less than the limit
    YoungerThan(i64),
    /// Birth month in `[current month, current month + n]`, no wraparound
    UpcomingWithin(i64),
    /// Birth month equals the given month number
    BornInMonth(i64),
}

impl BirthFilter {
    /// Checks one student against the filter as of `today`
    pub fn matches(&self, student: &Student, today: NaiveDate) -> bool {
        let (birth_year, birth_month) = match (student.birth_year(), student.birth_month()) {
            (Some(year), Some(month)) => (year, i64::from(month)),
            _ => return false,
        };

        match *self {
            BirthFilter::OlderThan(limit) => calendar_age(birth_year, today) > limit,
            BirthFilter::YoungerThan(limit) => calendar_age(birth_year, today) < limit,
            BirthFilter::UpcomingWithin(months_ahead) => {
                let current = i64::from(today.month());
                birth_month >= current && birth_month <= current.saturating_add(months_ahead)
            }
            BirthFilter::BornInMonth(month) => birth_month == month,
        }
    }

    /// Returns the matching students in their original order
    pub fn apply(&self, students: &[Student], today: NaiveDate) -> Vec<Student> {
        students
            .iter()
            .filter(|s| self.matches(s, today))
            .cloned()
            .collect()
    }
}

/// Whole calendar-year difference between the birth year and today
pub fn calendar_age(birth_year: i32, today: NaiveDate) -> i64 {
    i64::from(today.year()) - i64::from(birth_year)
}
