//! Built-in seed roster
//!
//! 108 students across five schools, every one with a birth date. Used when
//! no roster file is configured.

use super::errors::SourceResult;
use super::file::parse_roster;
use super::memory::InMemorySource;

const SEED_ROSTER: &str = include_str!("../../data/students.json");

/// Number of students in the seed roster
pub const SEED_SIZE: usize = 108;

/// Loads the bundled roster into memory
pub fn seed_roster() -> SourceResult<InMemorySource> {
    InMemorySource::new(parse_roster("seed roster", SEED_ROSTER)?)
}
