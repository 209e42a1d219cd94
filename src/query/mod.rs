//! Query subsystem for rosterdb
//!
//! A fixed set of read-only operations over a roster snapshot.
//!
//! # Execution Flow
//!
//! 1. Acquire one snapshot from the record source
//! 2. Read "today" from the clock (date-derived operations only)
//! 3. Filter, partition or rank in collection order
//! 4. Return the result, with absence carried in the value
//!
//! # Invariants
//!
//! - The roster is never mutated
//! - "First match" and tie-breaks follow collection order
//! - Records without a birth date are skipped by date-derived operations

mod clock;
mod engine;
mod errors;
mod filters;
mod grouping;
mod result;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::QueryEngine;
pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use filters::{calendar_age, BirthFilter};
pub use grouping::SchoolPartition;
pub use result::{QueryOutput, SchoolCount, SchoolGroup};
