//! Roster subsystem for rosterdb
//!
//! Supplies the read-only student collection the query engine works over.
//!
//! # Guarantees
//!
//! - Records are yielded in a stable collection order
//! - Student ids are unique within a snapshot
//! - A snapshot is immutable for its whole lifetime
//!
//! Sources never expose a write path. How a source is populated is its own
//! business; the engine only ever calls [`RecordSource::snapshot`].

mod errors;
mod file;
mod memory;
pub mod seed;
mod source;
mod student;

pub use errors::{SourceError, SourceResult};
pub use file::JsonFileSource;
pub use memory::InMemorySource;
pub use seed::seed_roster;
pub use source::{RecordSource, Snapshot};
pub use student::{Student, StudentId};
