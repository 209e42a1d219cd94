//! rosterdb - A strict, deterministic, read-only query engine over a student roster
//!
//! Layers, bottom-up:
//! - roster: student records and the sources that supply snapshots of them
//! - query: the eight roster operations, pure over one snapshot
//! - tools: named tool calls with JSON arguments and envelopes
//! - observability: structured logging, events, counters
//! - cli: command-line entry, configuration, serving loop

pub mod cli;
pub mod observability;
pub mod query;
pub mod roster;
pub mod tools;
