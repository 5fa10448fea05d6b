//! Database connectors.
//!
//! Currently MongoDB only; the event store is a document database.

pub mod mongodb;
