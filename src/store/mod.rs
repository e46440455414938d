//! Store accessor for shelfdb
//!
//! The store holds the canonical persistent state of the catalog: a single
//! JSON array file read and rewritten in full. There are no incremental
//! updates; the collection is the unit of persistence.
//!
//! # Design Principles
//!
//! - Whole-file read / whole-file write
//! - A rewrite replaces the live file only by rename, after fsync
//! - Missing, unreadable, and malformed files are distinct failures

mod errors;
mod file;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
