//! # Catalog Module
//!
//! The book catalog: record type, per-operation input schemas, and the
//! service implementing create/list/get/update/delete against the store.
//!
//! Every operation is a load → locate/mutate → persist cycle over the full
//! collection, serialized by a process-wide lock.

pub mod book;
pub mod errors;
pub mod input;
pub mod service;

pub use book::{Book, Year};
pub use errors::{CatalogError, CatalogResult};
pub use input::{BookPatch, NewBook};
pub use service::Catalog;
