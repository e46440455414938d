//! shelfdb - a small, self-hostable book catalog service
//!
//! A JSON store file holds the full catalog; every request loads the
//! collection in full, mutates it in memory, and writes it back in full.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod store;
