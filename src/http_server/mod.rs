//! # HTTP Server Module
//!
//! The HTTP surface of shelfdb: record routes (one handler per catalog
//! operation), a health endpoint, and the error-body mapping.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /records` - Create a record
//! - `GET /records` - List all records
//! - `GET /records/:id` - Get a record by id
//! - `PUT /records/:id` - Partially update a record
//! - `DELETE /records/:id` - Delete a record

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ErrorResponse;
pub use routes::CatalogState;
pub use server::HttpServer;
