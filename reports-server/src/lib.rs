//! Reports dashboard server
//!
//! Wires configuration, the report store, the query engine and the REST API
//! into a single axum application.

pub mod logging;
pub mod startup;

pub use logging::init_logging;
pub use startup::Server;
