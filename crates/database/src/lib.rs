//! # Paygrade Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! MySQL company database.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** This crate encapsulates all database-specific logic. It
//!   provides a clean, abstract API to the rest of the application, hiding
//!   the underlying SQL and driver details.
//! - **Asynchronous & Pooled:** All operations are asynchronous and run over
//!   a shared connection pool (`MySqlPool`), so connections are recycled and
//!   released on every path, including failures.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: A utility to apply the embedded schema migrations.
//! - `DbRepository`: The main struct that holds the connection pool and
//!   provides the data access methods.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::DbRepository;
