//! # citemap-storage
//!
//! SQLite persistence for the citemap workspace: connection management,
//! schema migrations, table query modules, and [`SqliteStore`], the
//! concrete implementation of the core storage traits.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::Database;
pub use store::SqliteStore;
