//! # witness-store
//!
//! SQLite persistence layer for the Witness fact log.
//! WAL mode, idempotent schema application, the session clock, fact
//! insertion, and the eleven derived views that the rule engine reads.

pub mod clock;
pub mod connection;
pub mod facts;
pub mod schema;
pub mod views;

pub use clock::Clock;
pub use connection::Store;
