//! Event persistence boundary.
//!
//! This module defines an infrastructure-facing abstraction for the event
//! CRUD operations without making any storage assumptions.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryEventStore;
pub use postgres::PostgresEventStore;
pub use r#trait::EventStore;
