//! User persistence boundary.
//!
//! This module defines an infrastructure-facing abstraction for storing and
//! looking up users without making any storage assumptions.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
pub use r#trait::UserStore;
