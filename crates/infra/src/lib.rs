//! Infrastructure layer: database pool, migrations, and the user/event stores.

pub mod db;
pub mod error;
pub mod event_store;
pub mod user_store;

pub use db::connect;
pub use error::StoreError;
pub use event_store::{EventStore, InMemoryEventStore, PostgresEventStore};
pub use user_store::{InMemoryUserStore, PostgresUserStore, UserStore};
