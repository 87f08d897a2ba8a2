//! Store and token wiring behind the handlers.

use std::sync::Arc;

use sqlx::PgPool;

use planner_auth::TokenAuthority;
use planner_infra::{
    EventStore, InMemoryEventStore, InMemoryUserStore, PostgresEventStore, PostgresUserStore,
    UserStore,
};

/// Everything the route handlers need, behind trait objects so tests can run
/// against the in-memory stores.
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub events: Arc<dyn EventStore>,
    pub tokens: Arc<TokenAuthority>,
}

impl AppServices {
    /// Production wiring: both stores on the shared Postgres pool.
    pub fn postgres(pool: PgPool, jwt_secret: &str) -> Self {
        Self {
            users: Arc::new(PostgresUserStore::new(pool.clone())),
            events: Arc::new(PostgresEventStore::new(pool)),
            tokens: Arc::new(TokenAuthority::new(jwt_secret.as_bytes())),
        }
    }

    /// Test/dev wiring: in-memory stores, no database.
    pub fn in_memory(jwt_secret: &str) -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            events: Arc::new(InMemoryEventStore::new()),
            tokens: Arc::new(TokenAuthority::new(jwt_secret.as_bytes())),
        }
    }
}
