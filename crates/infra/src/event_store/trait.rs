use async_trait::async_trait;

use planner_core::{Event, EventId, EventPatch};

use crate::error::StoreError;

/// Storage abstraction for events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist a new event.
    async fn create(&self, event: Event) -> Result<(), StoreError>;

    /// Fetch one event by id.
    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError>;

    /// List all events, oldest first.
    async fn list(&self) -> Result<Vec<Event>, StoreError>;

    /// Apply a partial update; absent fields are left unchanged.
    ///
    /// Returns the updated event, or `StoreError::NotFound` if `id` does not
    /// exist.
    async fn update(&self, id: EventId, patch: &EventPatch) -> Result<Event, StoreError>;

    /// Delete one event; `StoreError::NotFound` if `id` does not exist.
    async fn delete(&self, id: EventId) -> Result<(), StoreError>;
}
