use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use planner_core::{Event, EventId, EventPatch};

use super::r#trait::EventStore;
use crate::error::StoreError;

/// In-memory event store, insertion-ordered.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    // Insertion order is kept separately so `list` matches the Postgres
    // store's oldest-first ordering.
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    events: HashMap<EventId, Event>,
    order: Vec<EventId>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Database("lock poisoned".to_string())
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, event: Event) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.events.contains_key(&event.id) {
            return Err(StoreError::Duplicate(format!(
                "event id already exists: {}",
                event.id
            )));
        }
        inner.order.push(event.id);
        inner.events.insert(event.id, event);
        Ok(())
    }

    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.events.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.events.get(id).cloned())
            .collect())
    }

    async fn update(&self, id: EventId, patch: &EventPatch) -> Result<Event, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let event = inner.events.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch.apply_to(event);
        Ok(event.clone())
    }

    async fn delete(&self, id: EventId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.events.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        inner.order.retain(|other| *other != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::EventDraft;

    fn event(title: &str) -> Event {
        EventDraft {
            title: title.to_string(),
            image: "https://linktomyimage.com/image.png".to_string(),
            description: "description".to_string(),
            tags: vec!["python".to_string()],
            location: "Google Meet".to_string(),
        }
        .into_event("reader@packt.com")
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let store = InMemoryEventStore::new();
        let created = event("FastAPI Book Launch");
        let id = created.id;

        store.create(created.clone()).await.unwrap();
        assert_eq!(store.get(id).await.unwrap(), Some(created));

        let patch = EventPatch {
            title: Some("Updated FastAPI event".to_string()),
            ..EventPatch::default()
        };
        let updated = store.update(id, &patch).await.unwrap();
        assert_eq!(updated.title, "Updated FastAPI event");
        assert_eq!(updated.location, "Google Meet");

        store.delete(id).await.unwrap();
        assert_eq!(store.get(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_is_insertion_ordered() {
        let store = InMemoryEventStore::new();
        let first = event("first");
        let second = event("second");

        store.create(first.clone()).await.unwrap();
        store.create(second.clone()).await.unwrap();

        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = InMemoryEventStore::new();
        let err = store
            .update(EventId::new(), &EventPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = InMemoryEventStore::new();
        let err = store.delete(EventId::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
