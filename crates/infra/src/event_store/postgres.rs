//! Postgres-backed event store.
//!
//! Partial updates use `COALESCE($n, column)` so absent patch fields keep the
//! stored value; the presence check therefore lives in one UPDATE statement
//! instead of a read-modify-write cycle.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use planner_core::{Event, EventId, EventPatch};

use super::r#trait::EventStore;
use crate::error::{map_sqlx_error, StoreError};

/// Postgres-backed event store.
///
/// `events.creator` references `users.email`, so an event can only be created
/// for an existing user; deleting a user cascades to their events.
#[derive(Debug, Clone)]
pub struct PostgresEventStore {
    pool: PgPool,
}

impl PostgresEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EventRow {
    id: Uuid,
    creator: String,
    title: String,
    image: String,
    description: String,
    tags: Vec<String>,
    location: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: EventId::from_uuid(row.id),
            creator: row.creator,
            title: row.title,
            image: row.image,
            description: row.description,
            tags: row.tags,
            location: row.location,
        }
    }
}

fn decode_event(row: &sqlx::postgres::PgRow) -> Result<Event, StoreError> {
    EventRow::from_row(row)
        .map(Event::from)
        .map_err(|e| StoreError::Database(format!("failed to decode event row: {e}")))
}

const EVENT_COLUMNS: &str = "id, creator, title, image, description, tags, location";

#[async_trait]
impl EventStore for PostgresEventStore {
    #[instrument(skip(self, event), fields(event_id = %event.id), err)]
    async fn create(&self, event: Event) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO events (id, creator, title, image, description, tags, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.creator)
        .bind(&event.title)
        .bind(&event.image)
        .bind(&event.description)
        .bind(&event.tags)
        .bind(&event.location)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("events.create", e))?;

        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("events.get", e))?;

        row.as_ref().map(decode_event).transpose()
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("events.list", e))?;

        rows.iter().map(decode_event).collect()
    }

    #[instrument(skip(self, patch), err)]
    async fn update(&self, id: EventId, patch: &EventPatch) -> Result<Event, StoreError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE events
            SET title       = COALESCE($2, title),
                image       = COALESCE($3, image),
                description = COALESCE($4, description),
                tags        = COALESCE($5, tags),
                location    = COALESCE($6, location)
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(&patch.title)
        .bind(&patch.image)
        .bind(&patch.description)
        .bind(&patch.tags)
        .bind(&patch.location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("events.update", e))?;

        match row {
            Some(row) => decode_event(&row),
            None => Err(StoreError::NotFound),
        }
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: EventId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("events.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
