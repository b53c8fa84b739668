use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::Event;
use crate::repositories::EventRepository;

const INSERT_EVENT: &str = r#"
    INSERT INTO events (id, title, description, start_time, end_time, created_at)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, title, COALESCE(description, '') AS description, start_time, end_time, created_at
"#;

const SELECT_EVENTS: &str = r#"
    SELECT id, title, COALESCE(description, '') AS description, start_time, end_time, created_at
    FROM events
    ORDER BY start_time ASC
"#;

const SELECT_EVENT_BY_ID: &str = r#"
    SELECT id, title, COALESCE(description, '') AS description, start_time, end_time, created_at
    FROM events
    WHERE id = $1
"#;

#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl EventRepository for PgEventRepository {
    async fn list(&self) -> Result<Vec<Event>, sqlx::Error> {
        let events = sqlx::query_as::<_, Event>(SELECT_EVENTS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    async fn create(&self, event: Event) -> Result<Event, sqlx::Error> {
        let stored = sqlx::query_as::<_, Event>(INSERT_EVENT)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_time)
            .bind(event.end_time)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await?;

        debug!(id = %stored.id, "Inserted event");
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(SELECT_EVENT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
