use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored calendar entry. `description` is always serialized, empty or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /events`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl NewEvent {
    /// Assigns a fresh id and creation time.
    pub fn into_event(self) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            created_at: Utc::now(),
        }
    }
}
