use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::models::Event;
use crate::repositories::EventRepository;

/// Test double; `failing()` makes every call return a storage error,
/// `stalled()` makes every call hang.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventRepository {
    events: Arc<Mutex<Vec<Event>>>,
    fail: bool,
    stall: bool,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stalled() -> Self {
        Self {
            stall: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    async fn check(&self) -> Result<(), sqlx::Error> {
        if self.stall {
            std::future::pending::<()>().await;
        }
        if self.fail {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

impl EventRepository for MemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>, sqlx::Error> {
        self.check().await?;
        let mut events = self.events.lock().unwrap().clone();
        events.sort_by_key(|e| e.start_time);
        Ok(events)
    }

    async fn create(&self, event: Event) -> Result<Event, sqlx::Error> {
        self.check().await?;
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        self.check().await?;
        Ok(self.events.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }
}
