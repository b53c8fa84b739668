//! Storage for events.
//!
//! Handlers only see [`EventRepository`]; the PostgreSQL implementation is
//! what runs in production, the in-memory one backs the router tests.

use std::future::Future;

use uuid::Uuid;

use crate::models::Event;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgEventRepository;

pub trait EventRepository: Clone + Send + Sync + 'static {
    /// All events, oldest `start_time` first.
    fn list(&self) -> impl Future<Output = Result<Vec<Event>, sqlx::Error>> + Send;

    /// Inserts a single row and returns it as stored.
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, sqlx::Error>> + Send;

    /// `None` when no row has this id.
    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Event>, sqlx::Error>> + Send;
}
