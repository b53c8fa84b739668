//! Round trip against a real database. Needs DATABASE_URL pointing at a
//! PostgreSQL instance where the process may create tables:
//!
//! `cargo test --test postgres -- --ignored`

use chrono::{Duration, TimeZone, Utc};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use events_server::models::NewEvent;
use events_server::repositories::{EventRepository, PgEventRepository};

async fn repository() -> PgEventRepository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::query(include_str!("../schema.sql"))
        .execute(&pool)
        .await
        .expect("Failed to create events table");

    PgEventRepository::new(pool)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_then_fetch() {
    let repo = repository().await;
    let start = Utc.with_ymd_and_hms(2031, 5, 4, 9, 0, 0).unwrap();

    let created = repo
        .create(
            NewEvent {
                title: "Retro".to_string(),
                description: "Sprint 12".to_string(),
                start_time: start,
                end_time: start + Duration::minutes(45),
            }
            .into_event(),
        )
        .await
        .unwrap();

    let fetched = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));

    let listed = repo.list().await.unwrap();
    assert!(listed.iter().any(|e| e.id == created.id));
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].start_time <= pair[1].start_time));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_id_is_none() {
    let repo = repository().await;

    assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_null_description_reads_as_empty() {
    let repo = repository().await;
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO events (id, title, description, start_time, end_time, created_at) \
         VALUES ($1, 'Legacy', NULL, $2, $2, $2)",
    )
    .bind(id)
    .bind(now)
    .execute(repo.pool())
    .await
    .unwrap();

    let event = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(event.description, "");
}
