use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::models::{Event, NewEvent};
use crate::repositories::EventRepository;
use crate::utils::error::AppError;
use crate::utils::validation::validate;

/// Shared per-process state; cloned into every request.
#[derive(Clone)]
pub struct AppState<R> {
    pub events: R,
}

impl<R: EventRepository> AppState<R> {
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

pub async fn list_events<R: EventRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = state
        .events
        .list()
        .await
        .map_err(AppError::database("Error fetching events"))?;

    Ok(Json(events))
}

// Parsed from raw bytes so a missing Content-Type is not rejected.
pub async fn create_event<R: EventRepository>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let input: NewEvent = serde_json::from_slice(&body).map_err(AppError::InvalidJson)?;
    validate(&input.title, input.start_time, input.end_time)?;

    let event = state
        .events
        .create(input.into_event())
        .await
        .map_err(AppError::database("Error inserting event"))?;

    tracing::info!(id = %event.id, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get_event<R: EventRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidId(id.clone()))?;

    state
        .events
        .find_by_id(id)
        .await
        .map_err(AppError::database("db error"))?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// `GET /events/` with nothing after the slash.
pub async fn missing_event_id() -> AppError {
    AppError::InvalidId(String::new())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Gives the bare 408 from the timeout layer a plain-text body.
pub async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        AppError::Timeout.into_response()
    } else {
        response
    }
}
