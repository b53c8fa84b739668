use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_event, get_event, list_events, method_not_allowed, missing_event_id, timeout_body,
    AppState,
};
use crate::repositories::EventRepository;

pub fn create_routes<R: EventRepository>(state: AppState<R>) -> Router {
    Router::new()
        .route(
            "/events",
            get(list_events::<R>)
                .post(create_event::<R>)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/events/",
            get(missing_event_id)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/events/:id",
            get(get_event::<R>)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Adds logging, the per-request deadline and CORS around the event routes.
pub fn with_middleware(router: Router, request_timeout: Duration, cors: CorsLayer) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(timeout_body))
        .layer(cors)
}
