//! Standalone showcase pages and handler source listings.
//!
//! - `GET /code/{exercise}`: self-contained HTML page for one exercise
//! - `GET /code/{exercise}/rust`: source of the route module serving it

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::pages::{self, Exercise};
use crate::state::AppState;

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Exercise not found").into_response()
}

/// Serves the standalone page. Addresses always point at the public origin.
pub async fn showcase(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match Exercise::from_slug(&slug) {
        Some(exercise) => Html(pages::render_showcase(
            exercise,
            &state.showcase_resolver,
            state.poll_interval.as_secs(),
        ))
        .into_response(),
        None => not_found(),
    }
}

/// Serves the handler source as plain text.
pub async fn source(Path(slug): Path<String>) -> Response {
    match Exercise::from_slug(&slug) {
        Some(exercise) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            exercise.handler_source(),
        )
            .into_response(),
        None => not_found(),
    }
}
