//! The index page.

use axum::{extract::State, response::Html};

use crate::pages;
use crate::state::AppState;

/// GET /
pub async fn serve_index(State(state): State<AppState>) -> Html<String> {
    let contact = state.contacts.snapshot();
    Html(pages::render_index(
        &state.resolver,
        state.poll_interval.as_secs(),
        &contact,
    ))
}
