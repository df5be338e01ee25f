//! Exercise 3: polling for updates.

use axum::{extract::State, response::Html};
use chrono::Local;

use super::fragment;
use crate::fragments::{Fragment, Trigger};
use crate::state::AppState;

/// Current server time. Each poll is independent.
pub async fn clock(State(state): State<AppState>) -> Html<String> {
    let now = Local::now().time();
    fragment(&state, Fragment::ServerTime(Trigger::Active(now)))
}

pub async fn reset(State(state): State<AppState>) -> Html<String> {
    fragment(&state, Fragment::ServerTime(Trigger::Reset))
}
