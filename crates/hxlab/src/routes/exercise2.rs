//! Exercise 2: click to load content.

use axum::{extract::State, response::Html};

use super::fragment;
use crate::fragments::{Fragment, Trigger};
use crate::state::AppState;

pub async fn load(State(state): State<AppState>) -> Html<String> {
    fragment(&state, Fragment::LoadedContent(Trigger::Active(())))
}

pub async fn reset(State(state): State<AppState>) -> Html<String> {
    fragment(&state, Fragment::LoadedContent(Trigger::Reset))
}
