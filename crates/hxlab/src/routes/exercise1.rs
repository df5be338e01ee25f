//! Exercise 1: click to change text.
//!
//! - `GET|POST /exercise1`: the clicked button
//! - `GET /exercise1/reset`: the initial button

use axum::{extract::State, response::Html};

use super::fragment;
use crate::fragments::{Fragment, Trigger};
use crate::state::AppState;

pub async fn click(State(state): State<AppState>) -> Html<String> {
    fragment(&state, Fragment::ClickButton(Trigger::Active(())))
}

pub async fn reset(State(state): State<AppState>) -> Html<String> {
    fragment(&state, Fragment::ClickButton(Trigger::Reset))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::{body::Body, http::Request, http::StatusCode};

    #[tokio::test]
    async fn test_click_via_post() {
        let router = crate::router(local_state());
        let (status, body) = send(
            router,
            Request::post("/exercise1").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Clicked! ✅"));
        assert!(body.contains("hx-post=\"/exercise1\""));
    }

    #[tokio::test]
    async fn test_click_via_get() {
        let (status, body) = get(crate::router(local_state()), "/exercise1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("btn-success"));
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let state = local_state();
        let (_, first) = get(crate::router(state.clone()), "/exercise1/reset").await;
        let (_, second) = get(crate::router(state), "/exercise1/reset").await;

        assert!(first.contains("Click Me"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_public_mode_address() {
        let (_, body) = get(crate::router(public_state()), "/exercise1/reset").await;
        assert!(body.contains("hx-post=\"https://htmx.example.org/exercise1\""));
    }
}
