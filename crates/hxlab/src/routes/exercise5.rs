//! Exercise 5: form submission with a loading indicator.
//!
//! The submit handler sleeps before answering so the client-side indicator is
//! visible. Only the submitting request waits; nothing is locked meanwhile.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use serde::Deserialize;
use tracing::info;

use super::fragment;
use crate::fragments::{Fragment, Trigger};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
}

/// Acknowledges a submitted name after the configured delay.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<SignupForm>, FormRejection>,
) -> Html<String> {
    let SignupForm { name } = form.map(|Form(f)| f).unwrap_or_default();

    tokio::time::sleep(state.submit_delay).await;

    info!(name = %name, "Received form submission");
    fragment(&state, Fragment::Signup(Trigger::Active(&name)))
}

/// The empty form, addressed at the submit endpoint.
pub async fn reset(State(state): State<AppState>) -> Html<String> {
    fragment(&state, Fragment::Signup(Trigger::Reset))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_submit() {
        let (status, body) = send(
            crate::router(local_state()),
            form("POST", "/exercise5/submit", "name=Ann"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Thank you, Ann! Your message has been received."));
    }

    #[tokio::test]
    async fn test_submit_without_body_uses_empty_name() {
        let (status, body) = send(
            crate::router(local_state()),
            Request::post("/exercise5/submit").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Thank you, !"));
    }

    #[tokio::test]
    async fn test_submit_escapes_name() {
        let (_, body) = send(
            crate::router(local_state()),
            form("POST", "/exercise5/submit", "name=%3Cimg+src%3Dx%3E"),
        )
        .await;

        assert!(!body.contains("<img"));
        assert!(body.contains("&lt;img src=x&gt;"));
    }

    #[tokio::test]
    async fn test_reset_form_addresses() {
        let (_, local) = get(crate::router(local_state()), "/exercise5/reset").await;
        let (_, public) = get(crate::router(public_state()), "/exercise5/reset").await;

        assert!(local.contains("hx-post=\"/exercise5/submit\""));
        assert!(public.contains("hx-post=\"https://htmx.example.org/exercise5/submit\""));
    }

    #[tokio::test]
    async fn test_submit_waits_for_delay() {
        let state = local_state().with_submit_delay(Duration::from_millis(200));
        let started = Instant::now();
        send(
            crate::router(state),
            form("POST", "/exercise5/submit", "name=Ann"),
        )
        .await;

        assert!(started.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_delay_does_not_block_other_requests() {
        let state = local_state().with_submit_delay(Duration::from_secs(2));

        let slow = tokio::spawn(send(
            crate::router(state.clone()),
            form("POST", "/exercise5/submit", "name=Slow"),
        ));
        tokio::task::yield_now().await;

        let fast = tokio::time::timeout(
            Duration::from_millis(500),
            send(
                crate::router(state.clone()),
                form("PUT", "/exercise6/contact/1", "name=Bob&email=bob%40x.com"),
            ),
        )
        .await
        .expect("contact update must not wait for the slow submission");
        assert!(fast.1.contains("Bob"));

        let (_, body) = slow.await.unwrap();
        assert!(body.contains("Thank you, Slow!"));
    }
}
