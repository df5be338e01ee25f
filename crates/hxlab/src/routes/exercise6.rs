//! Exercise 6: click to edit.
//!
//! The contact toggles between a display and an edit representation:
//!
//! - `GET /exercise6/contact/1`: edit form pre-filled with the current record
//! - `PUT /exercise6/contact/1`: store the submitted fields, show the record
//! - `GET /exercise6/contact/1/view`: cancel editing, show the current record
//! - `GET /exercise6/reset`: restore the default record and show it

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use serde::Deserialize;
use tracing::info;

use super::fragment;
use crate::contact::Contact;
use crate::fragments::{ContactView, Fragment};
use crate::state::AppState;

/// Submitted contact fields. Missing fields are empty.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

pub async fn edit(State(state): State<AppState>) -> Html<String> {
    let contact = state.contacts.snapshot();
    fragment(&state, Fragment::Contact(ContactView::Edit, &contact))
}

/// Replaces the record and renders the value this request wrote.
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Html<String> {
    let ContactForm { name, email } = form.map(|Form(f)| f).unwrap_or_default();
    let contact = state.contacts.replace(Contact::new(name, email));

    info!(name = %contact.name, email = %contact.email, "Contact updated");
    fragment(&state, Fragment::Contact(ContactView::Display, &contact))
}

pub async fn view(State(state): State<AppState>) -> Html<String> {
    let contact = state.contacts.snapshot();
    fragment(&state, Fragment::Contact(ContactView::Display, &contact))
}

pub async fn reset(State(state): State<AppState>) -> Html<String> {
    let contact = state.contacts.reset();
    fragment(&state, Fragment::Contact(ContactView::Display, &contact))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::{body::Body, http::Request, http::StatusCode};

    #[tokio::test]
    async fn test_edit_update_reset_scenario() {
        let state = local_state();

        let (status, edit) = get(crate::router(state.clone()), "/exercise6/contact/1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(edit.contains("value=\"Jane Doe\""));
        assert!(edit.contains("<form"));

        let (status, display) = send(
            crate::router(state.clone()),
            form("PUT", "/exercise6/contact/1", "name=Bob&email=bob%40x.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(display.contains("Bob"));
        assert!(display.contains("bob@x.com"));
        assert!(display.contains("Click To Edit"));

        let (_, reset) = get(crate::router(state), "/exercise6/reset").await;
        assert!(reset.contains("Jane Doe"));
        assert!(reset.contains("jane.doe@example.com"));
    }

    #[tokio::test]
    async fn test_update_persists_for_later_reads() {
        let state = local_state();
        send(
            crate::router(state.clone()),
            form("PUT", "/exercise6/contact/1", "name=Bob&email=b%40x.com"),
        )
        .await;

        let (_, view) = get(crate::router(state.clone()), "/exercise6/contact/1/view").await;
        assert!(view.contains("<strong>Name:</strong> Bob"));
        assert!(view.contains("<strong>Email:</strong> b@x.com"));

        let (_, edit) = get(crate::router(state.clone()), "/exercise6/contact/1").await;
        assert!(edit.contains("value=\"Bob\""));
        assert!(edit.contains("value=\"b@x.com\""));

        get(crate::router(state.clone()), "/exercise6/reset").await;
        let (_, view) = get(crate::router(state), "/exercise6/contact/1/view").await;
        assert!(view.contains("<strong>Name:</strong> Jane Doe"));
        assert!(view.contains("<strong>Email:</strong> jane.doe@example.com"));
    }

    #[tokio::test]
    async fn test_cancel_keeps_current_record() {
        let state = local_state();
        send(
            crate::router(state.clone()),
            form("PUT", "/exercise6/contact/1", "name=Bob&email=b%40x.com"),
        )
        .await;

        get(crate::router(state.clone()), "/exercise6/contact/1").await;
        let (_, cancelled) = get(crate::router(state), "/exercise6/contact/1/view").await;
        assert!(cancelled.contains("Bob"));
        assert!(!cancelled.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_missing_fields_become_empty() {
        let state = local_state();
        let (status, body) = send(
            crate::router(state.clone()),
            form("PUT", "/exercise6/contact/1", "name=Solo"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<strong>Name:</strong> Solo"));
        assert!(body.contains("<strong>Email:</strong> </p>"));
        assert_eq!(state.contacts.snapshot().email, "");
    }

    #[tokio::test]
    async fn test_update_escapes_fields() {
        let (_, body) = send(
            crate::router(local_state()),
            form(
                "PUT",
                "/exercise6/contact/1",
                "name=%3Cscript%3Ex%3C%2Fscript%3E&email=e",
            ),
        )
        .await;

        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let state = local_state();
        let (_, first) = get(crate::router(state.clone()), "/exercise6/reset").await;
        let (_, second) = get(crate::router(state), "/exercise6/reset").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected() {
        let (status, _) = send(
            crate::router(local_state()),
            Request::delete("/exercise6/contact/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_public_mode_addresses() {
        let (_, edit) = get(crate::router(public_state()), "/exercise6/contact/1").await;
        assert!(edit.contains("hx-put=\"https://htmx.example.org/exercise6/contact/1\""));
        assert!(edit.contains("hx-get=\"https://htmx.example.org/exercise6/contact/1/view\""));
    }

    #[tokio::test]
    async fn test_interleaved_submits_never_mix() {
        let state = local_state();
        let payloads = [
            ("name=Alice&email=alice%40a.example", "Alice", "alice@a.example"),
            ("name=Bob&email=bob%40b.example", "Bob", "bob@b.example"),
        ];

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let state = state.clone();
                let (body, name, email) = payloads[i % 2];
                tokio::spawn(async move {
                    let (_, written) =
                        send(crate::router(state.clone()), form("PUT", "/exercise6/contact/1", body))
                            .await;
                    assert!(written.contains(name) && written.contains(email));

                    let (_, read) =
                        get(crate::router(state), "/exercise6/contact/1/view").await;
                    let alice = read.contains("Alice") && read.contains("alice@a.example");
                    let bob = read.contains("Bob") && read.contains("bob@b.example");
                    assert!(alice ^ bob, "hybrid record rendered: {read}");
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }
    }
}
