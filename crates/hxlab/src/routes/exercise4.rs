//! Exercise 4: echo user input.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};

use super::fragment;
use crate::fragments::{Fragment, Trigger};
use crate::state::AppState;

const INPUT_KEY: &str = "user-input";

/// Echoes the first `user-input` value. A missing or malformed query echoes
/// nothing.
pub async fn echo(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Html<String> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let user_input = pairs
        .into_iter()
        .find_map(|(key, value)| (key == INPUT_KEY).then_some(value))
        .unwrap_or_default();
    fragment(&state, Fragment::Echo(Trigger::Active(&user_input)))
}

pub async fn reset(State(state): State<AppState>) -> Html<String> {
    fragment(&state, Fragment::Echo(Trigger::Reset))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_echo() {
        let (status, body) = get(crate::router(local_state()), "/exercise4?user-input=hi").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "You typed: <strong>hi</strong>");
    }

    #[tokio::test]
    async fn test_echo_decodes_and_escapes() {
        let (_, body) = get(
            crate::router(local_state()),
            "/exercise4?user-input=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
        )
        .await;

        assert!(!body.contains("<script>"));
        assert_eq!(
            body,
            "You typed: <strong>&lt;script&gt;alert(1)&lt;/script&gt;</strong>"
        );
    }

    #[tokio::test]
    async fn test_repeated_key_echoes_first_value() {
        let (status, body) = get(
            crate::router(local_state()),
            "/exercise4?user-input=a&user-input=b",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "You typed: <strong>a</strong>");
    }

    #[tokio::test]
    async fn test_other_keys_are_ignored() {
        let (_, body) = get(
            crate::router(local_state()),
            "/exercise4?hx-request=true&user-input=hi%20there",
        )
        .await;
        assert_eq!(body, "You typed: <strong>hi there</strong>");
    }

    #[tokio::test]
    async fn test_missing_input_echoes_nothing() {
        let (status, body) = get(crate::router(local_state()), "/exercise4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "You typed: <strong></strong>");
    }

    #[tokio::test]
    async fn test_reset_is_empty() {
        let (_, body) = get(crate::router(local_state()), "/exercise4/reset").await;
        assert!(body.is_empty());
    }
}
