//! HTTP route handlers.
//!
//! Every exercise lives in its own module; `/code/exerciseN/rust` serves that
//! module's source.

use axum::response::Html;

use crate::fragments::Fragment;
use crate::state::AppState;

pub mod code;
pub mod exercise1;
pub mod exercise2;
pub mod exercise3;
pub mod exercise4;
pub mod exercise5;
pub mod exercise6;
pub mod index;

/// Renders a fragment with the state's resolver as the whole response body.
pub(crate) fn fragment(state: &AppState, fragment: Fragment<'_>) -> Html<String> {
    tracing::debug!(
        family = fragment.family(),
        variant = %fragment.variant(),
        "Rendering fragment"
    );
    Html(fragment.render(&state.resolver))
}
