//! hxlab - a hypermedia exercise server.
//!
//! Every exercise endpoint answers with an HTML fragment that the client swaps
//! into the page. Which fragment, which variant and which embedded addresses
//! are decided here, on the server.

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderName, Method, StatusCode},
    routing::get,
};
use hxlab_config::{HxlabConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod addressing;
pub mod contact;
pub mod fragments;
pub mod pages;
pub mod routes;
pub mod state;

pub use addressing::Resolver;
pub use contact::{Contact, ContactStore};
pub use fragments::{ContactView, Fragment, Trigger, Variant};
pub use state::AppState;

/// Request headers htmx sends.
const HTMX_REQUEST_HEADERS: [&str; 7] = [
    "hx-request",
    "hx-trigger",
    "hx-target",
    "hx-current-url",
    "hx-boosted",
    "hx-trigger-name",
    "hx-prompt",
];

/// Response headers htmx reads.
const HTMX_RESPONSE_HEADERS: [&str; 11] = [
    "hx-location",
    "hx-push-url",
    "hx-redirect",
    "hx-refresh",
    "hx-replace-url",
    "hx-reswap",
    "hx-retarget",
    "hx-reselect",
    "hx-trigger",
    "hx-trigger-after-settle",
    "hx-trigger-after-swap",
];

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Main UI
        .route("/", get(routes::index::serve_index))
        // Exercise 1: click to change text
        .route(
            "/exercise1",
            get(routes::exercise1::click).post(routes::exercise1::click),
        )
        .route("/exercise1/reset", get(routes::exercise1::reset))
        // Exercise 2: click to load
        .route("/exercise2", get(routes::exercise2::load))
        .route("/exercise2/reset", get(routes::exercise2::reset))
        // Exercise 3: polling
        .route("/exercise3", get(routes::exercise3::clock))
        .route("/exercise3/reset", get(routes::exercise3::reset))
        // Exercise 4: echo
        .route("/exercise4", get(routes::exercise4::echo))
        .route("/exercise4/reset", get(routes::exercise4::reset))
        // Exercise 5: form submission
        .route(
            "/exercise5/submit",
            axum::routing::post(routes::exercise5::submit),
        )
        .route("/exercise5/reset", get(routes::exercise5::reset))
        // Exercise 6: click to edit
        .route(
            "/exercise6/contact/1",
            get(routes::exercise6::edit).put(routes::exercise6::update),
        )
        .route("/exercise6/contact/1/view", get(routes::exercise6::view))
        .route("/exercise6/reset", get(routes::exercise6::reset))
        // Showcase pages and handler sources
        .route("/code/{exercise}", get(routes::code::showcase))
        .route("/code/{exercise}/rust", get(routes::code::source))
        // Fallback
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        // Attach shared state
        .with_state(state)
}

/// Cross-origin policy that lets pages hosted elsewhere drive the exercises.
fn cors_layer() -> CorsLayer {
    let allow_headers: Vec<HeaderName> = ["content-type", "authorization", "x-requested-with"]
        .into_iter()
        .chain(HTMX_REQUEST_HEADERS)
        .map(HeaderName::from_static)
        .collect();
    let expose_headers: Vec<HeaderName> = HTMX_RESPONSE_HEADERS
        .into_iter()
        .map(HeaderName::from_static)
        .collect();

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(allow_headers)
        .expose_headers(expose_headers)
}

/// Start the hxlab server.
///
/// The configuration is validated before the listener binds; an invalid
/// configuration never serves a request.
pub async fn run_server(config: HxlabConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let app = router(AppState::from_config(&config));
    let listener = bind(&config.server).await?;
    let addr = listener.local_addr().context("Failed to read bound address")?;

    info!(
        %addr,
        mode = %config.addressing.mode,
        public_base_url = %config.addressing.public_base_url,
        "Starting hxlab"
    );
    info!("hxlab ready on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("hxlab stopped");
    Ok(())
}

/// Binds `host:port`. The host may be an IP address or a name such as
/// `localhost`.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", server.host, server.port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
