//! Shared state for hxlab HTTP handlers.

use std::time::Duration;

use hxlab_config::HxlabConfig;

use crate::addressing::Resolver;
use crate::contact::ContactStore;

/// Shared state for all hxlab HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolver for addresses embedded in fragments and the index page
    pub resolver: Resolver,

    /// Resolver for the standalone showcase pages, always public
    pub showcase_resolver: Resolver,

    /// The click-to-edit contact
    pub contacts: ContactStore,

    /// Artificial latency of the form submission exercise
    pub submit_delay: Duration,

    /// Clock polling interval advertised by the index page
    pub poll_interval: Duration,
}

impl AppState {
    /// Creates state from a validated configuration.
    pub fn from_config(config: &HxlabConfig) -> Self {
        Self {
            resolver: Resolver::from_config(&config.addressing),
            showcase_resolver: Resolver::public(config.addressing.public_base_url.clone()),
            contacts: ContactStore::default(),
            submit_delay: Duration::from_millis(config.exercises.submit_delay_ms),
            poll_interval: Duration::from_secs(config.exercises.poll_interval_secs),
        }
    }

    /// Replaces the submission delay.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }
}
