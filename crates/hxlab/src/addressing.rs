//! Endpoint addressing.
//!
//! Fragments embed the URL of the endpoint that produces their next state.
//! Served locally those URLs stay relative; behind the public deployment they
//! are prefixed with the public origin so the markup keeps working when it is
//! loaded from elsewhere (a saved file, another host).

use std::borrow::Cow;
use std::sync::Arc;

use hxlab_config::{AddressingConfig, AddressingMode};

/// Logical paths embedded in fragments.
pub mod endpoints {
    pub const CLICK: &str = "/exercise1";
    pub const CLICK_RESET: &str = "/exercise1/reset";
    pub const LOAD: &str = "/exercise2";
    pub const LOAD_RESET: &str = "/exercise2/reset";
    pub const CLOCK: &str = "/exercise3";
    pub const CLOCK_RESET: &str = "/exercise3/reset";
    pub const ECHO: &str = "/exercise4";
    pub const ECHO_RESET: &str = "/exercise4/reset";
    pub const SIGNUP_SUBMIT: &str = "/exercise5/submit";
    pub const SIGNUP_RESET: &str = "/exercise5/reset";
    pub const CONTACT: &str = "/exercise6/contact/1";
    pub const CONTACT_VIEW: &str = "/exercise6/contact/1/view";
    pub const CONTACT_RESET: &str = "/exercise6/reset";
}

/// Turns logical paths into the URLs a response embeds.
///
/// A resolver is built once at startup and shared by every handler, so all
/// addresses in one response are resolved under the same mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    mode: AddressingMode,
    base: Arc<str>,
}

impl Resolver {
    pub fn new(mode: AddressingMode, base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            mode,
            base: Arc::from(base),
        }
    }

    /// Resolver that leaves paths relative.
    pub fn local() -> Self {
        Self::new(AddressingMode::Local, String::new())
    }

    /// Resolver that prefixes every path with `base`.
    pub fn public(base: impl Into<String>) -> Self {
        Self::new(AddressingMode::Public, base)
    }

    pub fn from_config(config: &AddressingConfig) -> Self {
        Self::new(config.mode, config.public_base_url.clone())
    }

    pub fn mode(&self) -> AddressingMode {
        self.mode
    }

    /// Resolves a logical path. Paths are literals from [`endpoints`], never
    /// request data.
    pub fn resolve(&self, path: &'static str) -> Cow<'static, str> {
        debug_assert!(path.starts_with('/'), "logical paths are absolute: {path}");
        match self.mode {
            AddressingMode::Local => Cow::Borrowed(path),
            AddressingMode::Public => Cow::Owned(format!("{}{path}", self.base)),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::local()
    }
}
