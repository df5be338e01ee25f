//! CLI command implementations.

pub mod config;
pub mod render;
pub mod serve;
pub mod version;
