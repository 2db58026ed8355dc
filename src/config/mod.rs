//! Typed configuration for the panel's API connection.
//!
//! The base URL is an explicit, injected value rather than a free global;
//! tests point it at a local fake endpoint.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};
