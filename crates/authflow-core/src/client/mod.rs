//! HTTP client construction and the shared JSON request helper.

#[allow(clippy::module_inception)]
mod client;
mod client_settings;

pub use client::{ApiConfiguration, Client};
pub use client_settings::ClientSettings;
