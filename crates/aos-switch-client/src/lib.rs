//! aos-switch-client: session client for the ArubaOS-Switch REST API
//!
//! The client logs in against `/login-sessions`, carries the returned session
//! cookie on every later request, and can run CLI commands through `/cli`.
//! The one-shot helpers wrap login, a single operation and logout.

pub mod client;
pub mod config;
pub mod constants;
pub mod cookie;
pub mod error;
pub mod model;
pub mod session;

pub use client::{RequestOptions, SwitchClient};
pub use config::{ApiVersion, ClientInit};
pub use error::{Result, SwitchError};
pub use session::Session;

/// Log in with a fresh client, send one request, and log out again.
///
/// The response is returned unread; its status is not checked.
pub async fn request_once(
    init: ClientInit,
    path: &str,
    options: RequestOptions,
) -> Result<reqwest::Response> {
    let client = SwitchClient::new(init)?;
    client.request_once(path, options).await
}

/// Log in with a fresh client, run one CLI command, and log out again.
pub async fn run_once(init: ClientInit, command: &str) -> Result<String> {
    let client = SwitchClient::new(init)?;
    client.run_once(command).await
}
