//! Shared HTTP agent construction

use std::time::Duration;

/// User agent sent with every API request
pub const USER_AGENT: &str = concat!("artgrid/", env!("CARGO_PKG_VERSION"));

/// Default request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build an agent with a global timeout covering connect, send and body read
pub fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}
