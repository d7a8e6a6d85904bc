pub mod auth;
pub mod client;
pub mod protocol;
pub mod trust;

use crate::utils::errors::{CinderCliError, Result};
use reqwest::Client;
use std::time::Duration;
use trust::TrustStore;

/// Create the HTTP client used for all API calls.
///
/// When a trust store is given, server verification is pinned to it and the
/// built-in roots are disabled; otherwise the system roots apply.
pub fn create_http_client(trust: Option<&TrustStore>, timeout: Duration) -> Result<Client> {
    let mut builder = Client::builder().timeout(timeout).use_rustls_tls();

    if let Some(store) = trust {
        builder = builder.tls_built_in_root_certs(false);
        for root in store.roots() {
            builder = builder.add_root_certificate(root.clone());
        }
    }

    builder
        .build()
        .map_err(|e| CinderCliError::Config(format!("Failed to build HTTP client: {e}")))
}
