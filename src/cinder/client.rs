use crate::cinder::auth::BearerToken;
use crate::cinder::protocol::{Volume, VolumeCreate, VolumeCreateRoot, VolumeRoot};
use crate::cinder::trust::TrustStore;
use crate::utils::errors::{CinderCliError, Result};
use reqwest::{Client, Response, StatusCode, Url};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`VolumeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Versioned service endpoint, e.g. `https://cinder.openstack.svc/v2`.
    pub endpoint: String,
    /// Bound on each request, connection establishment included.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Authenticated client for the volume API.
///
/// Owns the transport with its pinned trust store and the bearer token.
/// Immutable after construction and safe to share across tasks; every
/// operation is a single round trip with no retained state between calls.
#[derive(Debug)]
pub struct VolumeClient {
    client: Client,
    endpoint: String,
    token: BearerToken,
}

impl VolumeClient {
    /// Build a client for the given endpoint.
    ///
    /// Fails with a configuration error when the endpoint URL does not parse
    /// or the transport cannot be assembled from the trust store.
    pub fn new(
        config: ClientConfig,
        trust: Option<TrustStore>,
        token: BearerToken,
    ) -> Result<Self> {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        Url::parse(&endpoint).map_err(|e| {
            CinderCliError::Config(format!("Invalid endpoint URL {:?}: {e}", config.endpoint))
        })?;

        let client = super::create_http_client(trust.as_ref(), config.timeout)?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// The normalized endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn collection_url(&self) -> String {
        format!("{}/volumes", self.endpoint)
    }

    fn volume_url(&self, id: &str) -> String {
        format!("{}/volumes/{id}", self.endpoint)
    }

    /// Request a new volume.
    ///
    /// The server provisions asynchronously and acknowledges with 202 only;
    /// the returned record usually still reports a `creating` status and
    /// callers poll [`VolumeClient::get`] to observe completion. Each call
    /// provisions a new volume - create is not idempotent.
    pub async fn create(&self, request: &VolumeCreate) -> Result<Volume> {
        request.validate()?;

        let url = self.collection_url();
        tracing::debug!("POST {url} (size {}, type {})", request.size, request.volume_type);
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.token.header_value())
            .header("Content-Type", "application/json")
            .json(&VolumeCreateRoot {
                volume: request.clone(),
            })
            .send()
            .await?;

        self.read_volume(response, &url, &[StatusCode::ACCEPTED])
            .await
    }

    /// Fetch a single volume by ID.
    pub async fn get(&self, id: &str) -> Result<Volume> {
        Self::check_id(id)?;

        let url = self.volume_url(id);
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .header("Authorization", self.token.header_value())
            .send()
            .await?;

        self.read_volume(response, &url, &[StatusCode::OK]).await
    }

    /// Delete a volume by ID.
    ///
    /// The server may process the deletion after the call returns; a 404
    /// means the volume is already gone and is reported as not found.
    pub async fn delete(&self, id: &str) -> Result<()> {
        Self::check_id(id)?;

        let url = self.volume_url(id);
        tracing::debug!("DELETE {url}");
        let response = self
            .client
            .delete(&url)
            .header("Authorization", self.token.header_value())
            .send()
            .await?;

        self.check_status(
            response,
            &url,
            &[StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT],
        )
        .await?;

        Ok(())
    }

    fn check_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(CinderCliError::InvalidInput(
                "Volume ID must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Classify the response status before touching the body.
    async fn check_status(
        &self,
        response: Response,
        url: &str,
        ok_codes: &[StatusCode],
    ) -> Result<Response> {
        let status = response.status();
        if ok_codes.contains(&status) {
            return Ok(response);
        }

        tracing::debug!("Unexpected status {status} from {url}");
        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            StatusCode::NOT_FOUND => Err(CinderCliError::NotFound(url.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CinderCliError::Auth {
                status: status.as_u16(),
                detail,
            }),
            _ => Err(CinderCliError::Protocol {
                path: url.to_string(),
                status: status.as_u16(),
                detail,
            }),
        }
    }

    async fn read_volume(
        &self,
        response: Response,
        url: &str,
        ok_codes: &[StatusCode],
    ) -> Result<Volume> {
        let response = self.check_status(response, url, ok_codes).await?;
        let status = response.status();
        let body = response.text().await?;

        let root: VolumeRoot =
            serde_json::from_str(&body).map_err(|e| CinderCliError::Protocol {
                path: url.to_string(),
                status: status.as_u16(),
                detail: format!("Undecodable volume body ({e}): {body}"),
            })?;

        Ok(root.volume)
    }
}
