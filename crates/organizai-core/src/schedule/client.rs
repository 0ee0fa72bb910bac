//! ScheduleClient: the request/response call to the schedule service.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::{ScheduleBlock, ScheduleRequest, ScheduleResponse};
use crate::error::{ConfigError, CoreError, Result};
use crate::storage::ApiConfig;

/// Client for `POST {base_url}/generate-schedule`.
///
/// The call holds a snapshot of the request; dropping the returned future
/// abandons it without touching any local state.
pub struct ScheduleClient {
    base_url: Url,
    http_client: Client,
}

impl ScheduleClient {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            key: "api.base_url".into(),
            message: e.to_string(),
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> Result<Url> {
        self.base_url
            .join("generate-schedule")
            .map_err(|e| CoreError::Remote {
                message: format!("invalid endpoint: {e}"),
                source: None,
            })
    }

    /// Send the request and return the allocated blocks in service order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the request has no tasks or no
    /// availability, and a remote error on transport failures, non-success
    /// status codes or an unreadable body.
    pub async fn generate(&self, request: &ScheduleRequest) -> Result<Vec<ScheduleBlock>> {
        request.readiness()?;

        let url = self.endpoint()?;
        info!(%url, summary = %request.describe(), "requesting schedule");

        let resp = self.http_client.post(url).json(request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreError::Remote {
                message: format!("schedule service returned {status}: {body}"),
                source: None,
            });
        }

        let body: ScheduleResponse = resp.json().await?;
        debug!(blocks = body.schedule.len(), "schedule received");
        Ok(body.schedule)
    }
}
