//! Remote config status adapter

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{ServiceStatus, StatusProbe};
use crate::domain::error::StatusError;

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: Option<String>,
}

/// Probes the remote voice-config endpoint over HTTP and surfaces its
/// reachability and `status` field verbatim.
pub struct HttpStatusProbe {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpStatusProbe {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StatusProbe for HttpStatusProbe {
    async fn check(&self) -> Result<ServiceStatus, StatusError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| StatusError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::Http(status.as_u16()));
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| StatusError::Malformed(e.to_string()))?;

        Ok(ServiceStatus {
            status: body.status.unwrap_or_default(),
        })
    }
}
