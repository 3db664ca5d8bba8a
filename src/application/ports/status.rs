//! Remote config status port interface

use async_trait::async_trait;

use crate::domain::error::StatusError;

/// Reachability report of the remote voice-config endpoint. The `status`
/// field is surfaced verbatim from the endpoint's response.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub status: String,
}

/// Port for the optional remote-config reachability check.
///
/// A single non-cancellable round trip with no built-in timeout; callers
/// wanting bounded latency must impose an external timeout.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn check(&self) -> Result<ServiceStatus, StatusError>;
}
