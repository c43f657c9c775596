use crate::domain::model::{RawResponse, RequestSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound HTTP port. Implementations must return the raw response
/// whatever its status code; only connection-level failures (DNS, TLS,
/// timeouts) surface as errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: &RequestSpec) -> Result<RawResponse>;
}
