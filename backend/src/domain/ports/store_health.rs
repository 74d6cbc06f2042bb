//! Port for probing document store reachability.

use std::time::Duration;

use async_trait::async_trait;

use super::StoreError;

/// Reachability probe used by the health endpoints.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip a ping to the store, returning its latency.
    async fn ping(&self) -> Result<Duration, StoreError>;
}
