//! Health check operations.

use serde::{Deserialize, Serialize};

use super::CuehallClient;
use crate::error::Result;

/// Outcome of a liveness check.
#[derive(Debug, Serialize, Deserialize)]
pub struct Liveness {
    pub status: String,
    pub latency_ms: u64,
}

impl CuehallClient {
    /// Call `/livez` and measure the round trip.
    pub async fn livez(&self) -> Result<Liveness> {
        let started = std::time::Instant::now();
        let response = self.client.get(self.url("/livez")).send().await?;
        self.handle_empty_response(response, "livez").await?;

        Ok(Liveness {
            status: "ok".to_string(),
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }
}
