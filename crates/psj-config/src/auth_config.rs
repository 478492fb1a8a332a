use crate::DEFAULT_LATENCY_MS;

use std::time::Duration;

use serde::Deserialize;

/// Simulated backend round-trip. Placeholder for a real network call so
/// loading-state UI stays testable; tests wire zero latency.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub latency_ms: u64,
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}
