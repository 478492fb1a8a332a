mod session_commands;

use psj_auth::{DemoBackend, MemoryStorage, SessionStore};

use std::sync::Arc;
use std::time::Duration;

/// Fresh store over in-memory storage with the simulated latency removed.
pub(crate) fn test_store() -> SessionStore {
    SessionStore::new(
        Arc::new(DemoBackend::seeded().with_latency(Duration::ZERO)),
        Arc::new(MemoryStorage::new()),
    )
}
