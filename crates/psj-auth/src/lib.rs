pub mod access_gate;
pub mod backend;
pub mod error;
pub mod session_record;
pub mod session_store;
pub mod storage;

pub use access_gate::{AccessGate, GateDecision};
pub use backend::{AuthBackend, CredentialEntry, DemoBackend};
pub use error::{AuthError, Result};
pub use session_record::SessionRecord;
pub use session_store::{DEFAULT_SESSION_KEY, SessionState, SessionStore};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

#[cfg(test)]
mod tests;
