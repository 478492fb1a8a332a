//! Persisted serialization of the current identity.

use crate::{AuthError, Result as AuthErrorResult};

use psj_core::Identity;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What gets written under the session key. Trust is positional: whatever
/// decodes cleanly from storage is accepted as-is (demo-grade design, no
/// signature or server revalidation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub identity: Identity,
    /// When the record was written. Informational; sessions have no expiry.
    pub saved_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            saved_at: Utc::now(),
        }
    }

    #[track_caller]
    pub fn encode(&self) -> AuthErrorResult<String> {
        serde_json::to_string(self).map_err(|e| AuthError::SessionEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn decode(raw: &str) -> AuthErrorResult<Self> {
        serde_json::from_str(raw).map_err(|e| AuthError::MalformedSession {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
