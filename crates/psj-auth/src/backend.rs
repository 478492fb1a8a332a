//! Authentication backend contract and its demo fixture.
//!
//! The contract is kept separate from the fixture so a real account service
//! can be substituted without touching the session store.

use crate::{AuthError, Result as AuthErrorResult};

use psj_core::{Identity, RegistrationDraft, Role};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;

const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);
const DEFAULT_NAME: &str = "New User";
const DEFAULT_EMAIL: &str = "unknown@mypsj.com";

/// Remote account service as seen by the session store.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for the matching identity.
    /// Fails with [`AuthError::InvalidCredentials`] when no pair matches.
    async fn authenticate(&self, email: &str, secret: &str) -> AuthErrorResult<Identity>;

    /// Create a new account from a draft and return the fresh identity.
    /// Always succeeds in the demo design (no email uniqueness check).
    async fn register(&self, draft: RegistrationDraft) -> AuthErrorResult<Identity>;
}

/// One row of the fixed credential table.
#[derive(Debug, Clone)]
pub struct CredentialEntry {
    pub secret: String,
    pub identity: Identity,
}

impl CredentialEntry {
    pub fn new(secret: impl Into<String>, identity: Identity) -> Self {
        Self {
            secret: secret.into(),
            identity,
        }
    }
}

/// In-memory stand-in for the real account service.
///
/// Lookups run against a closed, pre-enumerated credential table after a
/// configurable artificial latency standing in for the network round-trip.
pub struct DemoBackend {
    entries: Vec<CredentialEntry>,
    latency: Duration,
}

impl DemoBackend {
    pub fn new(entries: Vec<CredentialEntry>) -> Self {
        Self {
            entries,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated round-trip. Tests run at `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The portal's demo accounts. All secrets are `password123`.
    pub fn seeded() -> Self {
        Self::new(vec![
            CredentialEntry::new("password123", hope_foundation()),
            CredentialEntry::new("password123", john_donor()),
            CredentialEntry::new("password123", portal_admin()),
        ])
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl AuthBackend for DemoBackend {
    async fn authenticate(&self, email: &str, secret: &str) -> AuthErrorResult<Identity> {
        self.simulate_round_trip().await;

        debug!("Credential lookup for {email}");
        self.entries
            .iter()
            .find(|entry| entry.identity.email == email && entry.secret == secret)
            .map(|entry| entry.identity.clone())
            .ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn register(&self, draft: RegistrationDraft) -> AuthErrorResult<Identity> {
        self.simulate_round_trip().await;

        let role = draft.role.unwrap_or_default();
        let mut identity = Identity::new(
            draft.email.unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            draft.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            role,
        );
        identity.location = draft.location;
        identity.interests = draft.interests;
        identity.focus_areas = draft.focus_areas;
        identity.needs = draft.needs;

        debug!("Registered {} as {}", identity.email, identity.role);
        Ok(identity)
    }
}

fn hope_foundation() -> Identity {
    Identity {
        id: "1".to_string(),
        email: "ngo@mypsj.com".to_string(),
        name: "Hope Foundation".to_string(),
        role: Role::Ngo,
        verified: Some(true),
        location: Some("New York".to_string()),
        interests: Default::default(),
        focus_areas: ["Healthcare".to_string(), "Medical Supplies".to_string()].into(),
        needs: ["Funds".to_string(), "Medical Supplies".to_string()].into(),
    }
}

fn john_donor() -> Identity {
    Identity {
        id: "2".to_string(),
        email: "donor@mypsj.com".to_string(),
        name: "John Donor".to_string(),
        role: Role::Donor,
        verified: None,
        location: Some("Chicago".to_string()),
        interests: ["Education".to_string(), "Healthcare".to_string()].into(),
        focus_areas: Default::default(),
        needs: Default::default(),
    }
}

fn portal_admin() -> Identity {
    Identity {
        id: "3".to_string(),
        email: "admin@mypsj.com".to_string(),
        name: "Portal Admin".to_string(),
        role: Role::Admin,
        verified: None,
        location: None,
        interests: Default::default(),
        focus_areas: Default::default(),
        needs: Default::default(),
    }
}
