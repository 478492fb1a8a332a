//! Single-writer session state container.
//!
//! The store is the sole source of truth for "who is logged in and in what
//! role". Only the store mutates the state or the persisted record; every
//! other component observes through [`SessionStore::subscribe`] or the
//! snapshot accessors.

use crate::{AuthBackend, AuthError, Result as AuthErrorResult, SessionRecord, SessionStorage};

use psj_core::{Identity, RegistrationDraft};

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

/// Default storage key for the persisted session record.
pub const DEFAULT_SESSION_KEY: &str = "psj.session";

/// Observable session state published to subscribers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// The current authenticated principal, if any
    pub identity: Option<Identity>,
    /// True while an authenticate/register call is in flight. Callers must
    /// disable duplicate submission while set.
    pub pending: bool,
    /// Message from the most recent failed sign-in, cleared on the next
    /// attempt and on sign-out
    pub last_error: Option<String>,
}

pub struct SessionStore {
    backend: Arc<dyn AuthBackend>,
    storage: Arc<dyn SessionStorage>,
    key: String,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Build a store and rehydrate the previous session, if any, under the
    /// default key.
    pub fn new(backend: Arc<dyn AuthBackend>, storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_key(backend, storage, DEFAULT_SESSION_KEY)
    }

    /// Build a store over a custom storage key.
    ///
    /// The boot read is synchronous and local. A corrupt persisted record is
    /// treated as "no session" and removed rather than propagated.
    pub fn with_key(
        backend: Arc<dyn AuthBackend>,
        storage: Arc<dyn SessionStorage>,
        key: &str,
    ) -> Self {
        let identity = match storage.read(key) {
            Some(raw) => match SessionRecord::decode(&raw) {
                Ok(record) => {
                    info!(
                        "Restored session for {} ({})",
                        record.identity.email, record.identity.role
                    );
                    Some(record.identity)
                }
                Err(e) => {
                    warn!("Discarding malformed session record: {e}");
                    storage.remove(key);
                    None
                }
            },
            None => None,
        };

        let (state, _) = watch::channel(SessionState {
            identity,
            pending: false,
            last_error: None,
        });

        Self {
            backend,
            storage,
            key: key.to_string(),
            state,
        }
    }

    /// Subscribe to state changes. Receivers observe the latest state; a
    /// slow receiver may skip intermediate ones.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    /// Sign in against the backend.
    ///
    /// On success the returned identity becomes current and overwrites any
    /// previously persisted record. On failure the current identity is left
    /// untouched and the message is published through `last_error`.
    ///
    /// Callers validate non-empty arguments before invoking; the store does
    /// not re-validate.
    pub async fn authenticate(&self, email: &str, secret: &str) -> AuthErrorResult<Identity> {
        self.begin();
        match self.backend.authenticate(email, secret).await {
            Ok(identity) => self.complete(identity),
            Err(e) => self.fail(e),
        }
    }

    /// Create an account and sign in as it, identical in effect to a
    /// successful [`authenticate`](Self::authenticate).
    pub async fn create_account(&self, draft: RegistrationDraft) -> AuthErrorResult<Identity> {
        self.begin();
        match self.backend.register(draft).await {
            Ok(identity) => self.complete(identity),
            Err(e) => self.fail(e),
        }
    }

    /// Clear the current session and its persisted record.
    /// Idempotent: a no-op when nobody is signed in.
    pub fn end_session(&self) {
        self.storage.remove(&self.key);
        self.state.send_modify(|s| {
            if let Some(identity) = s.identity.take() {
                info!("Session ended for {}", identity.email);
            }
            s.last_error = None;
        });
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.pending = true;
            s.last_error = None;
        });
    }

    fn complete(&self, identity: Identity) -> AuthErrorResult<Identity> {
        if let Err(e) = self.persist(&identity) {
            return self.fail(e);
        }
        self.state.send_modify(|s| {
            s.identity = Some(identity.clone());
            s.pending = false;
        });
        info!("Signed in as {} ({})", identity.email, identity.role);
        Ok(identity)
    }

    fn fail(&self, error: AuthError) -> AuthErrorResult<Identity> {
        debug!("Sign-in failed: {error}");
        self.state.send_modify(|s| {
            s.pending = false;
            s.last_error = Some(error.to_string());
        });
        Err(error)
    }

    fn persist(&self, identity: &Identity) -> AuthErrorResult<()> {
        let encoded = SessionRecord::new(identity.clone()).encode()?;
        self.storage.write(&self.key, &encoded);
        Ok(())
    }
}
