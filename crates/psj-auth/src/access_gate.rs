//! Route-level authorization decisions.

use psj_core::{Identity, Role};

use std::collections::BTreeSet;

/// Outcome of evaluating a guarded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The current identity may see the guarded content
    Render,
    /// Nobody is signed in. Carries the originally requested location so the
    /// sign-in flow can return there after success.
    RedirectToSignIn { requested: String },
    /// Signed in, but the role is not allowed here
    RedirectToUnauthorized,
}

/// Pure decision function guarding one route.
///
/// The gate holds no memory between evaluations; every navigation is a fresh
/// decision over whatever the session store currently reports. It never
/// mutates the store and never navigates itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    allowed: BTreeSet<Role>,
}

impl AccessGate {
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    pub fn allowed_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed.iter().copied()
    }

    /// Decide whether `identity` may enter the location `requested`.
    pub fn evaluate(&self, identity: Option<&Identity>, requested: &str) -> GateDecision {
        match identity {
            None => GateDecision::RedirectToSignIn {
                requested: requested.to_string(),
            },
            Some(identity) if self.allows(identity.role) => GateDecision::Render,
            Some(_) => GateDecision::RedirectToUnauthorized,
        }
    }
}
