//! Identity - the authenticated principal of the portal.

use crate::Role;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated principal. Presence of an `Identity` in the session
/// store is the sole authorization signal; there is no token or expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique identifier assigned at account creation
    pub id: String,
    /// Login key, unique per account
    pub email: String,
    pub name: String,
    pub role: Role,
    /// NGO-only administrative approval flag. `None` for donors and admins.
    /// Flipped to `Some(true)` only by an admin action outside this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Free-text location, meaningful for both donors and NGOs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Donor-only category tags
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub interests: BTreeSet<String>,
    /// NGO-only focus-area tags
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub focus_areas: BTreeSet<String>,
    /// NGO-only needs tags
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub needs: BTreeSet<String>,
}

impl Identity {
    /// Create a minimal identity with a freshly minted id.
    /// New NGOs start unverified; other roles carry no verification flag.
    pub fn new(email: String, name: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            role,
            verified: if role == Role::Ngo { Some(false) } else { None },
            location: None,
            interests: BTreeSet::new(),
            focus_areas: BTreeSet::new(),
            needs: BTreeSet::new(),
        }
    }

    /// Check if this is an NGO that has passed administrative approval
    pub fn is_verified_ngo(&self) -> bool {
        self.role == Role::Ngo && self.verified == Some(true)
    }
}
