//! Registration draft - what a sign-up form submits.

use crate::Role;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// All-optional account draft. The backend applies defaults for anything
/// left unset (role falls back to donor).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationDraft {
    pub role: Option<Role>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub interests: BTreeSet<String>,
    pub focus_areas: BTreeSet<String>,
    pub needs: BTreeSet<String>,
}

impl RegistrationDraft {
    /// Draft for the given role with everything else defaulted
    pub fn for_role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}
