use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Portal role determining which guarded routes an identity may enter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Registered non-profit organization
    Ngo,
    /// Individual or corporate donor (default for new registrations)
    #[default]
    Donor,
    /// Portal administrator
    Admin,
}

impl Role {
    /// Convert to wire/storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ngo => "ngo",
            Self::Donor => "donor",
            Self::Admin => "admin",
        }
    }

    /// All roles, in declaration order
    pub fn all() -> [Role; 3] {
        [Self::Ngo, Self::Donor, Self::Admin]
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "ngo" => Ok(Self::Ngo),
            "donor" => Ok(Self::Donor),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
