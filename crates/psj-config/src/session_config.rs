use crate::DEFAULT_SESSION_KEY;

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage key for the persisted session record
    pub key: String,
    /// Directory for the session file. Defaults to the config dir.
    pub dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: String::from(DEFAULT_SESSION_KEY),
            dir: None,
        }
    }
}
