use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Malformed session record: {source} {location}")]
    MalformedSession {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Session record encoding failed: {source} {location}")]
    SessionEncode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
