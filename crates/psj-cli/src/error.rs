use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Auth {
        #[from]
        source: psj_auth::AuthError,
    },

    #[error("JSON output failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("{field} must not be empty {location}")]
    EmptyField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Unknown route: {route} {location}")]
    UnknownRoute {
        route: String,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
