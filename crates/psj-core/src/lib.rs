pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::registration::RegistrationDraft;
pub use models::role::Role;

#[cfg(test)]
mod tests;
