//! Login, register, logout and whoami handlers.

use crate::commands::RegisterArgs;
use crate::error::{CliError, Result as CliErrorResult};

use psj_auth::SessionStore;
use psj_core::{Identity, RegistrationDraft, Role};

use std::panic::Location;
use std::process::ExitCode;

use error_location::ErrorLocation;

pub(crate) async fn login(
    store: &SessionStore,
    email: &str,
    password: &str,
    from: Option<&str>,
    pretty: bool,
) -> CliErrorResult<ExitCode> {
    // The store does not re-validate; empty fields stop here
    require_non_empty("email", email)?;
    require_non_empty("password", password)?;

    let identity = store.authenticate(email, password).await?;
    print_identity(&identity, pretty)?;
    // Sign-in round-trip: return to the gate-carried route, else the landing page
    println!("Continue to {}", from.unwrap_or("/"));
    Ok(ExitCode::SUCCESS)
}

pub(crate) async fn register(
    store: &SessionStore,
    args: RegisterArgs,
    pretty: bool,
) -> CliErrorResult<ExitCode> {
    let draft = draft_from(args);
    let identity = store.create_account(draft).await?;
    print_identity(&identity, pretty)?;
    println!("Continue to {}", post_registration_route(identity.role));
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn logout(store: &SessionStore) -> CliErrorResult<ExitCode> {
    store.end_session();
    println!("Signed out.");
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn whoami(store: &SessionStore, pretty: bool) -> CliErrorResult<ExitCode> {
    match store.current_identity() {
        Some(identity) => print_identity(&identity, pretty)?,
        None => println!("Not signed in."),
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn draft_from(args: RegisterArgs) -> RegistrationDraft {
    RegistrationDraft {
        role: args.role,
        name: args.name,
        email: args.email,
        location: args.location,
        interests: args.interests.into_iter().collect(),
        focus_areas: args.focus_areas.into_iter().collect(),
        needs: args.needs.into_iter().collect(),
    }
}

/// Where the portal lands a freshly registered account
pub(crate) fn post_registration_route(role: Role) -> &'static str {
    match role {
        Role::Ngo => "/ngo-portal",
        Role::Donor | Role::Admin => "/donor-portal",
    }
}

#[track_caller]
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> CliErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CliError::EmptyField {
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

fn print_identity(identity: &Identity, pretty: bool) -> CliErrorResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(identity)?
    } else {
        serde_json::to_string(identity)?
    };
    println!("{json}");
    Ok(())
}
