//! Guarded-route navigation.

use crate::error::{CliError, Result as CliErrorResult};
use crate::routes;

use psj_auth::{GateDecision, SessionStore};

use std::panic::Location;
use std::process::ExitCode;

use error_location::ErrorLocation;

/// Exit code for a redirect decision, distinct from hard failures
const REDIRECT_EXIT: u8 = 2;

pub(crate) fn open(store: &SessionStore, route: &str) -> CliErrorResult<ExitCode> {
    match decide(store, route)? {
        None => {
            println!("{route}: public, no gate");
            Ok(ExitCode::SUCCESS)
        }
        Some(GateDecision::Render) => {
            // Render is only reachable with a current identity
            if let Some(identity) = store.current_identity() {
                println!("{route}: render ({} as {})", identity.name, identity.role);
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(GateDecision::RedirectToSignIn { requested }) => {
            println!("{route}: redirect to /login, returning to {requested} after sign-in");
            Ok(ExitCode::from(REDIRECT_EXIT))
        }
        Some(GateDecision::RedirectToUnauthorized) => {
            println!("{route}: redirect to /unauthorized");
            Ok(ExitCode::from(REDIRECT_EXIT))
        }
    }
}

/// Gate evaluation for one route. `None` means the route is public.
pub(crate) fn decide(store: &SessionStore, route: &str) -> CliErrorResult<Option<GateDecision>> {
    if routes::is_public(route) {
        return Ok(None);
    }

    let gate = routes::guard_for(route).ok_or_else(|| CliError::UnknownRoute {
        route: route.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let identity = store.current_identity();
    Ok(Some(gate.evaluate(identity.as_ref(), route)))
}
