//! The portal's route table, reduced to its access-control decision.

use psj_auth::AccessGate;
use psj_core::Role;

/// Guarded portal routes and the roles allowed through
const GUARDED: &[(&str, &[Role])] = &[
    ("/ngo-portal", &[Role::Ngo, Role::Admin]),
    ("/donor-portal", &[Role::Donor, Role::Admin]),
    ("/admin", &[Role::Admin]),
];

/// Routes with no gate
const PUBLIC: &[&str] = &["/", "/about", "/login", "/register", "/terms"];

pub(crate) fn guard_for(route: &str) -> Option<AccessGate> {
    GUARDED
        .iter()
        .find(|(path, _)| *path == route)
        .map(|(_, roles)| AccessGate::new(roles.iter().copied()))
}

pub(crate) fn is_public(route: &str) -> bool {
    PUBLIC.contains(&route)
}
