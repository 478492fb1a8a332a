
use crate::DemoBackend;

use psj_core::{Identity, Role};

use std::time::Duration;

/// Seeded demo backend with the simulated latency removed.
pub(crate) fn instant_backend() -> DemoBackend {
    DemoBackend::seeded().with_latency(Duration::ZERO)
}

pub(crate) fn donor_identity() -> Identity {
    Identity::new(
        "donor@mypsj.com".to_string(),
        "John Donor".to_string(),
        Role::Donor,
    )
}
