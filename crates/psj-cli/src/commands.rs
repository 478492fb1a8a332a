use psj_core::{CoreError, Role};

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in with an existing account
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Route to return to after sign-in (carried by a gate redirect)
        #[arg(long)]
        from: Option<String>,
    },

    /// Create an account and sign in as it
    Register(RegisterArgs),

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Evaluate the access gate for a route
    Open {
        /// Route path, e.g. /ngo-portal
        route: String,
    },
}

#[derive(Args)]
pub(crate) struct RegisterArgs {
    /// Account role: ngo, donor or admin (defaults to donor)
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<Role>,

    /// Display name (organization name for NGOs)
    #[arg(long)]
    pub(crate) name: Option<String>,

    #[arg(long)]
    pub(crate) email: Option<String>,

    #[arg(long)]
    pub(crate) location: Option<String>,

    /// Donor interest tag (repeatable)
    #[arg(long = "interest")]
    pub(crate) interests: Vec<String>,

    /// NGO focus-area tag (repeatable)
    #[arg(long = "focus-area")]
    pub(crate) focus_areas: Vec<String>,

    /// NGO need tag (repeatable)
    #[arg(long = "need")]
    pub(crate) needs: Vec<String>,
}

fn parse_role(s: &str) -> Result<Role, CoreError> {
    s.parse()
}
