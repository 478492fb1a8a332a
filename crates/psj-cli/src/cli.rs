use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "psj")]
#[command(about = "mypsj donor/NGO portal shell")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (defaults to PSJ_CONFIG_DIR, then ./.psj)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
