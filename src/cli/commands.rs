use crate::commands::{ApproveArgs, approve};
use clap::{Parser, Subcommand};

/// `idbctl` - grant app permissions on iOS simulators.
#[derive(Parser, Debug)]
#[command(name = "idbctl")]
#[command(version)]
#[command(about = "Control iOS simulators from the command line.", long_about = None)]
pub struct Cli {
    /// Target device UDID (defaults to IDBCTL_UDID, config default_udid, then "booted")
    #[arg(long, global = true, value_name = "UDID")]
    pub udid: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(name = approve::NAME, about = approve::DESCRIPTION)]
    Approve(ApproveArgs),
}
