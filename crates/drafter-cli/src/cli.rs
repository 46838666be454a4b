//! CLI argument definitions for drafter.
//!
//! A single command with two positionals, the token and the tag. Flags
//! override the matching `Drafter.toml` keys.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "drafter",
    version,
    about = "Create a draft release and attach prebuilt artifacts",
    long_about = "drafter runs at the end of a build pipeline. It creates a draft release \
                  for the given tag on the configured forge project, then uploads every \
                  configured artifact from the artifacts directory. Upload failures are \
                  reported but do not fail the run unless --strict is given."
)]
pub struct Cli {
    /// Forge API token, sent as a bearer credential
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Release tag; only the last path component is used (refs/tags/v1.2.0 -> v1.2.0)
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Configuration file (defaults to ./Drafter.toml when present)
    #[arg(long, env = "DRAFTER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the artifacts
    #[arg(long, env = "DRAFTER_ARTIFACTS_DIR", value_name = "DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Forge REST API base URL
    #[arg(long, env = "DRAFTER_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Forge asset upload base URL
    #[arg(long, env = "DRAFTER_UPLOADS_URL", value_name = "URL")]
    pub uploads_url: Option<String>,

    /// Owner of the forge project
    #[arg(long)]
    pub owner: Option<String>,

    /// Forge project name
    #[arg(long)]
    pub project: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Exit with status 2 if any artifact fails to upload
    #[arg(long)]
    pub strict: bool,

    /// Print the requests that would be sent, without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
