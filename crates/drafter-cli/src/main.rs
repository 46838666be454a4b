//! drafter CLI binary.
//!
//! Entry point for the `drafter` release step. It initializes logging via
//! `tracing`, parses arguments with `clap`, runs the publish workflow on a
//! single-threaded runtime and maps the outcome to the process exit code:
//! `0` once the release exists, `1` when it could not be created, `2` for
//! failed uploads under `--strict`.

mod cli;
mod commands;

use std::process::ExitCode;

use miette::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = cli::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    commands::dispatch(args).await
}
