//! Command dispatch: resolve configuration, then publish or plan.

mod plan;
mod publish;

use std::process::ExitCode;

use miette::Result;

use drafter_core::config::PublishConfig;
use drafter_ops::PublishOptions;
use drafter_util::errors::DrafterError;

use crate::cli::Cli;

/// Route a parsed CLI invocation to the publish run or the dry run.
pub async fn dispatch(cli: Cli) -> Result<ExitCode> {
    let config = resolve_config(&cli)?;
    let options = PublishOptions::from_config(&config)?;
    let strict = cli.strict || config.release.strict;

    if cli.dry_run {
        plan::exec(&options, &cli.tag)
    } else {
        publish::exec(&options, &cli.token, &cli.tag, strict).await
    }
}

/// Load `Drafter.toml` (or `--config`), apply command-line overrides and
/// validate the result.
fn resolve_config(cli: &Cli) -> Result<PublishConfig> {
    let cwd = std::env::current_dir().map_err(DrafterError::Io)?;
    let mut config = PublishConfig::load(cli.config.as_deref(), &cwd)?;

    if let Some(dir) = &cli.artifacts_dir {
        config.artifacts.dir = dir.clone();
    }
    if let Some(url) = &cli.api_url {
        config.forge.api_url = url.clone();
    }
    if let Some(url) = &cli.uploads_url {
        config.forge.uploads_url = url.clone();
    }
    if let Some(owner) = &cli.owner {
        config.forge.owner = owner.clone();
    }
    if let Some(project) = &cli.project {
        config.forge.project = project.clone();
    }
    if let Some(secs) = cli.timeout {
        if secs == 0 {
            return Err(DrafterError::Config {
                message: "--timeout must be greater than zero".to_string(),
            }
            .into());
        }
        config.network.request_timeout_secs = secs;
    }
    config
        .validate()
        .map_err(|message| DrafterError::Config { message })?;

    tracing::debug!(
        api_url = %config.forge.api_url,
        artifacts_dir = %config.artifacts.dir.display(),
        "resolved configuration"
    );
    Ok(config)
}
