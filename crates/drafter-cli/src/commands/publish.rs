use std::process::ExitCode;

use miette::Result;

use drafter_core::credential::Credential;
use drafter_ops::ops_publish;
use drafter_ops::PublishOptions;
use drafter_util::progress;

/// Exit status for a run whose release exists but is missing assets.
const EXIT_INCOMPLETE: u8 = 2;

pub async fn exec(
    options: &PublishOptions,
    token: &str,
    tag: &str,
    strict: bool,
) -> Result<ExitCode> {
    let credential = Credential::new(token)?;
    let report = ops_publish::publish(options, &credential, tag).await?;

    let total = report.outcomes.len();
    let failed = report.failed();
    if failed.is_empty() {
        progress::status(
            "Finished",
            &format!(
                "{total} asset(s), {} attached to draft release {}",
                progress::format_bytes(report.uploaded_bytes()),
                report.release_id
            ),
        );
    } else {
        progress::status_warn(
            "Finished",
            &format!(
                "draft release {} is missing {} of {total} asset(s): {}",
                report.release_id,
                failed.len(),
                failed.join(", ")
            ),
        );
    }
    if let Some(url) = &report.html_url {
        progress::status_info("Review", url);
    }

    if strict {
        if let Err(e) = report.require_complete() {
            eprintln!("{:?}", miette::Report::new(e));
            return Ok(ExitCode::from(EXIT_INCOMPLETE));
        }
    }
    Ok(ExitCode::SUCCESS)
}
