use std::process::ExitCode;

use miette::Result;

use drafter_ops::ops_plan;
use drafter_ops::PublishOptions;
use drafter_util::progress;

pub fn exec(options: &PublishOptions, tag: &str) -> Result<ExitCode> {
    let plan = ops_plan::plan(options, tag)?;
    ops_plan::print_plan(&plan);

    let missing = plan.missing();
    if !missing.is_empty() {
        progress::status_warn("Missing", &missing.join(", "));
    }
    Ok(ExitCode::SUCCESS)
}
