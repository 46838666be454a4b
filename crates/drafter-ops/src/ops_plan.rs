//! Dry run: show what a publish would send without touching the network.

use std::path::PathBuf;

use drafter_core::tag::ReleaseTag;
use drafter_forge::release::CreateReleaseRequest;

use crate::PublishOptions;

/// One upload a publish run would attempt.
#[derive(Debug)]
pub struct PlannedUpload {
    pub artifact: String,
    pub path: PathBuf,
    /// File size, or `None` when the file cannot be read.
    pub size: Option<u64>,
    /// Upload URL with `<id>` standing in for the release id.
    pub url: String,
}

#[derive(Debug)]
pub struct PublishPlan {
    pub releases_url: String,
    pub request: CreateReleaseRequest,
    pub uploads: Vec<PlannedUpload>,
}

impl PublishPlan {
    pub fn missing(&self) -> Vec<&str> {
        self.uploads
            .iter()
            .filter(|u| u.size.is_none())
            .map(|u| u.artifact.as_str())
            .collect()
    }
}

/// Resolve the tag and artifact paths the way [`crate::ops_publish::publish`] would.
pub fn plan(options: &PublishOptions, raw_tag: &str) -> miette::Result<PublishPlan> {
    let tag = ReleaseTag::parse(raw_tag)?;
    let request = CreateReleaseRequest::new(&tag, &options.release);
    let assets_url = options.repo.assets_url("<id>");

    let uploads = options
        .artifacts
        .iter()
        .map(|artifact| {
            let path = artifact.local_path(&options.artifacts_dir);
            let size = std::fs::metadata(&path)
                .ok()
                .filter(|m| m.is_file())
                .map(|m| m.len());
            PlannedUpload {
                artifact: artifact.name().to_string(),
                url: format!("{assets_url}?name={}", artifact.name()),
                path,
                size,
            }
        })
        .collect();

    Ok(PublishPlan {
        releases_url: options.repo.releases_url(),
        request,
        uploads,
    })
}

/// Print the plan to stdout.
pub fn print_plan(plan: &PublishPlan) {
    println!("  POST {}", plan.releases_url);
    println!("    tag_name: {}", plan.request.tag_name());
    println!("    name:     {}", plan.request.name());
    println!("    draft:    true");
    println!();
    for upload in &plan.uploads {
        let size = match upload.size {
            Some(n) => drafter_util::progress::format_bytes(n),
            None => "missing".to_string(),
        };
        println!("  POST {}", upload.url);
        println!("    from {} ({size})", upload.path.display());
    }
}
