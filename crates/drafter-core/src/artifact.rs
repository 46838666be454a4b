//! The set of prebuilt archives attached to a release.
//!
//! The list is configuration, not something discovered on disk: every name
//! in the set is attempted, and a missing file is reported as a failed
//! upload rather than silently skipped.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use drafter_util::errors::DrafterError;

/// Archive extension used by [`ArtifactSet::from_matrix`].
pub const ARCHIVE_EXT: &str = "tar.gz";

/// One expected archive, identified by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>) -> miette::Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DrafterError::Config {
                message: "Artifact name is empty".to_string(),
            }
            .into());
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DrafterError::Config {
                message: format!("Artifact name '{name}' must be a bare file name"),
            }
            .into());
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of this artifact inside the artifacts directory.
    pub fn local_path(&self, artifacts_dir: &Path) -> PathBuf {
        artifacts_dir.join(&self.name)
    }
}

/// Ordered, duplicate-free list of artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// Build a set from explicit file names, keeping their order.
    pub fn from_names<I, S>(names: I) -> miette::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let mut artifacts = Vec::new();
        for name in names {
            let artifact = Artifact::new(name)?;
            if !seen.insert(artifact.name.clone()) {
                return Err(DrafterError::Config {
                    message: format!("Artifact '{}' is listed more than once", artifact.name),
                }
                .into());
            }
            artifacts.push(artifact);
        }
        if artifacts.is_empty() {
            return Err(DrafterError::Config {
                message: "No artifacts configured".to_string(),
            }
            .into());
        }
        Ok(Self { artifacts })
    }

    /// Expand `component × platform × arch` into
    /// `<component>-<platform>-<arch>.tar.gz`, component-major.
    pub fn from_matrix(
        components: &[String],
        platforms: &[String],
        archs: &[String],
    ) -> miette::Result<Self> {
        let mut names = Vec::new();
        for component in components {
            for platform in platforms {
                for arch in archs {
                    names.push(format!("{component}-{platform}-{arch}.{ARCHIVE_EXT}"));
                }
            }
        }
        Self::from_names(names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.artifacts.iter().map(Artifact::name).collect()
    }
}

impl Default for ArtifactSet {
    /// Worker and coordinator archives for Linux amd64 and arm64.
    fn default() -> Self {
        let artifacts = default_names()
            .into_iter()
            .map(|name| Artifact { name })
            .collect();
        Self { artifacts }
    }
}

/// The four archives produced by the build pipeline.
pub fn default_names() -> Vec<String> {
    vec![
        "worker-linux-amd64.tar.gz".to_string(),
        "worker-linux-arm64.tar.gz".to_string(),
        "coordinator-linux-amd64.tar.gz".to_string(),
        "coordinator-linux-arm64.tar.gz".to_string(),
    ]
}
