//! Release tag sanitization and the names derived from it.

use std::fmt;

use drafter_util::errors::DrafterError;

/// A tag reduced to its final path component.
///
/// `refs/tags/v1.2.0` becomes `v1.2.0`. The value is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// Keep only the text after the last `/`, verbatim.
    ///
    /// A ref ending in `/` has an empty final component and is rejected.
    pub fn parse(raw: &str) -> miette::Result<Self> {
        let last = raw.rsplit('/').next().unwrap_or_default();
        if last.is_empty() {
            return Err(DrafterError::InvalidTag {
                raw: raw.to_string(),
            }
            .into());
        }
        Ok(Self(last.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable release title: `"<prefix> v<version>"`.
    ///
    /// A leading `v` on the tag is not doubled: `v2.0.0` and `2.0.0` both
    /// give `"<prefix> v2.0.0"`.
    pub fn title(&self, title_prefix: &str) -> String {
        let version = self.0.strip_prefix('v').unwrap_or(&self.0);
        format!("{title_prefix} v{version}")
    }

    /// Canonical tag name on the forge: `"<prefix><tag>"`.
    pub fn tag_name(&self, tag_prefix: &str) -> String {
        format!("{tag_prefix}{}", self.0)
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
