use std::fmt;

use drafter_util::errors::DrafterError;

/// Opaque bearer token for the forge API.
///
/// Formatting never reveals the value; use [`Credential::expose`] only when
/// building the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting an empty (or whitespace-only) value.
    pub fn new(token: impl Into<String>) -> miette::Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DrafterError::Config {
                message: "Authentication token is empty".to_string(),
            }
            .into());
        }
        Ok(Self(token))
    }

    /// The raw token, unmodified.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(********)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}
