//! Core data types for drafter: the bearer credential, the sanitized release
//! tag, the configured artifact set and the `Drafter.toml` configuration.

pub mod artifact;
pub mod config;
pub mod credential;
pub mod tag;
