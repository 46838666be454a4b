//! Shared utilities for the drafter release publisher.
//!
//! This crate provides cross-cutting concerns used by the other drafter
//! crates: the unified error type and terminal status/progress output.

pub mod errors;
pub mod progress;
