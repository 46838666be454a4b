//! Forge release protocol: repository URL layout, authentication headers,
//! draft release creation and release asset upload.

pub mod auth;
pub mod client;
pub mod release;
pub mod repository;
pub mod upload;
