//! ai-client-toolkit - AI client configuration and secret tooling
//!
//! Validates and persists AI chat-client configuration files, manages
//! sync service secrets in the OS credential store, and serves the sync
//! service health endpoint.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod secret;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use config::{ClientConfiguration, Settings};
pub use error::{Result, ToolkitError};
pub use secret::SecretManager;
