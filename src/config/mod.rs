//! Configuration management module
//!
//! This module handles the AI client configuration file (validation,
//! loading and persistence) and the sync service's runtime settings.

pub mod client;
pub mod settings;

pub use client::*;
pub use settings::*;
