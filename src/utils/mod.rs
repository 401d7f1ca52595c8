//! Utility functions module
//!
//! This module contains output formatting helpers shared by the CLIs.

pub mod format;

pub use format::*;
