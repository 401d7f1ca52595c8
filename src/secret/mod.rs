//! Secret management module
//!
//! This module provides keyring-backed secret storage scoped to a service
//! namespace, along with preset alias resolution for well-known keys.

pub mod alias;
pub mod backend;
pub mod manager;

pub use alias::*;
pub use backend::*;
pub use manager::*;
