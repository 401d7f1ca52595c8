//! Secret management implementation
//!
//! This module provides a thin facade over a secret backend, scoping every
//! operation to a single service namespace and translating backend failures
//! into the crate's error taxonomy.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Result, ToolkitError};
use crate::secret::backend::{BackendError, KeyringBackend, SecretBackend};

/// Secret manager bound to one service namespace
#[derive(Clone)]
pub struct SecretManager {
    service_name: String,
    backend: Arc<dyn SecretBackend>,
}

impl std::fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretManager")
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}

impl SecretManager {
    /// Create a new secret manager over an arbitrary backend
    pub fn new<S: Into<String>>(service_name: S, backend: Arc<dyn SecretBackend>) -> Self {
        Self {
            service_name: service_name.into(),
            backend,
        }
    }

    /// Create a manager backed by the OS credential store
    pub fn keyring<S: Into<String>>(service_name: S) -> Self {
        Self::new(service_name, Arc::new(KeyringBackend::new()))
    }

    /// Keyring-backed manager for the service namespace named in `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::keyring(settings.secret_service_name.clone())
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Store or replace a secret
    pub fn set_secret(&self, key: &str, value: &str) -> Result<()> {
        debug!(service = %self.service_name, key, "storing secret");
        self.backend
            .set(&self.service_name, key, value)
            .map_err(|e| store_error("Failed to store secret", e))
    }

    /// Look up a secret.
    ///
    /// Returns `Ok(None)` when absent, unless `raise_if_missing` is set, in
    /// which case absence is a [`ToolkitError::SecretNotFound`].
    pub fn get_secret(&self, key: &str, raise_if_missing: bool) -> Result<Option<String>> {
        debug!(service = %self.service_name, key, "loading secret");
        let value = self
            .backend
            .get(&self.service_name, key)
            .map_err(|e| store_error("Failed to load secret", e))?;

        if value.is_none() && raise_if_missing {
            return Err(ToolkitError::secret_not_found(key));
        }
        Ok(value)
    }

    /// Remove a secret; a missing entry is tolerated only with `missing_ok`
    pub fn delete_secret(&self, key: &str, missing_ok: bool) -> Result<()> {
        debug!(service = %self.service_name, key, "deleting secret");
        match self.backend.delete(&self.service_name, key) {
            Ok(()) => Ok(()),
            Err(BackendError::NoEntry) if missing_ok => Ok(()),
            Err(BackendError::NoEntry) => Err(ToolkitError::secret_not_found(key)),
            Err(e) => Err(store_error("Failed to delete secret", e)),
        }
    }

    /// Resolve every key, failing once with all missing keys listed
    pub fn require_all<I, S>(&self, keys: I) -> Result<BTreeMap<String, String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut missing = Vec::new();
        let mut resolved = BTreeMap::new();

        for key in keys {
            let key = key.as_ref();
            match self.get_secret(key, false)? {
                Some(value) => {
                    resolved.insert(key.to_string(), value);
                }
                None => missing.push(key.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(ToolkitError::missing_secrets(&missing));
        }
        Ok(resolved)
    }
}

fn store_error(context: &str, error: BackendError) -> ToolkitError {
    ToolkitError::secret_store(format!("{context}: {error}"))
}
