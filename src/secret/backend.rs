//! Secret storage backends
//!
//! A backend is an opaque key-value store scoped by `(service, key)`.
//! The OS credential store is the production backend; an in-memory map
//! stands in for it in tests and dry runs.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use thiserror::Error;

/// Failure reported by a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// No credential is stored under the requested key
    #[error("no entry")]
    NoEntry,

    #[error("backend failure: {0}")]
    Failure(String),
}

/// Trait for secret backend operations
#[cfg_attr(test, mockall::automock)]
pub trait SecretBackend: Send + Sync {
    /// Store `value` under `(service, key)`, replacing any previous value
    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), BackendError>;

    /// Read the value under `(service, key)`; absence is `Ok(None)`
    fn get(&self, service: &str, key: &str) -> Result<Option<String>, BackendError>;

    /// Remove `(service, key)`, failing with [`BackendError::NoEntry`] if absent
    fn delete(&self, service: &str, key: &str) -> Result<(), BackendError>;
}

/// OS credential store (Keychain, Credential Manager, kernel keyring)
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyringBackend;

impl KeyringBackend {
    pub fn new() -> Self {
        Self
    }

    fn entry(service: &str, key: &str) -> Result<keyring::Entry, BackendError> {
        keyring::Entry::new(service, key).map_err(map_keyring_error)
    }
}

impl SecretBackend for KeyringBackend {
    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), BackendError> {
        Self::entry(service, key)?
            .set_password(value)
            .map_err(map_keyring_error)
    }

    fn get(&self, service: &str, key: &str) -> Result<Option<String>, BackendError> {
        match Self::entry(service, key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(map_keyring_error(e)),
        }
    }

    fn delete(&self, service: &str, key: &str) -> Result<(), BackendError> {
        Self::entry(service, key)?
            .delete_credential()
            .map_err(map_keyring_error)
    }
}

fn map_keyring_error(error: keyring::Error) -> BackendError {
    match error {
        keyring::Error::NoEntry => BackendError::NoEntry,
        other => BackendError::Failure(other.to_string()),
    }
}

/// Process-local backend; contents vanish with the process
#[derive(Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<(String, String), String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<(String, String), String>>, BackendError> {
        self.values
            .lock()
            .map_err(|_| BackendError::Failure("memory backend lock poisoned".to_string()))
    }
}

impl fmt::Debug for MemoryBackend {
    // Values are secrets; show only how many are held.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.values.lock().map(|v| v.len()).unwrap_or(0);
        f.debug_struct("MemoryBackend").field("entries", &len).finish()
    }
}

impl SecretBackend for MemoryBackend {
    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), BackendError> {
        self.lock()?
            .insert((service.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn get(&self, service: &str, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self
            .lock()?
            .get(&(service.to_string(), key.to_string()))
            .cloned())
    }

    fn delete(&self, service: &str, key: &str) -> Result<(), BackendError> {
        self.lock()?
            .remove(&(service.to_string(), key.to_string()))
            .map(|_| ())
            .ok_or(BackendError::NoEntry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_scopes_by_service() {
        let backend = MemoryBackend::new();
        backend.set("svc-a", "token", "a").unwrap();
        backend.set("svc-b", "token", "b").unwrap();

        assert_eq!(backend.get("svc-a", "token").unwrap().as_deref(), Some("a"));
        assert_eq!(backend.get("svc-b", "token").unwrap().as_deref(), Some("b"));
        assert_eq!(backend.get("svc-c", "token").unwrap(), None);
    }

    #[test]
    fn test_memory_backend_delete_missing_is_no_entry() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.delete("svc", "absent"), Err(BackendError::NoEntry));
    }

    #[test]
    fn test_keyring_error_mapping() {
        assert_eq!(map_keyring_error(keyring::Error::NoEntry), BackendError::NoEntry);
        assert!(matches!(
            map_keyring_error(keyring::Error::TooLong("key".to_string(), 255)),
            BackendError::Failure(_)
        ));
    }
}
