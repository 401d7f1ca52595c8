use thiserror::Error;

/// Main error type for ai-client-toolkit operations
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// Any configuration-file or schema problem
    #[error("{0}")]
    ConfigError(String),

    /// A requested secret has no stored value
    #[error("{0}")]
    SecretNotFound(String),

    /// The secret backend itself failed
    #[error("{0}")]
    SecretStoreError(String),

    #[error("Settings loading error: {0}")]
    SettingsError(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ToolkitError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn secret_not_found<S: AsRef<str>>(key: S) -> Self {
        Self::SecretNotFound(format!("Secret '{}' not found", key.as_ref()))
    }

    pub fn secret_not_set<S: AsRef<str>>(key: S) -> Self {
        Self::SecretNotFound(format!("Secret '{}' is not set.", key.as_ref()))
    }

    pub fn missing_secrets<S: AsRef<str>>(keys: &[S]) -> Self {
        let mut keys: Vec<&str> = keys.iter().map(AsRef::as_ref).collect();
        keys.sort_unstable();
        Self::SecretNotFound(format!("Missing secrets: {}", keys.join(", ")))
    }

    pub fn secret_store<S: Into<String>>(msg: S) -> Self {
        Self::SecretStoreError(msg.into())
    }

    /// Domain errors that the CLIs report plainly on stderr.
    ///
    /// Anything else is unexpected and gets logged before the process exits.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::ConfigError(_) | Self::SecretNotFound(_))
    }
}

/// Result type alias for ai-client-toolkit operations
pub type Result<T> = std::result::Result<T, ToolkitError>;
