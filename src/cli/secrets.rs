//! `sync-secrets` commands
//!
//! Stores, inspects and removes sync service secrets. Key arguments accept
//! either a preset alias (`api-token`, `admin-password`) or a raw key name.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::error::{Result, ToolkitError};
use crate::secret::{default_required_keys, resolve_key, SecretBackend, SecretManager};

#[derive(Parser, Debug)]
#[command(name = "sync-secrets")]
#[command(about = "Manage keyring-backed secrets for the sync service.")]
#[command(version)]
pub struct SecretsCli {
    /// Override the keyring service name (defaults to settings value)
    #[arg(long, global = true, value_name = "NAME")]
    pub service_name: Option<String>,

    #[command(subcommand)]
    pub command: SecretCommands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SecretCommands {
    /// Store or update a secret
    Set {
        /// Key alias or raw key name
        key: String,
        /// Secret value (prompted securely when omitted)
        #[arg(long)]
        value: Option<String>,
    },
    /// Check or display a secret
    Get {
        /// Key alias or raw key name
        key: String,
        /// Print the secret value instead of a status message
        #[arg(long)]
        reveal: bool,
    },
    /// Remove a stored secret
    Delete {
        /// Key alias or raw key name
        key: String,
    },
    /// Verify that secrets exist
    Check {
        /// Keys or aliases to verify; defaults to api-token and admin-password
        keys: Vec<String>,
    },
}

impl SecretsCli {
    /// Run the selected command against `backend`, writing normal output to `out`
    pub fn execute(
        self,
        settings: &Settings,
        backend: Arc<dyn SecretBackend>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let service_name = self
            .service_name
            .unwrap_or_else(|| settings.secret_service_name.clone());
        let manager = SecretManager::new(service_name, backend);

        match self.command {
            SecretCommands::Set { key, value } => {
                execute_secret_set(&manager, resolve_key(settings, &key), value, out)
            }
            SecretCommands::Get { key, reveal } => {
                execute_secret_get(&manager, resolve_key(settings, &key), reveal, out)
            }
            SecretCommands::Delete { key } => {
                execute_secret_delete(&manager, resolve_key(settings, &key), out)
            }
            SecretCommands::Check { keys } => execute_secret_check(&manager, settings, keys, out),
        }
    }
}

fn execute_secret_set(
    manager: &SecretManager,
    key: &str,
    value: Option<String>,
    out: &mut dyn Write,
) -> Result<()> {
    let value = match value.filter(|v| !v.is_empty()) {
        Some(value) => Zeroizing::new(value),
        None => Zeroizing::new(rpassword::prompt_password(format!(
            "Enter secret for '{key}': "
        ))?),
    };

    manager.set_secret(key, &value)?;

    writeln!(
        out,
        "Stored secret for '{key}' in service '{}'.",
        manager.service_name()
    )?;
    Ok(())
}

fn execute_secret_get(
    manager: &SecretManager,
    key: &str,
    reveal: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let value = manager
        .get_secret(key, false)?
        .map(Zeroizing::new)
        .ok_or_else(|| ToolkitError::secret_not_set(key))?;

    if reveal {
        writeln!(out, "{}", value.as_str())?;
    } else {
        writeln!(out, "Secret '{key}' is set.")?;
    }
    Ok(())
}

fn execute_secret_delete(manager: &SecretManager, key: &str, out: &mut dyn Write) -> Result<()> {
    manager.delete_secret(key, false)?;

    writeln!(out, "Deleted secret '{key}'.")?;
    Ok(())
}

fn execute_secret_check(
    manager: &SecretManager,
    settings: &Settings,
    identifiers: Vec<String>,
    out: &mut dyn Write,
) -> Result<()> {
    let keys: Vec<String> = if identifiers.is_empty() {
        default_required_keys(settings)
    } else {
        identifiers
            .iter()
            .map(|identifier| resolve_key(settings, identifier).to_string())
            .collect()
    };

    manager.require_all(&keys)?;

    writeln!(out, "All requested secrets are set.")?;
    Ok(())
}
