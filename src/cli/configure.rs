//! `ai-client-configure` commands
//!
//! Creates, validates and displays AI client configuration files.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{dump_configuration, load_configuration, ClientConfiguration};
use crate::error::{Result, ToolkitError};
use crate::utils::format::{format_field_table, FieldRow};

pub const DEFAULT_CONFIG_PATH: &str = "ai_client_config.json";

/// Model written by `init`
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

#[derive(Parser, Debug)]
#[command(name = "ai-client-configure")]
#[command(about = "Manage configuration files for AI chat clients.")]
#[command(version)]
pub struct ConfigureCli {
    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: ConfigureCommands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigureCommands {
    /// Create a new configuration file with default values
    Init {
        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,
    },
    /// Validate the configuration file and report any issues
    Validate,
    /// Display the configuration in a human readable form
    Show {
        /// Print the configuration as JSON instead of a summary table
        #[arg(long)]
        as_json: bool,
    },
}

impl ConfigureCli {
    /// Run the selected command, writing normal output to `out`
    pub fn execute(self, out: &mut dyn Write) -> Result<()> {
        match self.command {
            ConfigureCommands::Init { force } => execute_init(&self.config, force, out),
            ConfigureCommands::Validate => execute_validate(&self.config, out),
            ConfigureCommands::Show { as_json } => execute_show(&self.config, as_json, out),
        }
    }
}

fn execute_init(path: &Path, force: bool, out: &mut dyn Write) -> Result<()> {
    if path.exists() && !force {
        return Err(ToolkitError::config(format!(
            "Configuration file {} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    dump_configuration(&ClientConfiguration::new(DEFAULT_MODEL), path)?;
    info!(path = %path.display(), "initialized configuration file");

    writeln!(out, "Created configuration file at {}", path.display())?;
    Ok(())
}

fn execute_validate(path: &Path, out: &mut dyn Write) -> Result<()> {
    load_configuration(path)?;

    writeln!(out, "Configuration {} is valid.", path.display())?;
    Ok(())
}

fn execute_show(path: &Path, as_json: bool, out: &mut dyn Write) -> Result<()> {
    let config = load_configuration(path)?;

    if as_json {
        writeln!(out, "{}", config.to_json_pretty()?)?;
    } else {
        writeln!(out, "{}", format_summary(&config)?)?;
    }
    Ok(())
}

/// Summary table of every field, with extras rendered as indented JSON
pub fn format_summary(config: &ClientConfiguration) -> Result<String> {
    let mut rows = vec![
        FieldRow::new("Model", config.model.as_str()),
        FieldRow::new("Temperature", format!("{:.2}", config.temperature)),
        FieldRow::new("Max tokens", config.max_output_tokens.to_string()),
        FieldRow::new("Top-p", format!("{:.2}", config.top_p)),
        FieldRow::new("Endpoint", config.endpoint.as_str()),
        FieldRow::new("API key env", config.api_key_env.as_str()),
    ];

    if !config.extras.is_empty() {
        rows.push(FieldRow::new(
            "Extras",
            serde_json::to_string_pretty(&config.extras)?,
        ));
    }

    Ok(format_field_table(&rows))
}
