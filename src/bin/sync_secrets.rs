//! sync-secrets - manage keyring-backed secrets for the sync service

use std::sync::Arc;

use ai_client_toolkit::cli::{report_error, SecretsCli};
use ai_client_toolkit::logging::{init_logging, LogFormat};
use ai_client_toolkit::secret::KeyringBackend;
use ai_client_toolkit::{Result, Settings};
use clap::Parser;

fn main() {
    init_logging(LogFormat::Text, "ai_client_toolkit=warn");

    let cli = SecretsCli::parse();

    if let Err(e) = run(cli) {
        std::process::exit(report_error(&e));
    }
}

fn run(cli: SecretsCli) -> Result<()> {
    let settings = Settings::load()?;
    let mut stdout = std::io::stdout().lock();

    cli.execute(&settings, Arc::new(KeyringBackend::new()), &mut stdout)
}
