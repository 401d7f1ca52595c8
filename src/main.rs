//! ai-client-configure - manage AI client configuration files

use ai_client_toolkit::cli::{report_error, ConfigureCli};
use ai_client_toolkit::logging::{init_logging, LogFormat};
use clap::Parser;

fn main() {
    // Initialize logging
    init_logging(LogFormat::Text, "ai_client_toolkit=warn");

    // Parse command-line arguments
    let cli = ConfigureCli::parse();

    // Execute the command
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli.execute(&mut stdout) {
        std::process::exit(report_error(&e));
    }
}
