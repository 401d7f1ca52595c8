//! sync-service - health-check HTTP service for AI client sync

use ai_client_toolkit::logging::{init_logging, LogFormat};
use ai_client_toolkit::{server, Settings};
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load sync service settings")?;

    let format = if settings.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(format, "ai_client_toolkit=info");

    server::serve(settings)
        .await
        .context("sync service stopped with an error")?;

    Ok(())
}
