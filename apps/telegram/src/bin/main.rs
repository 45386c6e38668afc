//! Telegram bot entry point.
//!
//! Initializes tracing, reads the required secrets from the
//! environment, and runs the long-polling dispatcher. Missing secrets
//! are fatal before any traffic is served.

use anyhow::Result;
use otterchat_telegram::Secrets;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let secrets = Secrets::from_env()?;
    tracing::info!("bot is starting");
    otterchat_telegram::run(secrets).await
}
