use crate::config::{Config, Credentials};
use crate::light::{NeoPixelDriver, SimulatedStrip};
use crate::presence::{PresenceMonitor, ZoomPresenceQuery};
use crate::zoom::ZoomApiClient;
use anyhow::{Context, Result};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub async fn run_service() -> Result<()> {
    info!("Starting on-air light service");

    let config = Config::load()?;
    let credentials = Credentials::from_env()?;

    let client = ZoomApiClient::new(&credentials, &config.zoom)
        .context("Failed to build Zoom client")?;

    // Fatal if the email is unknown to the account — the loop never starts
    let user = client
        .find_user_by_email(&credentials.user_email)
        .await
        .context("Failed to resolve Zoom user")?;
    info!("Current user found: {}", user.email);

    let strip = SimulatedStrip::new(config.light.pixel_count, config.light.brightness);
    let driver = NeoPixelDriver::from_config(Box::new(strip), &config.light);
    let query = ZoomPresenceQuery::new(client);

    let mut monitor = PresenceMonitor::new(
        Box::new(query),
        Box::new(driver),
        user,
        Duration::from_secs(config.monitor.poll_interval_seconds),
    )
    .with_self_test_hold(Duration::from_secs(config.monitor.self_test_hold_seconds));

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", err);
            return;
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    monitor.run(shutdown).await;

    info!("Exiting");
    Ok(())
}
