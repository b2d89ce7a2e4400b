use anyhow::Result;
use std::time::Duration;

use crate::config::Config;
use crate::light::{IndicatorDriver, NeoPixelDriver, SimulatedStrip};

use super::args::{LightCliArgs, LightCommand};

pub async fn handle_light_command(args: LightCliArgs) -> Result<()> {
    let config = Config::load()?;
    let strip = SimulatedStrip::new(config.light.pixel_count, config.light.brightness);
    let mut driver = NeoPixelDriver::from_config(Box::new(strip), &config.light);

    match args.command {
        LightCommand::Test => {
            driver.activate().await?;
            tokio::time::sleep(Duration::from_secs(config.monitor.self_test_hold_seconds)).await;
            driver.deactivate().await?;
            println!("Light test complete");
        }
        LightCommand::On => driver.activate().await?,
        LightCommand::Off => driver.deactivate().await?,
    }

    Ok(())
}
