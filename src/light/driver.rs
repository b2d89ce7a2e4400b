//! Indicator driver: the Activate/Deactivate contract over a pixel strip.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::LightConfig;

use super::pixels::{PixelStrip, Rgb, OFF};

/// The on-air indicator.
///
/// Both calls are idempotent in effect: activating an already-active
/// indicator leaves the physical state unchanged. The monitor never
/// invokes them redundantly, but manual CLI use may.
#[async_trait]
pub trait IndicatorDriver: Send {
    async fn activate(&mut self) -> Result<()>;
    async fn deactivate(&mut self) -> Result<()>;
}

/// Drives a NeoPixel-style strip: attention-getting flash sequence on
/// activation, then steady color until deactivated.
pub struct NeoPixelDriver {
    strip: Box<dyn PixelStrip>,
    color: Rgb,
    flash_times: u32,
    flash_delay: Duration,
}

impl NeoPixelDriver {
    pub fn new(strip: Box<dyn PixelStrip>) -> Self {
        Self {
            strip,
            color: (255, 255, 255),
            flash_times: 10,
            flash_delay: Duration::from_millis(300),
        }
    }

    pub fn from_config(strip: Box<dyn PixelStrip>, config: &LightConfig) -> Self {
        Self {
            strip,
            color: config.color(),
            flash_times: config.flash_times,
            flash_delay: Duration::from_millis(config.flash_delay_ms),
        }
    }

    async fn flash(&mut self) -> Result<()> {
        debug!("Flashing LEDs {} times", self.flash_times);
        for _ in 0..self.flash_times {
            self.strip.fill(self.color);
            self.strip.show()?;
            tokio::time::sleep(self.flash_delay).await;
            self.strip.fill(OFF);
            self.strip.show()?;
            tokio::time::sleep(self.flash_delay).await;
        }
        Ok(())
    }
}

#[async_trait]
impl IndicatorDriver for NeoPixelDriver {
    async fn activate(&mut self) -> Result<()> {
        self.flash().await?;
        info!("Turning LEDs on");
        self.strip.fill(self.color);
        self.strip.show()
    }

    async fn deactivate(&mut self) -> Result<()> {
        info!("Turning LEDs off");
        self.strip.fill(OFF);
        self.strip.show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Fill(Rgb),
        Show,
    }

    struct RecordingStrip {
        ops: Arc<Mutex<Vec<Op>>>,
    }

    impl PixelStrip for RecordingStrip {
        fn fill(&mut self, color: Rgb) {
            self.ops.lock().unwrap().push(Op::Fill(color));
        }

        fn show(&mut self) -> Result<()> {
            self.ops.lock().unwrap().push(Op::Show);
            Ok(())
        }
    }

    fn fast_driver(flash_times: u32) -> (NeoPixelDriver, Arc<Mutex<Vec<Op>>>) {
        let ops = Arc::new(Mutex::new(Vec::new()));
        let strip = RecordingStrip { ops: ops.clone() };
        let config = LightConfig {
            flash_times,
            flash_delay_ms: 0,
            color: [255, 255, 255],
            ..LightConfig::default()
        };
        (NeoPixelDriver::from_config(Box::new(strip), &config), ops)
    }

    #[tokio::test]
    async fn test_activate_flashes_then_settles_on() {
        let (mut driver, ops) = fast_driver(2);
        driver.activate().await.unwrap();

        let ops = ops.lock().unwrap();
        // 2 flashes = 4 fill/show pairs, plus the final steady frame
        assert_eq!(ops.len(), 10);
        assert_eq!(ops[ops.len() - 2], Op::Fill((255, 255, 255)));
        assert_eq!(ops[ops.len() - 1], Op::Show);
    }

    #[tokio::test]
    async fn test_deactivate_goes_dark_without_flashing() {
        let (mut driver, ops) = fast_driver(2);
        driver.deactivate().await.unwrap();

        let ops = ops.lock().unwrap();
        assert_eq!(ops.as_slice(), &[Op::Fill(OFF), Op::Show]);
    }
}
