//! Pixel strip abstraction for the on-air light.
//!
//! Hardware (a NeoPixel ring on a Pi, typically) sits behind `PixelStrip`;
//! the rest of the crate only fills and shows. `SimulatedStrip` tracks the
//! same state in memory for hosts without LEDs and for tests.

use anyhow::Result;
use tracing::debug;

pub type Rgb = (u8, u8, u8);

pub const OFF: Rgb = (0, 0, 0);

/// Trait for addressable LED strips (hardware or simulated).
///
/// Writes are buffered: `fill` stages a color for every pixel, `show`
/// commits the staged frame to the device.
pub trait PixelStrip: Send {
    /// Stage the given color on all pixels.
    fn fill(&mut self, color: Rgb);

    /// Commit the staged frame.
    fn show(&mut self) -> Result<()>;
}

/// In-memory strip that only tracks state.
pub struct SimulatedStrip {
    pixel_count: u16,
    brightness: f32,
    pending: Rgb,
    shown: Rgb,
}

impl SimulatedStrip {
    pub fn new(pixel_count: u16, brightness: f32) -> Self {
        Self {
            pixel_count,
            brightness: brightness.clamp(0.0, 1.0),
            pending: OFF,
            shown: OFF,
        }
    }

    /// The color last committed with `show`.
    pub fn shown(&self) -> Rgb {
        self.shown
    }
}

impl PixelStrip for SimulatedStrip {
    fn fill(&mut self, color: Rgb) {
        let (r, g, b) = color;
        self.pending = (
            scale(r, self.brightness),
            scale(g, self.brightness),
            scale(b, self.brightness),
        );
    }

    fn show(&mut self) -> Result<()> {
        self.shown = self.pending;
        debug!(
            "Simulated strip: {} pixels now {:?}",
            self.pixel_count, self.shown
        );
        Ok(())
    }
}

fn scale(channel: u8, brightness: f32) -> u8 {
    (channel as f32 * brightness).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_commits_pending_fill() {
        let mut strip = SimulatedStrip::new(16, 1.0);
        strip.fill((255, 255, 255));
        assert_eq!(strip.shown(), OFF);

        strip.show().unwrap();
        assert_eq!(strip.shown(), (255, 255, 255));
    }

    #[test]
    fn test_brightness_scales_channels() {
        let mut strip = SimulatedStrip::new(16, 0.5);
        strip.fill((255, 100, 0));
        strip.show().unwrap();
        assert_eq!(strip.shown(), (128, 50, 0));
    }

    #[test]
    fn test_brightness_is_clamped() {
        let mut strip = SimulatedStrip::new(16, 7.5);
        strip.fill((10, 10, 10));
        strip.show().unwrap();
        assert_eq!(strip.shown(), (10, 10, 10));
    }
}
