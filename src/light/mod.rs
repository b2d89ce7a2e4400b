pub mod driver;
pub mod pixels;

pub use driver::{IndicatorDriver, NeoPixelDriver};
pub use pixels::{PixelStrip, Rgb, SimulatedStrip};
