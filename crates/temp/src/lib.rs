//! Temperature-to-color mapping over a fixed reference palette.
//!
//! A thin consumer of [`band_range::RangeMap`] preconfigured with the
//! default {color, temperature} table; custom tables slot in through
//! [`TempColorMap::with_table`].

use band_color::{Color, ColorInput};
use band_core::Result;
use band_range::RangeMap;

/// Default palette, coldest to hottest.
const DEFAULT_COLORS: [Color; 12] = [
    Color { r: 255, g: 0, b: 255, a: None },   // magenta
    Color { r: 217, g: 130, b: 181, a: None }, // pinky purple
    Color { r: 128, g: 0, b: 128, a: None },   // purple
    Color { r: 0, g: 0, b: 255, a: None },     // blue
    Color { r: 135, g: 206, b: 235, a: None }, // sky blue
    Color { r: 0, g: 255, b: 0, a: None },     // green
    Color { r: 27, g: 142, b: 45, a: None },   // rich green
    Color { r: 255, g: 255, b: 0, a: None },   // yellow
    Color { r: 255, g: 215, b: 0, a: None },   // orange
    Color { r: 255, g: 36, b: 0, a: None },    // scarlet
    Color { r: 255, g: 0, b: 0, a: None },     // red
    Color { r: 139, g: 0, b: 0, a: None },     // dark red
];

/// Breakpoints matching `DEFAULT_COLORS`, in degrees Celsius.
const DEFAULT_TEMPERATURES: [f64; 12] = [
    -23.0, -18.0, -12.0, -7.0, -1.0, 4.0, 10.0, 16.0, 21.0, 27.0, 32.0, 38.0,
];

/// Maps a temperature reading to a blended palette color.
#[derive(Debug, Clone)]
pub struct TempColorMap {
    map: RangeMap,
}

impl TempColorMap {
    /// Map over the default 12-entry table.
    pub fn new() -> Self {
        Self {
            map: RangeMap::from_table(DEFAULT_COLORS, DEFAULT_TEMPERATURES),
        }
    }

    /// Map over a caller-supplied table; inputs go through the usual
    /// conversion pipeline.
    pub fn with_table(colors: &[ColorInput], temperatures: Vec<f64>) -> Result<Self> {
        Ok(Self {
            map: RangeMap::new(colors, temperatures)?,
        })
    }

    /// Color for `temperature`, optionally forcing the result's opacity.
    pub fn color_for(&self, temperature: f64, opacity: Option<f64>) -> Result<Color> {
        self.map.resolve(temperature, opacity)
    }

    pub fn map(&self) -> &RangeMap {
        &self.map
    }
}

impl Default for TempColorMap {
    fn default() -> Self {
        Self::new()
    }
}
