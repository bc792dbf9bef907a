use serde::{Deserialize, Serialize};

use band_color::Color;
use band_core::Result;
use band_range::RangeMap;

/// Root configuration structure parsed from `colorband.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Palette anchors. Any accepted textual spelling works: hex
    /// (`"#ff00ff"`) or rgb-ish strings (`"rgb(255, 0, 255)"`,
    /// `"255,0,255"`).
    pub colors: Vec<String>,
    /// Breakpoint for each anchor, positionally matched to `colors`.
    pub ranges: Vec<f64>,
    /// When `true`, anchors are re-sorted together with their breakpoints
    /// instead of relying on the caller-supplied order.
    pub sort_paired: bool,
}

impl PaletteConfig {
    /// Build the range map from the configured anchors.
    ///
    /// Color strings are parsed strictly so a config typo surfaces as an
    /// error instead of silently going black.
    pub fn build_map(&self) -> Result<RangeMap> {
        let colors = self
            .colors
            .iter()
            .map(|s| s.parse::<Color>())
            .collect::<Result<Vec<_>>>()?;

        if self.sort_paired {
            RangeMap::paired_colors(colors, self.ranges.clone())
        } else {
            RangeMap::from_colors(colors, self.ranges.clone())
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                "#ff00ff".to_string(), // magenta
                "#d982b5".to_string(), // pinky purple
                "#800080".to_string(), // purple
                "#0000ff".to_string(), // blue
                "#87ceeb".to_string(), // sky blue
                "#00ff00".to_string(), // green
                "#1b8e2d".to_string(), // rich green
                "#ffff00".to_string(), // yellow
                "#ffd700".to_string(), // orange
                "#ff2400".to_string(), // scarlet
                "#ff0000".to_string(), // red
                "#8b0000".to_string(), // dark red
            ],
            ranges: vec![
                -23.0, -18.0, -12.0, -7.0, -1.0, 4.0, 10.0, 16.0, 21.0, 27.0, 32.0, 38.0,
            ],
            sort_paired: false,
        }
    }
}
