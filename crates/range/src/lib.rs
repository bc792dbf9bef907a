//! Sorted breakpoint → color mapping with ratio interpolation between
//! bracketing anchors.

use band_color::{to_color, Color, ColorInput};
use band_core::{ColorError, Result};

/// Immutable mapping from ascending scalar breakpoints to colors.
///
/// Built once, then only queried; queries never mutate the map, so a
/// `RangeMap` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct RangeMap {
    colors: Vec<Color>,
    ranges: Vec<f64>,
}

impl RangeMap {
    /// Build a map from parallel arrays of raw color inputs and breakpoints.
    ///
    /// The breakpoints are sorted ascending while the colors keep their
    /// input order, so callers must supply both arrays already sorted
    /// consistently by breakpoint or the positional correspondence breaks.
    /// [`RangeMap::paired`] sorts the pairs together instead.
    pub fn new(colors: &[ColorInput], ranges: Vec<f64>) -> Result<Self> {
        let colors = colors.iter().map(to_color).collect::<Result<Vec<_>>>()?;
        Self::from_colors(colors, ranges)
    }

    /// Build a map sorting each (breakpoint, color) pair together, so the
    /// input arrays may arrive in any consistent order.
    pub fn paired(colors: &[ColorInput], ranges: Vec<f64>) -> Result<Self> {
        let colors = colors.iter().map(to_color).collect::<Result<Vec<_>>>()?;
        Self::paired_colors(colors, ranges)
    }

    /// [`RangeMap::new`] over already-canonical colors.
    pub fn from_colors(colors: Vec<Color>, mut ranges: Vec<f64>) -> Result<Self> {
        check_lengths(colors.len(), ranges.len())?;
        ranges.sort_by(f64::total_cmp);
        Ok(Self { colors, ranges })
    }

    /// [`RangeMap::paired`] over already-canonical colors.
    pub fn paired_colors(colors: Vec<Color>, ranges: Vec<f64>) -> Result<Self> {
        check_lengths(colors.len(), ranges.len())?;
        let mut pairs: Vec<(f64, Color)> = ranges.into_iter().zip(colors).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (ranges, colors) = pairs.into_iter().unzip();
        Ok(Self { colors, ranges })
    }

    /// Build from compile-time parallel arrays; the matching lengths are
    /// enforced by the type. Panics if `N` is zero.
    pub fn from_table<const N: usize>(colors: [Color; N], ranges: [f64; N]) -> Self {
        assert!(N > 0, "a range map needs at least one entry");
        let mut ranges = ranges.to_vec();
        ranges.sort_by(f64::total_cmp);
        Self {
            colors: colors.to_vec(),
            ranges,
        }
    }

    /// Breakpoints, ascending.
    pub fn ranges(&self) -> &[f64] {
        &self.ranges
    }

    /// Colors, in input order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Resolve `query` to an interpolated color.
    ///
    /// Queries at or beyond the ends clamp to the first/last color.
    /// Interior queries scan every adjacent breakpoint pair in ascending
    /// order: an exact hit takes the anchor color, a strict interior hit
    /// blends the bracketing anchors by `(query - lower) / (upper - lower)`.
    /// The scan never exits early, so with duplicate breakpoints the last
    /// structural match wins.
    ///
    /// A non-zero `alpha` override replaces the alpha of whatever color is
    /// returned; an override of `0.0` is ignored.
    pub fn resolve(&self, query: f64, alpha: Option<f64>) -> Result<Color> {
        let last = self.ranges.len() - 1;
        if query <= self.ranges[0] {
            return override_alpha(self.colors[0], alpha);
        }
        if query >= self.ranges[last] {
            return override_alpha(self.colors[last], alpha);
        }

        let mut color = override_alpha(self.colors[0], alpha)?;
        for i in 0..last {
            let (lower, upper) = (self.ranges[i], self.ranges[i + 1]);
            if query > lower && query < upper {
                let ratio = (query - lower) / (upper - lower);
                color = override_alpha(self.colors[i].blend(self.colors[i + 1], ratio), alpha)?;
            } else if query == lower {
                color = override_alpha(self.colors[i], alpha)?;
            }
        }
        Ok(color)
    }
}

fn check_lengths(colors: usize, ranges: usize) -> Result<()> {
    if colors != ranges || ranges == 0 {
        return Err(ColorError::Validation(format!(
            "colors and ranges must be parallel non-empty arrays, got {colors} colors and {ranges} ranges"
        )));
    }
    Ok(())
}

/// Non-zero overrides replace the color's alpha; zero or absent overrides
/// leave it untouched.
fn override_alpha(color: Color, alpha: Option<f64>) -> Result<Color> {
    match alpha {
        Some(a) if a != 0.0 => color.with_alpha(a),
        _ => Ok(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_map() -> RangeMap {
        let colors: Vec<ColorInput> = [
            [255.0, 0.0, 255.0],
            [217.0, 130.0, 181.0],
            [128.0, 0.0, 128.0],
            [0.0, 0.0, 255.0],
            [135.0, 206.0, 235.0],
            [0.0, 255.0, 0.0],
            [27.0, 142.0, 45.0],
            [255.0, 255.0, 0.0],
            [255.0, 215.0, 0.0],
            [255.0, 36.0, 0.0],
            [255.0, 0.0, 0.0],
            [139.0, 0.0, 0.0],
        ]
        .into_iter()
        .map(ColorInput::from)
        .collect();
        let ranges = vec![
            -23.0, -18.0, -12.0, -7.0, -1.0, 4.0, 10.0, 16.0, 21.0, 27.0, 32.0, 38.0,
        ];
        RangeMap::new(&colors, ranges).unwrap()
    }

    #[test]
    fn construction_sorts_ranges_ascending() {
        let ranges = vec![
            -1.0, 4.0, 10.0, 16.0, 21.0, 27.0, 32.0, 38.0, -23.0, -18.0, -12.0, -7.0,
        ];
        let colors: Vec<ColorInput> = (0..12).map(|_| ColorInput::from("#000000")).collect();
        let map = RangeMap::new(&colors, ranges).unwrap();
        assert_eq!(map.ranges()[0], -23.0);
        assert_eq!(*map.ranges().last().unwrap(), 38.0);
    }

    #[test]
    fn construction_rejects_length_mismatch() {
        let colors = vec![ColorInput::from("#000000")];
        assert!(RangeMap::new(&colors, vec![0.0, 1.0]).is_err());
        assert!(RangeMap::new(&[], vec![]).is_err());
    }

    #[test]
    fn construction_propagates_conversion_errors() {
        let colors = vec![ColorInput::from([300.0, 0.0, 0.0])];
        assert_eq!(
            RangeMap::new(&colors, vec![0.0]).unwrap_err(),
            ColorError::RgbRange(300.0)
        );
    }

    #[test]
    fn interior_query_blends_bracketing_anchors() {
        let map = reference_map();
        assert_eq!(map.resolve(13.0, None).unwrap(), Color::new(141, 199, 23));
    }

    #[test]
    fn alpha_override_replaces_result_alpha() {
        let map = reference_map();
        let color = map.resolve(13.0, Some(0.4)).unwrap();
        assert_eq!((color.r, color.g, color.b), (141, 199, 23));
        assert_eq!(color.a, Some(0.4));
    }

    #[test]
    fn zero_alpha_override_is_ignored() {
        let map = reference_map();
        assert_eq!(map.resolve(13.0, Some(0.0)).unwrap().a, None);
    }

    #[test]
    fn out_of_range_alpha_override_fails() {
        let map = reference_map();
        assert_eq!(
            map.resolve(13.0, Some(1.5)).unwrap_err(),
            ColorError::AlphaRange(1.5)
        );
    }

    #[test]
    fn queries_clamp_to_the_ends() {
        let map = reference_map();
        assert_eq!(map.resolve(-23.0, None).unwrap(), Color::new(255, 0, 255));
        assert_eq!(map.resolve(-100.0, None).unwrap(), Color::new(255, 0, 255));
        assert_eq!(map.resolve(38.0, None).unwrap(), Color::new(139, 0, 0));
        assert_eq!(map.resolve(100.0, Some(0.4)).unwrap().a, Some(0.4));
    }

    #[test]
    fn exact_breakpoint_returns_its_anchor() {
        let map = reference_map();
        assert_eq!(map.resolve(10.0, None).unwrap(), Color::new(27, 142, 45));
    }

    #[test]
    fn duplicate_breakpoints_resolve_last_match() {
        let colors: Vec<ColorInput> = [
            [10.0, 0.0, 0.0],
            [20.0, 0.0, 0.0],
            [30.0, 0.0, 0.0],
            [40.0, 0.0, 0.0],
        ]
        .into_iter()
        .map(ColorInput::from)
        .collect();
        let map = RangeMap::new(&colors, vec![0.0, 5.0, 5.0, 10.0]).unwrap();
        // both pairs starting at 5 match exactly; the later one wins
        assert_eq!(map.resolve(5.0, None).unwrap(), Color::new(30, 0, 0));
    }

    #[test]
    fn paired_constructor_reorders_colors_with_ranges() {
        let anchors = [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0]];

        let colors: Vec<ColorInput> = anchors.into_iter().map(ColorInput::from).collect();
        let map = RangeMap::paired(&colors, vec![30.0, 10.0, 20.0]).unwrap();
        assert_eq!(map.ranges(), &[10.0, 20.0, 30.0]);
        assert_eq!(map.colors()[0], Color::new(2, 0, 0));
        assert_eq!(map.colors()[2], Color::new(1, 0, 0));

        // the faithful constructor leaves the colors where they were
        let colors: Vec<ColorInput> = anchors.into_iter().map(ColorInput::from).collect();
        let map = RangeMap::new(&colors, vec![30.0, 10.0, 20.0]).unwrap();
        assert_eq!(map.ranges(), &[10.0, 20.0, 30.0]);
        assert_eq!(map.colors()[0], Color::new(1, 0, 0));
    }
}
