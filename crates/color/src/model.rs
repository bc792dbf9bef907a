use std::fmt;

use band_core::{ColorError, Result};

use crate::channel;

/// Canonical color record: integer RGB channels plus an optional alpha.
///
/// Constructors validate instead of clamping; once built a `Color` is
/// immutable and every derived operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Straight alpha in `[0.0, 1.0]`; `None` renders without an alpha
    /// component.
    pub a: Option<f64>,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: None,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Return a copy with the alpha channel replaced by `alpha`.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColorError::AlphaRange(alpha));
        }
        Ok(Self {
            a: Some(alpha),
            ..self
        })
    }

    /// Ratio-blend two colors; `ratio` expresses closeness to `self`, so
    /// `1.0` yields `self` and `0.0` yields `other`.
    ///
    /// The ratio is clamped to `[0, 1]` here, the only layer that clamps.
    /// Each channel is blended then rounded to the nearest integer. Alpha
    /// does not participate: the result carries no alpha regardless of the
    /// operands.
    #[must_use]
    pub fn blend(self, other: Color, ratio: f64) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| channel::blend(a, b, ratio).round() as u8;

        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: None,
        }
    }

    /// Render as `#rrggbb`, plus an alpha byte (`round(a * 255)`) when the
    /// alpha channel is set.
    pub fn to_hex_string(&self) -> String {
        let mut hex = format!(
            "#{}{}{}",
            channel::to_hex(self.r),
            channel::to_hex(self.g),
            channel::to_hex(self.b)
        );
        if let Some(a) = self.a {
            hex.push_str(&channel::to_hex((a * 255.0).round() as u8));
        }
        hex
    }
}

impl fmt::Display for Color {
    /// `rgb(r, g, b)`, or `rgb(r, g, b, a)` with the alpha shown as its raw
    /// numeric value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "rgb({}, {}, {}, {})", self.r, self.g, self.b, a),
            None => write!(f, "rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_rounds_to_nearest() {
        let a = Color::new(255, 0, 255);
        let b = Color::new(217, 0, 255);
        assert_eq!(a.blend(b, 0.5), Color::new(236, 0, 255));
    }

    #[test]
    fn blend_boundary_ratios() {
        let a = Color::new(10, 20, 30);
        let b = Color::new(200, 100, 50);
        assert_eq!(a.blend(b, 1.0), a);
        assert_eq!(a.blend(b, 0.0), b);
        assert_eq!(a.blend(b, 7.5), a); // clamped to 1
        assert_eq!(a.blend(b, -2.0), b); // clamped to 0
    }

    #[test]
    fn self_blend_is_identity() {
        let c = Color::new(141, 199, 23);
        for ratio in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(c.blend(c, ratio), c);
        }
    }

    #[test]
    fn blend_drops_alpha() {
        let a = Color::new(1, 2, 3).with_alpha(0.5).unwrap();
        assert_eq!(a.blend(a, 0.5).a, None);
    }

    #[test]
    fn alpha_replacement_is_validated() {
        assert_eq!(
            Color::new(0, 0, 0).with_alpha(1.5),
            Err(ColorError::AlphaRange(1.5))
        );
        assert_eq!(Color::new(0, 0, 0).with_alpha(0.0).unwrap().a, Some(0.0));
    }

    #[test]
    fn display_renders_raw_alpha() {
        let c = Color::new(141, 199, 23);
        assert_eq!(c.to_string(), "rgb(141, 199, 23)");
        assert_eq!(
            c.with_alpha(0.4).unwrap().to_string(),
            "rgb(141, 199, 23, 0.4)"
        );
    }

    #[test]
    fn hex_rendering_appends_alpha_byte() {
        assert_eq!(Color::new(171, 205, 239).to_hex_string(), "#abcdef");
        assert_eq!(
            Color::new(255, 0, 0).with_alpha(0.5).unwrap().to_hex_string(),
            "#ff000080"
        );
    }
}
