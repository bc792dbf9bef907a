//! Format detection and conversion into the canonical [`Color`].
//!
//! Three textual/array shapes are accepted next to the structured form:
//! tolerant `rgb`/`rgba` strings, `#`-prefixed hex strings, and numeric
//! arrays. The individual converters are strict and fail fast; the
//! [`to_color`] dispatcher is deliberately lenient and resolves text that
//! matches no shape to opaque black.

use band_core::{ColorError, Result};

use crate::channel;
use crate::model::Color;

/// Structured input shape: raw numeric channels as supplied by the caller,
/// not yet range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

/// One element of the array input shape: a number or a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayItem {
    Num(f64),
    Text(String),
}

impl From<f64> for ArrayItem {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for ArrayItem {
    fn from(n: i32) -> Self {
        Self::Num(f64::from(n))
    }
}

impl From<&str> for ArrayItem {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Closed set of accepted input shapes, decided once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Structured(Rgb),
    StringForm(String),
    HexForm(String),
    ArrayForm(Vec<ArrayItem>),
}

impl From<&str> for ColorInput {
    /// Classify raw text by detector priority: the rgb grammar is probed
    /// before the hex form. Text matching neither detector is carried as
    /// `StringForm` and resolves to black in [`to_color`].
    fn from(s: &str) -> Self {
        if is_hex_string(s) && !is_color_string(s) {
            Self::HexForm(s.to_string())
        } else {
            Self::StringForm(s.to_string())
        }
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        Self::Structured(rgb)
    }
}

impl From<Vec<ArrayItem>> for ColorInput {
    fn from(items: Vec<ArrayItem>) -> Self {
        Self::ArrayForm(items)
    }
}

impl From<[f64; 3]> for ColorInput {
    fn from(values: [f64; 3]) -> Self {
        Self::ArrayForm(values.into_iter().map(ArrayItem::Num).collect())
    }
}

impl From<[f64; 4]> for ColorInput {
    fn from(values: [f64; 4]) -> Self {
        Self::ArrayForm(values.into_iter().map(ArrayItem::Num).collect())
    }
}

/// Scan the tolerant rgb/rgba grammar: optional `rgb`/`rgba` prefix,
/// optional parens, three 0-255 digit groups separated by any non-digit
/// run, optional fourth numeric-or-decimal alpha group.
///
/// Returns the channels and the raw alpha, or `None` when the text does not
/// match the grammar. Alpha range checking is left to the converter.
fn scan_color_string(value: &str) -> Option<([u8; 3], Option<f64>)> {
    let lower = value.trim().to_ascii_lowercase();
    let rest = lower
        .strip_prefix("rgba")
        .or_else(|| lower.strip_prefix("rgb"))
        .unwrap_or(&lower);

    // Any letter past the prefix disqualifies the string outright.
    if rest.contains(|c: char| c.is_alphabetic()) {
        return None;
    }

    // Digit groups, keeping '.' attached so decimal alphas stay whole.
    let groups: Vec<&str> = rest
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .filter(|g| !g.is_empty())
        .collect();

    let (channels, alpha_group) = match groups.len() {
        3 => (&groups[..3], None),
        4 => (&groups[..3], Some(groups[3])),
        _ => return None,
    };

    let mut rgb = [0u8; 3];
    for (slot, group) in rgb.iter_mut().zip(channels) {
        if group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let v: u16 = group.parse().ok()?;
        if v > 255 {
            return None;
        }
        *slot = v as u8;
    }

    let alpha = match alpha_group {
        None => None,
        Some(group) => Some(parse_alpha_group(group)?),
    };

    Some((rgb, alpha))
}

/// Alpha groups come in two spellings: a decimal like `0.4`, or a bare
/// digit run. A bare run whose integer reading exceeds 1 reconstructs the
/// fraction the author dropped the leading `0.` from, so `4` means 0.4 and
/// `45` means 0.45.
fn parse_alpha_group(group: &str) -> Option<f64> {
    if group.contains('.') {
        return group.parse().ok();
    }
    let raw: u32 = group.parse().ok()?;
    if raw <= 1 {
        Some(f64::from(raw))
    } else {
        Some(f64::from(raw) / 10f64.powi(group.len() as i32))
    }
}

/// True iff `value` matches the tolerant rgb/rgba grammar. Out-of-range
/// channel digits are rejected here, not in the converter.
pub fn is_color_string(value: &str) -> bool {
    scan_color_string(value).is_some()
}

/// True iff `value` is `#` followed by exactly 6 or 8 hex digits.
pub fn is_hex_string(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Convert a tolerant rgb/rgba string.
///
/// Fails with `Validation` when the grammar rejects the input and
/// `AlphaRange` when the alpha group is out of bounds.
pub fn string_to_color(value: &str) -> Result<Color> {
    let ([r, g, b], alpha) = scan_color_string(value).ok_or_else(|| {
        ColorError::Validation(format!("not a valid rgb color string: {value}"))
    })?;

    let color = Color::new(r, g, b);
    match alpha {
        Some(a) => color.with_alpha(a),
        None => Ok(color),
    }
}

/// Convert a `#rrggbb` / `#rrggbbaa` string. The byte groups go through the
/// channel codec; a fourth byte becomes `byte / 255` alpha, re-checked
/// against `[0, 1]` even though the grammar keeps it in range.
pub fn hex_to_color(value: &str) -> Result<Color> {
    if !is_hex_string(value) {
        return Err(ColorError::Validation(format!(
            "not a valid hex color string: {value}"
        )));
    }

    let digits = &value[1..];
    let pair = |i: usize| {
        channel::from_hex_pair(&digits[2 * i..2 * i + 2]).ok_or_else(|| {
            ColorError::Validation(format!("not a valid hex color string: {value}"))
        })
    };

    let color = Color::new(pair(0)?, pair(1)?, pair(2)?);
    if digits.len() == 8 {
        color.with_alpha(f64::from(pair(3)?) / 255.0)
    } else {
        Ok(color)
    }
}

/// Convert a 3- or 4-element array of numbers / numeric strings. Index 3,
/// when present, is the alpha.
pub fn array_to_color(values: &[ArrayItem]) -> Result<Color> {
    if !matches!(values.len(), 3 | 4) {
        return Err(ColorError::Validation(format!(
            "array length must be 3 or 4, got {}",
            values.len()
        )));
    }

    let mut nums = Vec::with_capacity(values.len());
    for item in values {
        let n = match item {
            ArrayItem::Num(n) => *n,
            ArrayItem::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ColorError::Validation(format!("invalid value: {s}")))?,
        };
        nums.push(n);
    }

    let color = Color::new(
        int_channel(nums[0])?,
        int_channel(nums[1])?,
        int_channel(nums[2])?,
    );
    match nums.get(3) {
        Some(&a) => color.with_alpha(a),
        None => Ok(color),
    }
}

/// Convert the structured shape, range-checking every supplied channel.
pub fn structured_to_color(rgb: &Rgb) -> Result<Color> {
    let color = Color::new(
        int_channel(rgb.r)?,
        int_channel(rgb.g)?,
        int_channel(rgb.b)?,
    );
    match rgb.a {
        Some(a) => color.with_alpha(a),
        None => Ok(color),
    }
}

/// A raw channel must be an integer within `0..=255`.
fn int_channel(value: f64) -> Result<u8> {
    if !(0.0..=255.0).contains(&value) {
        return Err(ColorError::RgbRange(value));
    }
    if value.fract() != 0.0 {
        return Err(ColorError::Validation(format!(
            "channel value must be an integer: {value}"
        )));
    }
    Ok(value as u8)
}

/// Lenient dispatcher over every accepted shape.
///
/// The individual converters stay strict; only text matching neither string
/// detector is swallowed into opaque black instead of failing.
pub fn to_color(input: &ColorInput) -> Result<Color> {
    match input {
        ColorInput::Structured(rgb) => structured_to_color(rgb),
        ColorInput::StringForm(s) => {
            if is_color_string(s) {
                string_to_color(s)
            } else if is_hex_string(s) {
                hex_to_color(s)
            } else {
                Ok(Color::BLACK)
            }
        }
        ColorInput::HexForm(s) => {
            if is_hex_string(s) {
                hex_to_color(s)
            } else {
                Ok(Color::BLACK)
            }
        }
        ColorInput::ArrayForm(items) => array_to_color(items),
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    /// Strict parse of the two textual shapes, in detector priority order.
    fn from_str(s: &str) -> Result<Self> {
        if is_color_string(s) {
            string_to_color(s)
        } else if is_hex_string(s) {
            hex_to_color(s)
        } else {
            Err(ColorError::Validation(format!(
                "not a valid color string: {s}"
            )))
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}
