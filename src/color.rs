//! HSB color values, parsing and display conversions.

use std::fmt;
use std::str::FromStr;

use csscolorparser::Color as CssColor;
use float_cmp::approx_eq;
use palette::{FromColor, Hsl, Hsv, Srgb};

/// Error returned when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorParseError {
    /// `hsb(...)` with the wrong number of channels
    ChannelCount(String),
    /// A channel that is not a number
    InvalidChannel(String),
    /// Anything csscolorparser rejected
    Css(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelCount(s) => write!(f, "expected three channels in '{}'", s),
            Self::InvalidChannel(s) => write!(f, "invalid channel value '{}'", s),
            Self::Css(s) => write!(f, "invalid color: {}", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// A color in the hue/saturation/brightness model.
///
/// Hue is in degrees and wraps at 360. Saturation and brightness are
/// percentages in 0-100. Values are normalised on construction, so every
/// `Hsb` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    hue: f32,
    saturation: f32,
    brightness: f32,
}

impl Hsb {
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: clamp_percent(saturation),
            brightness: clamp_percent(brightness),
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Same saturation and brightness, different hue.
    pub fn with_hue(self, hue: f32) -> Self {
        Self::new(hue, self.saturation, self.brightness)
    }

    pub fn with_saturation(self, saturation: f32) -> Self {
        Self::new(self.hue, saturation, self.brightness)
    }

    pub fn with_brightness(self, brightness: f32) -> Self {
        Self::new(self.hue, self.saturation, brightness)
    }

    /// Channel-wise comparison with a small tolerance.
    ///
    /// Hue is compared on the circle, so 359.9999 and 0 are equal.
    pub fn approx_eq(&self, other: &Hsb) -> bool {
        let hue_diff = (self.hue - other.hue).abs();
        let hue_diff = hue_diff.min(360.0 - hue_diff);
        approx_eq!(f32, hue_diff, 0.0, epsilon = 1e-3)
            && approx_eq!(f32, self.saturation, other.saturation, epsilon = 1e-3)
            && approx_eq!(f32, self.brightness, other.brightness, epsilon = 1e-3)
    }

    pub fn to_hsv(self) -> Hsv {
        Hsv::new(self.hue, self.saturation / 100.0, self.brightness / 100.0)
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::new(
            hsv.hue.into_positive_degrees(),
            hsv.saturation * 100.0,
            hsv.value * 100.0,
        )
    }

    pub fn to_srgb(self) -> Srgb<f32> {
        Srgb::from_color(self.to_hsv())
    }

    /// Convert an sRGB color, clamping out-of-gamut channels first.
    pub fn from_srgb(color: Srgb<f32>) -> Self {
        let clamped = Srgb::new(
            color.red.clamp(0.0, 1.0),
            color.green.clamp(0.0, 1.0),
            color.blue.clamp(0.0, 1.0),
        );
        Self::from_hsv(Hsv::from_color(clamped))
    }

    pub fn to_rgb8(self) -> Srgb<u8> {
        srgb_to_u8(self.to_srgb())
    }

    /// Hex form with `#` prefix, e.g. `#ff0000`.
    pub fn to_hex(self) -> String {
        let rgb = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }

    /// CSS `hsl()` form of the same color.
    pub fn to_css(self) -> String {
        let hsl: Hsl = Hsl::from_color(self.to_srgb());
        format!(
            "hsl({}, {}%, {}%)",
            format_channel(self.hue),
            format_channel(hsl.saturation * 100.0),
            format_channel(hsl.lightness * 100.0)
        )
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsb({}, {}%, {}%)",
            format_channel(self.hue),
            format_channel(self.saturation),
            format_channel(self.brightness)
        )
    }
}

impl FromStr for Hsb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse a color string into an `Hsb`.
///
/// Accepts `hsb(h, s%, b%)` (also spelled `hsv`) plus everything
/// csscolorparser understands: hex, `rgb()`, `hsl()`, `oklch()`, named colors.
pub fn parse_color(input: &str) -> Result<Hsb, ColorParseError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some(args) = lower
        .strip_prefix("hsb(")
        .or_else(|| lower.strip_prefix("hsv("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_hsb_args(args);
    }

    let css: CssColor = trimmed
        .parse()
        .map_err(|e| ColorParseError::Css(format!("'{}': {}", input, e)))?;
    let [r, g, b, _a] = css.to_rgba8();
    let rgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
    Ok(Hsb::from_srgb(rgb))
}

fn parse_hsb_args(args: &str) -> Result<Hsb, ColorParseError> {
    let channels: Vec<&str> = args
        .split([',', ' '])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let [h, s, b] = channels.as_slice() else {
        return Err(ColorParseError::ChannelCount(args.to_string()));
    };

    let number = |raw: &str| -> Result<f32, ColorParseError> {
        raw.trim_end_matches('%')
            .trim_end_matches("deg")
            .parse::<f32>()
            .map_err(|_| ColorParseError::InvalidChannel(raw.to_string()))
    };

    Ok(Hsb::new(number(h)?, number(s)?, number(b)?))
}

/// RGB used for drawing a swatch.
///
/// With `grey_scale` set, applies the CSS `grayscale(1)` filter matrix. The
/// stored color is never touched.
pub fn display_rgb(color: Hsb, grey_scale: bool) -> Srgb<u8> {
    let rgb = color.to_rgb8();
    if grey_scale { grayscale(rgb) } else { rgb }
}

/// Full-strength CSS grayscale filter.
pub fn grayscale(rgb: Srgb<u8>) -> Srgb<u8> {
    let luma = 0.2126 * f32::from(rgb.red)
        + 0.7152 * f32::from(rgb.green)
        + 0.0722 * f32::from(rgb.blue);
    let v = luma.round().clamp(0.0, 255.0) as u8;
    Srgb::new(v, v, v)
}

/// Convert sRGB f32 to u8 with clamping for out-of-gamut colors.
pub fn srgb_to_u8(color: Srgb<f32>) -> Srgb<u8> {
    Srgb::new(
        (color.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Two decimals at most, no trailing zeros.
fn format_channel(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i32)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hue_wraps() {
        assert_relative_eq!(Hsb::new(370.0, 50.0, 50.0).hue(), 10.0);
        assert_relative_eq!(Hsb::new(-90.0, 50.0, 50.0).hue(), 270.0);
        assert_relative_eq!(Hsb::new(360.0, 50.0, 50.0).hue(), 0.0);
    }

    #[test]
    fn percentages_clamp() {
        let c = Hsb::new(0.0, 150.0, -5.0);
        assert_relative_eq!(c.saturation(), 100.0);
        assert_relative_eq!(c.brightness(), 0.0);
    }

    #[test]
    fn display_uses_hsb_notation() {
        assert_eq!(Hsb::new(200.0, 80.0, 90.0).to_string(), "hsb(200, 80%, 90%)");
        assert_eq!(Hsb::new(12.5, 33.333, 5.0).to_string(), "hsb(12.5, 33.33%, 5%)");
    }

    #[test]
    fn primary_red_hex() {
        assert_eq!(Hsb::new(0.0, 100.0, 100.0).to_hex(), "#ff0000");
        assert_eq!(Hsb::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Hsb::new(0.0, 0.0, 100.0).to_hex(), "#ffffff");
    }

    #[test]
    fn css_form_is_hsl() {
        assert_eq!(Hsb::new(0.0, 100.0, 100.0).to_css(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn parses_hsb_notation() {
        let c = parse_color("hsb(200, 80%, 90%)").unwrap();
        assert!(c.approx_eq(&Hsb::new(200.0, 80.0, 90.0)));

        let c = parse_color("HSV(120deg 50% 25%)").unwrap();
        assert!(c.approx_eq(&Hsb::new(120.0, 50.0, 25.0)));
    }

    #[test]
    fn parses_css_colors() {
        let c = parse_color("#ff0000").unwrap();
        assert!(c.approx_eq(&Hsb::new(0.0, 100.0, 100.0)));

        let c = parse_color("blue").unwrap();
        assert!(c.approx_eq(&Hsb::new(240.0, 100.0, 100.0)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_color("hsb(1, 2)"),
            Err(ColorParseError::ChannelCount(_))
        ));
        assert!(matches!(
            parse_color("hsb(a, 2%, 3%)"),
            Err(ColorParseError::InvalidChannel(_))
        ));
        assert!(matches!(parse_color("nope"), Err(ColorParseError::Css(_))));
    }

    #[test]
    fn grayscale_equalises_channels() {
        let grey = display_rgb(Hsb::new(0.0, 100.0, 100.0), true);
        assert_eq!(grey.red, grey.green);
        assert_eq!(grey.green, grey.blue);
        assert_eq!(grey.red, 54);
    }

    #[test]
    fn approx_eq_handles_hue_seam() {
        let a = Hsb::new(359.9999, 50.0, 50.0);
        let b = Hsb::new(0.0, 50.0, 50.0);
        assert!(a.approx_eq(&b));
    }
}
