//! Tint/shade ramp generation.
//!
//! A ramp for step count `n` holds `2n + 1` colors: `n` mixes of the base
//! toward the dark endpoint, the base itself, then `n` mixes toward the light
//! endpoint. With `step = floor(100 / n)` the dark contributions are
//! `100 - step * i` percent and the light contributions `step * (i + 1)`.

use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::color::Hsb;
use crate::curves::{CurveConfig, evaluate_curve};
use crate::interpolation::{ColorSpace, mix};
use crate::reference::ColorConfiguration;

pub const DEFAULT_STEP_COUNT: usize = 10;

/// Settings shared by every row of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Mixes on each side of the base color
    pub step_count: usize,
    pub color_space: ColorSpace,
    /// Remaps each mix fraction before mixing
    pub curve: CurveConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            color_space: ColorSpace::default(),
            curve: CurveConfig::default(),
        }
    }
}

impl GenerateConfig {
    pub fn with_step_count(step_count: usize) -> Self {
        Self {
            step_count,
            ..Self::default()
        }
    }
}

/// Percentage step between neighbouring mixes. Zero steps count as one.
pub fn step_size(step_count: usize) -> usize {
    100 / step_count.max(1)
}

/// Dark endpoint contribution (percent) for each shade, darkest first.
pub fn dark_weights(step_count: usize) -> Vec<usize> {
    let step = step_size(step_count);
    (0..step_count.max(1))
        .map(|index| 100usize.saturating_sub(step * index))
        .collect()
}

/// Light endpoint contribution (percent) for each tint, palest last.
pub fn light_weights(step_count: usize) -> Vec<usize> {
    let step = step_size(step_count);
    (0..step_count.max(1)).map(|index| step * (index + 1)).collect()
}

/// Generate a ramp with the default mixing settings (oklab, linear curve).
pub fn generate_palette(base: Hsb, dark: Hsb, light: Hsb, step_count: usize) -> Vec<Hsb> {
    generate_with(base, dark, light, &GenerateConfig::with_step_count(step_count))
}

/// Generate a ramp from explicit reference colors.
#[cfg_attr(debug_assertions, instrument(skip(config), fields(steps = config.step_count)))]
pub fn generate_with(base: Hsb, dark: Hsb, light: Hsb, config: &GenerateConfig) -> Vec<Hsb> {
    let step_count = config.step_count.max(1);
    let blend = |other: Hsb, percent: usize| {
        let fraction = evaluate_curve(&config.curve, percent as f32 / 100.0);
        mix(base, other, fraction, config.color_space)
    };

    let mut ramp = Vec::with_capacity(2 * step_count + 1);
    ramp.extend(dark_weights(step_count).into_iter().map(|w| blend(dark, w)));
    ramp.push(base);
    ramp.extend(light_weights(step_count).into_iter().map(|w| blend(light, w)));

    ramp
}

/// Generate the ramp for one row.
pub fn generate_row(row: &ColorConfiguration, config: &GenerateConfig) -> Vec<Hsb> {
    generate_with(row.base, row.dark, row.light, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_floor_step() {
        assert_eq!(dark_weights(2), vec![100, 50]);
        assert_eq!(light_weights(2), vec![50, 100]);
        assert_eq!(dark_weights(3), vec![100, 67, 34]);
        assert_eq!(light_weights(3), vec![33, 66, 99]);
    }

    #[test]
    fn zero_steps_behaves_like_one() {
        assert_eq!(dark_weights(0), vec![100]);
        let ramp = generate_palette(
            Hsb::new(0.0, 100.0, 100.0),
            Hsb::new(0.0, 50.0, 5.0),
            Hsb::new(0.0, 50.0, 100.0),
            0,
        );
        assert_eq!(ramp.len(), 3);
    }
}
