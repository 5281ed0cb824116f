//! CLI argument parsing and conversion into library types.

pub use crate::cli_args::*;

use crate::collection::Collection;
use crate::color::{ColorParseError, Hsb, parse_color};
use crate::config::{CurveOverrides, SettingsOverrides};
use crate::curves::CurveType;
use crate::interpolation::ColorSpace;
use crate::reference::ColorConfiguration;

impl From<CurveTypeArg> for CurveType {
    fn from(arg: CurveTypeArg) -> Self {
        match arg {
            CurveTypeArg::Linear => CurveType::Linear,
            CurveTypeArg::Smoothstep => CurveType::Smoothstep,
            CurveTypeArg::Smootherstep => CurveType::Smootherstep,
            CurveTypeArg::SmoothStart => CurveType::SmoothStart,
            CurveTypeArg::SmoothEnd => CurveType::SmoothEnd,
            CurveTypeArg::Sigmoid => CurveType::Sigmoid,
        }
    }
}

impl From<ColorSpaceArg> for ColorSpace {
    fn from(arg: ColorSpaceArg) -> Self {
        match arg {
            ColorSpaceArg::Oklab => ColorSpace::Oklab,
            ColorSpaceArg::Oklch => ColorSpace::Oklch,
            ColorSpaceArg::Srgb => ColorSpace::Srgb,
            ColorSpaceArg::SrgbLinear => ColorSpace::SrgbLinear,
            ColorSpaceArg::Lab => ColorSpace::Lab,
            ColorSpaceArg::Lch => ColorSpace::Lch,
            ColorSpaceArg::Hsl => ColorSpace::Hsl,
            ColorSpaceArg::Hsv => ColorSpace::Hsv,
        }
    }
}

impl Cli {
    /// Flags that were actually given, as the top settings layer.
    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            step_count: self.step_count.map(usize::from),
            grey_scale: self.grey_scale.then_some(true),
            color_space: self.color_space.map(Into::into),
            curve: CurveOverrides {
                curve_type: self.mix_curve.map(Into::into),
                strength: self.mix_strength,
            },
        }
    }

    /// Rows described by `--color`, `--dark`, `--light` and `--no-hue-sync`.
    ///
    /// Without any `--color` the collection holds the single default row,
    /// still subject to the endpoint and sync flags. With hue sync on, the
    /// endpoint overrides take the row's base hue.
    pub fn collection(&self) -> Result<Collection, ColorParseError> {
        let dark = self.dark.as_deref().map(parse_color).transpose()?;
        let light = self.light.as_deref().map(parse_color).transpose()?;

        let bases = if self.colors.is_empty() {
            vec![None]
        } else {
            self.colors
                .iter()
                .map(|s| parse_color(s).map(Some))
                .collect::<Result<Vec<_>, _>>()?
        };

        let rows = bases
            .into_iter()
            .map(|base| {
                let mut row = base
                    .map(ColorConfiguration::from_base)
                    .unwrap_or_default();
                let hue_sync = !self.no_hue_sync;
                let base_hue = row.base.hue();
                let endpoint = |color: Hsb| {
                    if hue_sync {
                        color.with_hue(base_hue)
                    } else {
                        color
                    }
                };
                if let Some(dark) = dark {
                    row.dark = endpoint(dark);
                }
                if let Some(light) = light {
                    row.light = endpoint(light);
                }
                row.with_hue_sync(hue_sync)
            })
            .collect();

        Ok(Collection::from_rows(rows))
    }
}
