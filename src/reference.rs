//! Reference colors of a palette row and the hue-sync update rule.

use serde::{Deserialize, Serialize};

use crate::color::Hsb;

/// One of the three reference colors that anchor a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reference {
    Dark,
    Base,
    Light,
}

impl Reference {
    /// Ramp order: dark end first.
    pub const ALL: [Reference; 3] = [Self::Dark, Self::Base, Self::Light];

    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Base,
            Self::Base => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Base => Self::Dark,
            Self::Light => Self::Base,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Base => "Base",
            Self::Light => "Light",
        }
    }
}

/// A palette row: base color, its dark and light endpoints, and the
/// hue-sync flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConfiguration {
    pub light: Hsb,
    pub base: Hsb,
    pub dark: Hsb,
    pub is_hue_sync: bool,
}

impl Default for ColorConfiguration {
    fn default() -> Self {
        Self {
            light: Hsb::new(0.0, 50.0, 100.0),
            base: Hsb::new(0.0, 100.0, 100.0),
            dark: Hsb::new(0.0, 50.0, 5.0),
            is_hue_sync: true,
        }
    }
}

impl ColorConfiguration {
    pub fn new(base: Hsb, dark: Hsb, light: Hsb, is_hue_sync: bool) -> Self {
        Self {
            light,
            base,
            dark,
            is_hue_sync,
        }
    }

    /// Default row rotated to `base`'s hue, with `base` itself as the base color.
    pub fn from_base(base: Hsb) -> Self {
        let defaults = Self::default();
        Self {
            light: defaults.light.with_hue(base.hue()),
            base,
            dark: defaults.dark.with_hue(base.hue()),
            is_hue_sync: defaults.is_hue_sync,
        }
    }

    pub fn get(&self, which: Reference) -> Hsb {
        match which {
            Reference::Dark => self.dark,
            Reference::Base => self.base,
            Reference::Light => self.light,
        }
    }

    /// Copy with one reference replaced and nothing else touched.
    pub fn with_reference(mut self, which: Reference, color: Hsb) -> Self {
        match which {
            Reference::Dark => self.dark = color,
            Reference::Base => self.base = color,
            Reference::Light => self.light = color,
        }
        self
    }

    pub fn with_hue_sync(mut self, is_hue_sync: bool) -> Self {
        self.is_hue_sync = is_hue_sync;
        self
    }
}

/// Apply an edit of one reference color.
///
/// With hue sync off only `which` changes. With hue sync on every reference
/// takes `new_color`'s hue while keeping its own saturation and brightness,
/// then `which` is set to `new_color` exactly.
pub fn update_reference(
    config: &ColorConfiguration,
    which: Reference,
    new_color: Hsb,
) -> ColorConfiguration {
    let mut next = *config;

    if config.is_hue_sync {
        let hue = new_color.hue();
        next.light = next.light.with_hue(hue);
        next.base = next.base.with_hue(hue);
        next.dark = next.dark.with_hue(hue);
    }

    next.with_reference(which, new_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cycle() {
        let mut r = Reference::Dark;
        for _ in 0..3 {
            r = r.next();
        }
        assert_eq!(r, Reference::Dark);
        assert_eq!(Reference::Dark.prev(), Reference::Light);
    }

    #[test]
    fn from_base_rotates_endpoints() {
        let row = ColorConfiguration::from_base(Hsb::new(120.0, 60.0, 70.0));
        assert_eq!(row.dark, Hsb::new(120.0, 50.0, 5.0));
        assert_eq!(row.light, Hsb::new(120.0, 50.0, 100.0));
        assert!(row.is_hue_sync);
    }
}
