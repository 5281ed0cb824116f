//! Session state: the row collection plus the global view settings.
//!
//! Front ends turn user input into [`SessionEvent`]s, apply them, then ask
//! for fresh [`RowView`]s. Ramps are derived on every render and never
//! stored.

use palette::Srgb;
use tracing::debug;

use crate::collection::Collection;
use crate::color::{Hsb, display_rgb};
use crate::config::Settings;
use crate::curves::CurveConfig;
use crate::generate::{GenerateConfig, generate_row};
use crate::interpolation::ColorSpace;
use crate::reference::{ColorConfiguration, Reference};

pub const MIN_STEP_COUNT: usize = 1;
pub const MAX_STEP_COUNT: usize = 10;

/// A user input, already decoded from whatever widget produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Clamped to `MIN_STEP_COUNT..=MAX_STEP_COUNT`
    StepCountChanged(usize),
    GreyScaleToggled(bool),
    AddRow,
    RemoveRow(usize),
    DuplicateRow(usize),
    HueSyncToggled {
        row: usize,
        value: bool,
    },
    ReferenceChanged {
        row: usize,
        reference: Reference,
        color: Hsb,
    },
    ColorSpaceChanged(ColorSpace),
    CurveChanged(CurveConfig),
}

#[derive(Debug, Clone)]
pub struct Session {
    collection: Collection,
    generate: GenerateConfig,
    grey_scale: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default(), Collection::default())
    }
}

impl Session {
    pub fn new(settings: &Settings, collection: Collection) -> Self {
        Self {
            collection,
            generate: GenerateConfig {
                step_count: clamp_step_count(settings.step_count),
                color_space: settings.color_space,
                curve: settings.curve.clone(),
            },
            grey_scale: settings.grey_scale,
        }
    }

    /// Apply one event. Returns `false` when it referred to a missing row.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        debug!(?event, "applying session event");
        match event {
            SessionEvent::StepCountChanged(count) => {
                self.generate.step_count = clamp_step_count(count);
                true
            }
            SessionEvent::GreyScaleToggled(value) => {
                self.grey_scale = value;
                true
            }
            SessionEvent::AddRow => {
                self.collection.add_row();
                true
            }
            SessionEvent::RemoveRow(row) => self.collection.remove_row(row),
            SessionEvent::DuplicateRow(row) => self.collection.duplicate_row(row),
            SessionEvent::HueSyncToggled { row, value } => self.collection.set_hue_sync(row, value),
            SessionEvent::ReferenceChanged {
                row,
                reference,
                color,
            } => self.collection.set_reference(row, reference, color),
            SessionEvent::ColorSpaceChanged(space) => {
                self.generate.color_space = space;
                true
            }
            SessionEvent::CurveChanged(curve) => {
                self.generate.curve = curve;
                true
            }
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn generate_config(&self) -> &GenerateConfig {
        &self.generate
    }

    pub fn step_count(&self) -> usize {
        self.generate.step_count
    }

    pub fn grey_scale(&self) -> bool {
        self.grey_scale
    }

    pub fn color_space(&self) -> ColorSpace {
        self.generate.color_space
    }

    pub fn curve(&self) -> &CurveConfig {
        &self.generate.curve
    }

    /// Settings equivalent to the current state, for saving.
    pub fn settings(&self) -> Settings {
        Settings {
            step_count: self.generate.step_count,
            grey_scale: self.grey_scale,
            color_space: self.generate.color_space,
            curve: self.generate.curve.clone(),
        }
    }

    pub fn render(&self) -> Vec<RowView> {
        (0..self.collection.len())
            .filter_map(|index| self.row_view(index))
            .collect()
    }

    pub fn row_view(&self, index: usize) -> Option<RowView> {
        let row = self.collection.get(index)?;
        Some(RowView::new(index, row, &self.generate))
    }
}

fn clamp_step_count(count: usize) -> usize {
    count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT)
}

/// A slot in a rendered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: Hsb,
    /// Set on the three editable slots
    pub reference: Option<Reference>,
}

/// Everything needed to draw one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub ramp: Vec<Hsb>,
    pub dark: Hsb,
    pub base: Hsb,
    pub light: Hsb,
    pub is_hue_sync: bool,
    pub step_count: usize,
}

impl RowView {
    pub fn new(index: usize, row: &ColorConfiguration, config: &GenerateConfig) -> Self {
        Self {
            index,
            ramp: generate_row(row, config),
            dark: row.dark,
            base: row.base,
            light: row.light,
            is_hue_sync: row.is_hue_sync,
            step_count: config.step_count.max(1),
        }
    }

    pub fn reference(&self, which: Reference) -> Hsb {
        match which {
            Reference::Dark => self.dark,
            Reference::Base => self.base,
            Reference::Light => self.light,
        }
    }

    /// Ramp position where a reference color is shown.
    pub fn slot_of(&self, which: Reference) -> usize {
        match which {
            Reference::Dark => 0,
            Reference::Base => self.step_count,
            Reference::Light => 2 * self.step_count,
        }
    }

    /// The ramp with the first, middle and last slots replaced by the
    /// reference colors they stand for.
    pub fn swatches(&self) -> Vec<Swatch> {
        self.ramp
            .iter()
            .enumerate()
            .map(|(slot, color)| {
                let reference = Reference::ALL
                    .into_iter()
                    .find(|which| self.slot_of(*which) == slot);
                match reference {
                    Some(which) => Swatch {
                        color: self.reference(which),
                        reference: Some(which),
                    },
                    None => Swatch {
                        color: *color,
                        reference: None,
                    },
                }
            })
            .collect()
    }

    /// Display RGB for every slot, honouring the grey-scale preview flag.
    pub fn display_colors(&self, grey_scale: bool) -> Vec<Srgb<u8>> {
        self.swatches()
            .iter()
            .map(|swatch| display_rgb(swatch.color, grey_scale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_is_clamped() {
        let mut session = Session::default();
        session.apply(SessionEvent::StepCountChanged(0));
        assert_eq!(session.step_count(), MIN_STEP_COUNT);
        session.apply(SessionEvent::StepCountChanged(50));
        assert_eq!(session.step_count(), MAX_STEP_COUNT);
    }

    #[test]
    fn swatches_mark_reference_slots() {
        let session = Session::default();
        let view = &session.render()[0];
        let swatches = view.swatches();
        assert_eq!(swatches.len(), 2 * view.step_count + 1);
        assert_eq!(swatches[0].reference, Some(Reference::Dark));
        assert_eq!(swatches[view.step_count].reference, Some(Reference::Base));
        assert_eq!(swatches[2 * view.step_count].reference, Some(Reference::Light));
        assert_eq!(swatches[1].reference, None);
    }
}
