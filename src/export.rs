//! Read-only serialised views of a session.
//!
//! `references_*` is the debug view: each row's three reference colors as
//! `hsb()` strings. `palette_report` adds the generated ramps as hex.

use serde::Serialize;

use crate::color::{Hsb, display_rgb};
use crate::reference::ColorConfiguration;
use crate::session::{RowView, Session};

/// The three reference colors of one row as readable strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceView {
    pub base: String,
    pub dark: String,
    pub light: String,
}

impl From<&ColorConfiguration> for ReferenceView {
    fn from(row: &ColorConfiguration) -> Self {
        Self {
            base: row.base.to_string(),
            dark: row.dark.to_string(),
            light: row.light.to_string(),
        }
    }
}

pub fn reference_views(session: &Session) -> Vec<ReferenceView> {
    session.collection().iter().map(ReferenceView::from).collect()
}

pub fn references_json(session: &Session) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&reference_views(session))
}

pub fn references_yaml(session: &Session) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&reference_views(session))
}

/// Generated output for every row.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport {
    pub step_count: usize,
    pub color_space: &'static str,
    pub grey_scale: bool,
    pub rows: Vec<RowReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowReport {
    pub index: usize,
    pub hue_sync: bool,
    pub references: ReferenceView,
    /// `#rrggbb`, dark end first
    pub ramp: Vec<String>,
}

impl RowReport {
    fn new(view: &RowView, grey_scale: bool) -> Self {
        Self {
            index: view.index,
            hue_sync: view.is_hue_sync,
            references: ReferenceView {
                base: view.base.to_string(),
                dark: view.dark.to_string(),
                light: view.light.to_string(),
            },
            ramp: view
                .swatches()
                .iter()
                .map(|swatch| hex(swatch.color, grey_scale))
                .collect(),
        }
    }
}

pub fn palette_report(session: &Session) -> PaletteReport {
    let grey_scale = session.grey_scale();
    PaletteReport {
        step_count: session.step_count(),
        color_space: session.color_space().display_name(),
        grey_scale,
        rows: session
            .render()
            .iter()
            .map(|view| RowReport::new(view, grey_scale))
            .collect(),
    }
}

/// One line per row: index, sync marker, then the hex ramp.
pub fn render_text(session: &Session) -> String {
    let report = palette_report(session);
    let mut out = String::new();
    for row in &report.rows {
        let sync = if row.hue_sync { "sync" } else { "free" };
        out.push_str(&format!("{:>3} [{}] {}\n", row.index, sync, row.ramp.join(" ")));
    }
    out
}

fn hex(color: Hsb, grey_scale: bool) -> String {
    let rgb = display_rgb(color, grey_scale);
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}
