//! TUI components using tui-realm.

pub mod controls;
pub mod help;
pub mod hsb_picker;
pub mod rows;

pub use controls::{ControlValues, Controls, GREY_SCALE_ATTR};
pub use help::{MAIN_FOOTER_ACTIONS, REFERENCES_FOOTER_ACTIONS, format_footer, render_help};
pub use hsb_picker::HsbPicker;
pub use rows::RowList;
