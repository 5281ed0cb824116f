//! Application model for the TUI.

use tuirealm::Update;

use crate::color::Hsb;
use crate::reference::Reference;
use crate::session::{RowView, Session, SessionEvent};

use super::activities::Msg;

/// Session plus the editor's selection and UI flags.
pub struct Model {
    pub session: Session,
    /// Views rendered from the session on the last regenerate
    pub rows: Vec<RowView>,
    pub selected_row: usize,
    pub selected_reference: Reference,

    pub show_help: bool,
    pub message: Option<String>,
    pub quit: bool,
}

impl Model {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            rows: Vec::new(),
            selected_row: 0,
            selected_reference: Reference::Base,
            show_help: false,
            message: None,
            quit: false,
        }
    }

    /// Re-render every row from the session.
    pub fn regenerate(&mut self) {
        self.rows = self.session.render();
        self.selected_row = self.selected_row.min(self.rows.len().saturating_sub(1));
        tracing::debug!(rows = self.rows.len(), "regenerated ramps");
    }

    pub fn selected_view(&self) -> Option<&RowView> {
        self.rows.get(self.selected_row)
    }

    /// The reference color under the cursor, if any row exists.
    pub fn selected_color(&self) -> Option<Hsb> {
        self.selected_view()
            .map(|view| view.reference(self.selected_reference))
    }

    fn apply(&mut self, event: SessionEvent) -> Option<Msg> {
        if !self.session.apply(event) {
            self.message = Some("No row selected".to_string());
            return None;
        }
        self.message = None;
        Some(Msg::Regenerate)
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }

            // Global settings
            Msg::StepCountChanged(count) => self.apply(SessionEvent::StepCountChanged(count)),
            Msg::ColorSpaceChanged(space) => self.apply(SessionEvent::ColorSpaceChanged(space)),
            Msg::CurveTypeChanged(curve_type) => {
                let mut curve = self.session.curve().clone();
                curve.curve_type = curve_type;
                self.apply(SessionEvent::CurveChanged(curve))
            }
            Msg::GreyScaleToggled => {
                let value = !self.session.grey_scale();
                self.apply(SessionEvent::GreyScaleToggled(value))
            }

            // Selection
            Msg::RowSelected(row) => {
                self.selected_row = row;
                None
            }
            Msg::ReferenceSelected(reference) => {
                self.selected_reference = reference;
                None
            }

            // Row operations
            Msg::AddRow => {
                let next = self.apply(SessionEvent::AddRow);
                self.selected_row = self.session.collection().len().saturating_sub(1);
                next
            }
            Msg::RemoveRow => self.apply(SessionEvent::RemoveRow(self.selected_row)),
            Msg::DuplicateRow => {
                let next = self.apply(SessionEvent::DuplicateRow(self.selected_row));
                if next.is_some() {
                    self.selected_row += 1;
                }
                next
            }
            Msg::ToggleHueSync => {
                let row = self.selected_row;
                let value = self.selected_view().is_some_and(|view| !view.is_hue_sync);
                self.apply(SessionEvent::HueSyncToggled { row, value })
            }
            Msg::ReferenceColorChanged(color) => self.apply(SessionEvent::ReferenceChanged {
                row: self.selected_row,
                reference: self.selected_reference,
                color,
            }),

            Msg::Regenerate => {
                self.regenerate();
                None
            }

            // Handled by the activity
            Msg::FocusNext | Msg::FocusPrev | Msg::SwitchToReferences => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::config::Settings;

    #[test]
    fn add_row_clears_stale_message() {
        let mut model = Model::new(Session::new(&Settings::default(), Collection::empty()));
        model.regenerate();

        assert_eq!(model.update(Some(Msg::RemoveRow)), None);
        assert!(model.message.is_some());

        let next = model.update(Some(Msg::AddRow));
        assert_eq!(next, Some(Msg::Regenerate));
        assert!(model.message.is_none());

        model.update(next);
        assert_eq!(model.rows.len(), 1);
        assert_eq!(model.selected_row, 0);
    }

    #[test]
    fn duplicate_selects_the_copy() {
        let mut model = Model::new(Session::default());
        model.regenerate();

        let next = model.update(Some(Msg::DuplicateRow));
        model.update(next);
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.selected_row, 1);
    }
}
