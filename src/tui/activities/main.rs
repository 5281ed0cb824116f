//! Main activity - global controls, HSB picker and the row list.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::props::{AttrValue, Attribute};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::color::Hsb;
use crate::curves::CurveType;
use crate::interpolation::ColorSpace;
use crate::reference::Reference;
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    ControlValues, Controls, GREY_SCALE_ATTR, HsbPicker, MAIN_FOOTER_ACTIONS, RowList,
    format_footer, render_help,
};

// ============================================================================
// Component identifiers (scoped to MainActivity)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Controls,
    Picker,
    Rows,
}

// ============================================================================
// Messages (scoped to MainActivity)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Global settings
    StepCountChanged(usize),
    ColorSpaceChanged(ColorSpace),
    CurveTypeChanged(CurveType),
    GreyScaleToggled,

    // Selection
    RowSelected(usize),
    ReferenceSelected(Reference),

    // Row operations on the selected row
    AddRow,
    RemoveRow,
    DuplicateRow,
    ToggleHueSync,
    ReferenceColorChanged(Hsb),

    // Chained after every state change
    Regenerate,

    SwitchToReferences,
}

/// Custom user events (unused, required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// Focus management
// ============================================================================

const ALL_FOCUS_IDS: &[Id] = &[Id::Rows, Id::Picker, Id::Controls];

/// Tab order between the three components.
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    pub fn new() -> Self {
        Self { current_idx: 0 }
    }

    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::Rows)
    }

    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }

    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + ALL_FOCUS_IDS.len() - 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MainActivity
// ============================================================================

#[derive(Default)]
pub struct MainActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

/// How much of the screen must be remounted after a batch of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Sync {
    None,
    /// Row list only
    Rows,
    /// Row list and picker
    Selection,
}

impl MainActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let session = &model.session;
        let controls = Controls::new(ControlValues {
            step_count: session.step_count(),
            color_space: session.color_space(),
            curve_type: session.curve().curve_type,
            grey_scale: session.grey_scale(),
        });
        app.mount(Id::Controls, Box::new(controls), vec![])?;
        app.mount(Id::Picker, Box::new(Self::picker(model)), vec![])?;
        app.mount(Id::Rows, Box::new(Self::row_list(model)), vec![])?;
        app.active(&Id::Rows)?;
        Ok(())
    }

    fn picker(model: &Model) -> HsbPicker {
        HsbPicker::new(
            model.selected_row,
            model.selected_reference,
            model.selected_color(),
            model.session.grey_scale(),
        )
    }

    fn row_list(model: &Model) -> RowList {
        RowList::new(
            model.rows.clone(),
            model.selected_row,
            model.selected_reference,
            model.session.grey_scale(),
        )
    }

    /// Remount components whose data changed, then restore focus.
    fn sync_components(
        app: &mut Application<Id, Msg, UserEvent>,
        model: &Model,
        focus: &FocusManager,
        sync: Sync,
    ) {
        if sync >= Sync::Rows {
            let _ = app.umount(&Id::Rows);
            let _ = app.mount(Id::Rows, Box::new(Self::row_list(model)), vec![]);
            let _ = app.attr(
                &Id::Controls,
                Attribute::Custom(GREY_SCALE_ATTR),
                AttrValue::Flag(model.session.grey_scale()),
            );
        }
        if sync >= Sync::Selection {
            let _ = app.umount(&Id::Picker);
            let _ = app.mount(Id::Picker, Box::new(Self::picker(model)), vec![]);
        }
        let _ = app.active(&focus.current_focus());
    }
}

impl Activity for MainActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();
        if let Err(e) = Self::mount_components(&mut app, &context.model) {
            tracing::error!("Failed to mount components: {}", e);
        }
        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("main activity drawn before creation"))?;
        let model = &mut self
            .context
            .as_mut()
            .ok_or_else(|| eyre!("main activity has no context"))?
            .model;

        terminal.draw(|frame| {
            let [title_area, top_area, rows_area, status_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(6),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            let title = format!(
                " pavlette - {} rows, {} steps, mixed in {}{} ",
                model.rows.len(),
                model.session.step_count(),
                model.session.color_space().display_name(),
                if model.session.grey_scale() { ", grey scale" } else { "" }
            );
            frame.render_widget(
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
                title_area,
            );

            let [picker_area, controls_area] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(top_area);

            for (id, area, title) in [
                (Id::Picker, picker_area, " Reference color "),
                (Id::Controls, controls_area, " Ramp "),
            ] {
                let block = Block::default().title(title).borders(Borders::ALL);
                let inner = block.inner(area);
                frame.render_widget(block, area);
                app.view(&id, frame, inner);
            }

            app.view(&Id::Rows, frame, rows_area);

            let status = model
                .message
                .clone()
                .unwrap_or_else(|| format_footer(MAIN_FOOTER_ACTIONS, &[("adjust", "[]/{}")]));
            frame.render_widget(
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM)),
                status_area,
            );

            if model.show_help {
                render_help(frame);
            }
        })?;

        // Help modal intercepts all input while visible
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        let Ok(messages) = app.tick(PollStrategy::Once) else {
            // Timeout
            return Ok(());
        };

        let mut sync = Sync::None;
        for msg in messages {
            match &msg {
                Msg::FocusNext => {
                    let _ = app.active(&self.focus.focus_next());
                }
                Msg::FocusPrev => {
                    let _ = app.active(&self.focus.focus_prev());
                }
                Msg::Quit => {
                    self.exit_reason = Some(ExitReason::Quit);
                    return Ok(());
                }
                Msg::SwitchToReferences => {
                    self.exit_reason = Some(ExitReason::SwitchToReferences);
                    return Ok(());
                }
                Msg::RowSelected(_)
                | Msg::ReferenceSelected(_)
                | Msg::AddRow
                | Msg::RemoveRow
                | Msg::DuplicateRow
                | Msg::GreyScaleToggled => sync = sync.max(Sync::Selection),
                _ => {}
            }

            let mut current = Some(msg);
            while let Some(m) = current {
                if matches!(m, Msg::Regenerate) {
                    sync = sync.max(Sync::Rows);
                }
                current = model.update(Some(m));
            }
        }

        if sync != Sync::None {
            Self::sync_components(app, model, &self.focus, sync);
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
