//! Interactive TUI for exploring tint/shade ramps.
//!
//! Architecture: Activity-based with tui-realm for components.
//! Each screen (activity) has its own Application instance and message types.

mod activities;
mod activity;
mod components;
mod highlighting;
mod model;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher, action,
    defaults, keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::session::Session;

pub use highlighting::{Highlighter, SYNTAX_SET};
pub use model::Model;

use activities::Msg;
use activity::{ActivityManager, Context};

// ============================================================================
// Event handling (shared across activities)
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Switch to the reference colors screen
    References,
    /// Increment value by small step (1)
    ValueIncrementSmall,
    /// Decrement value by small step (1)
    ValueDecrementSmall,
    /// Increment value by large step (10)
    ValueIncrementLarge,
    /// Decrement value by large step (10)
    ValueDecrementLarge,
    AddRow,
    RemoveRow,
    DuplicateRow,
    ToggleHueSync,
    ToggleGreyScale,
}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    // Import all standard TuiEvent bindings wrapped in AppAction::Tui
    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    let custom = [
        (AppAction::References, 'v', "View reference colors"),
        (AppAction::AddRow, 'a', "Add row"),
        (AppAction::RemoveRow, 'x', "Remove row"),
        (AppAction::DuplicateRow, 'd', "Duplicate row"),
        (AppAction::ToggleHueSync, 's', "Sync hue on/off"),
        (AppAction::ToggleGreyScale, 'g', "Grey scale on/off"),
        (AppAction::ValueDecrementSmall, '[', "Decrease value"),
        (AppAction::ValueIncrementSmall, ']', "Increase value"),
        (AppAction::ValueDecrementLarge, '{', "Decrease value (10x)"),
        (AppAction::ValueIncrementLarge, '}', "Increase value (10x)"),
    ];
    for (app_action, key, description) in custom {
        config.bind(
            action(app_action)
                .binding(keys::char(key))
                .description(description)
                .build(),
        );
    }

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle actions that mean the same thing in every component of the
/// main screen. Returns None for anything component-specific.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::Tui(TuiEvent::App(AppEvent::Refresh)) => Some(Msg::Regenerate),
        AppAction::References => Some(Msg::SwitchToReferences),
        AppAction::AddRow => Some(Msg::AddRow),
        AppAction::RemoveRow => Some(Msg::RemoveRow),
        AppAction::DuplicateRow => Some(Msg::DuplicateRow),
        AppAction::ToggleHueSync => Some(Msg::ToggleHueSync),
        AppAction::ToggleGreyScale => Some(Msg::GreyScaleToggled),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive TUI on an existing session.
pub fn run(session: Session) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut model = Model::new(session);
    model.regenerate();

    let mut manager = ActivityManager::new(Context { model });
    let result = manager.run(&mut terminal);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}
