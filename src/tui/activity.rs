//! Activity-based architecture for the TUI.
//!
//! Each screen is an Activity with its own Application instance, component
//! IDs and message types. The ActivityManager hands the shared context from
//! one activity to the next.

use std::io::Stdout;

use color_eyre::eyre::{Result, eyre};
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Model;
use super::activities::{MainActivity, ReferencesActivity};

/// Shared context passed between activities.
pub struct Context {
    pub model: Model,
}

/// Exit reasons for activity transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    Quit,
    SwitchToMain,
    SwitchToReferences,
}

/// Activity lifecycle trait.
pub trait Activity {
    /// Take ownership of the context and mount components.
    fn on_create(&mut self, context: Context);

    /// Draw the UI and handle one tick of events.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// Some(reason) once the activity wants to exit.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Clean up and return the context to the manager.
    fn on_destroy(&mut self) -> Option<Context>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Main,
    References,
}

/// Manages activity lifecycle and transitions.
pub struct ActivityManager {
    context: Option<Context>,
    current: ActivityType,
}

impl ActivityManager {
    pub fn new(context: Context) -> Self {
        Self {
            context: Some(context),
            current: ActivityType::Main,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let mut activity: Box<dyn Activity> = match self.current {
                ActivityType::Main => Box::<MainActivity>::default(),
                ActivityType::References => Box::<ReferencesActivity>::default(),
            };

            let context = self
                .context
                .take()
                .ok_or_else(|| eyre!("activity context was not returned"))?;
            activity.on_create(context);

            loop {
                activity.on_draw(terminal)?;

                let Some(reason) = activity.will_umount().cloned() else {
                    continue;
                };
                self.context = activity.on_destroy();
                match reason {
                    ExitReason::Quit => return Ok(()),
                    ExitReason::SwitchToMain => self.current = ActivityType::Main,
                    ExitReason::SwitchToReferences => self.current = ActivityType::References,
                }
                break;
            }
        }
    }
}
