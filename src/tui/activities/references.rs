//! References activity - the reference colors of every row as JSON or YAML.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::{
    Terminal,
    layout::{Constraint, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    Application, Component, Event, EventListenerCfg, MockComponent, PollStrategy, State,
    StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::export::{references_json, references_yaml};
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{REFERENCES_FOOTER_ACTIONS, format_footer};
use crate::tui::highlighting::Highlighter;
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Listing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    Back,
    NextFormat,
    PrevFormat,
    Scrolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

/// Serialisation shown in the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    fn toggle(self) -> Self {
        match self {
            Format::Json => Format::Yaml,
            Format::Yaml => Format::Json,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    fn render(self, model: &Model) -> String {
        let session = &model.session;
        let rendered = match self {
            Format::Json => references_json(session).map_err(|e| e.to_string()),
            Format::Yaml => references_yaml(session).map_err(|e| e.to_string()),
        };
        rendered.unwrap_or_else(|e| {
            tracing::warn!("Failed to serialise references: {}", e);
            format!("# {e}")
        })
    }
}

// ============================================================================
// Listing component
// ============================================================================

struct ListingColors {
    background: Color,
    gutter: Color,
}

struct Listing {
    props: Props,
    lines: Vec<Line<'static>>,
    scroll: usize,
    visible_height: usize,
    colors: ListingColors,
}

impl Listing {
    fn new(lines: Vec<Line<'static>>, colors: ListingColors) -> Self {
        Self {
            props: Props::default(),
            lines,
            scroll: 0,
            visible_height: 20,
            colors,
        }
    }
}

impl MockComponent for Listing {
    fn view(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let background = Style::default().bg(self.colors.background);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(background.fg(self.colors.gutter))
            .style(background);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;

        let visible: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(self.visible_height)
            .map(|(i, line)| {
                let mut spans = vec![Span::styled(
                    format!("{:4} ", i + 1),
                    Style::default().fg(self.colors.gutter),
                )];
                spans.extend(line.spans.iter().cloned());
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(visible).style(background), inner);

        if self.lines.len() > self.visible_height {
            let mut state = ScrollbarState::new(self.lines.len()).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut state,
            );
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.scroll))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        let max_scroll = self.lines.len().saturating_sub(self.visible_height);
        let scroll = match cmd {
            Cmd::Scroll(CmdDirection::Up) => self.scroll.saturating_sub(1),
            Cmd::Scroll(CmdDirection::Down) => (self.scroll + 1).min(max_scroll),
            _ => return CmdResult::None,
        };
        if scroll == self.scroll {
            return CmdResult::None;
        }
        self.scroll = scroll;
        CmdResult::Changed(self.state())
    }
}

impl Component<Msg, UserEvent> for Listing {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Esc is not bound in the dispatcher
        if key_event.code == tuirealm::event::Key::Esc {
            return Some(Msg::Back);
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return match msg {
                super::Msg::Quit => Some(Msg::Quit),
                super::Msg::SwitchToReferences => Some(Msg::Back),
                _ => None,
            };
        }

        let cmd = match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                Cmd::Scroll(CmdDirection::Up)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                Cmd::Scroll(CmdDirection::Down)
            }
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => {
                return Some(Msg::NextFormat);
            }
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => {
                return Some(Msg::PrevFormat);
            }
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Changed(_) => Some(Msg::Scrolled),
            _ => None,
        }
    }
}

// ============================================================================
// ReferencesActivity
// ============================================================================

#[derive(Default)]
pub struct ReferencesActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    format: Format,
    needs_clear: bool,
}

impl ReferencesActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Listing themed from the selected row, or plain when there are no rows.
    fn listing(&self, model: &Model) -> Listing {
        let text = self.format.render(model);
        let grey_scale = model.session.grey_scale();
        match model.selected_view() {
            Some(view) => {
                let highlighter = Highlighter::new(view, grey_scale);
                Listing::new(
                    highlighter.highlight(&text, self.format.extension()),
                    ListingColors {
                        background: highlighter.background_color(),
                        gutter: highlighter.gutter_color(),
                    },
                )
            }
            None => Listing::new(
                text.lines().map(|line| Line::raw(line.to_string())).collect(),
                ListingColors {
                    background: Color::Reset,
                    gutter: Color::DarkGray,
                },
            ),
        }
    }

    fn remount(&mut self) {
        let Some(model) = self.context.as_ref().map(|ctx| &ctx.model) else {
            return;
        };
        let listing = self.listing(model);
        if let Some(app) = self.app.as_mut() {
            let _ = app.umount(&Id::Listing);
            let _ = app.mount(Id::Listing, Box::new(listing), vec![]);
            let _ = app.active(&Id::Listing);
        }
        self.needs_clear = true;
    }
}

impl Activity for ReferencesActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();
        let listing = self.listing(&context.model);
        if let Err(e) = app
            .mount(Id::Listing, Box::new(listing), vec![])
            .and_then(|()| app.active(&Id::Listing))
        {
            tracing::error!("Failed to mount reference listing: {}", e);
        }
        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        // Full redraw after a format switch so no stale text remains
        if self.needs_clear {
            terminal.clear()?;
            self.needs_clear = false;
        }

        let format = self.format;
        let rows = self
            .context
            .as_ref()
            .map(|ctx| ctx.model.rows.len())
            .unwrap_or_default();
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("references activity drawn before creation"))?;

        terminal.draw(|frame| {
            let [title_area, listing_area, status_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            let title = format!(" Reference colors - {rows} rows [{}]", format.display_name());
            frame.render_widget(
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
                title_area,
            );

            app.view(&Id::Listing, frame, listing_area);

            let status = format_footer(REFERENCES_FOOTER_ACTIONS, &[("back", "Esc")]);
            frame.render_widget(
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM)),
                status_area,
            );
        })?;

        let Ok(messages) = app.tick(PollStrategy::Once) else {
            return Ok(());
        };

        for msg in messages {
            match msg {
                Msg::Quit => {
                    self.exit_reason = Some(ExitReason::Quit);
                    return Ok(());
                }
                Msg::Back => {
                    self.exit_reason = Some(ExitReason::SwitchToMain);
                    return Ok(());
                }
                Msg::NextFormat | Msg::PrevFormat => {
                    self.format = self.format.toggle();
                    self.remount();
                }
                Msg::Scrolled => {}
            }
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
