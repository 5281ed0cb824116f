//! HSB picker for the selected reference color: hue, saturation and
//! brightness sliders under a header with a live swatch.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::color::{Hsb, display_rgb};
use crate::reference::Reference;
use crate::tui::activities::{Msg, main::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

const LARGE_STEP: f32 = 10.0;

/// Which slider is focused within the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Channel {
    #[default]
    Hue,
    Saturation,
    Brightness,
}

impl Channel {
    fn next(self) -> Self {
        match self {
            Self::Hue => Self::Saturation,
            Self::Saturation => Self::Brightness,
            Self::Brightness => Self::Hue,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Hue => Self::Brightness,
            Self::Saturation => Self::Hue,
            Self::Brightness => Self::Saturation,
        }
    }
}

pub struct HsbPicker {
    props: Props,
    reference: Reference,
    row: usize,
    /// None when the collection is empty
    color: Option<Hsb>,
    grey_scale: bool,
    channel: Channel,
}

impl HsbPicker {
    pub fn new(row: usize, reference: Reference, color: Option<Hsb>, grey_scale: bool) -> Self {
        Self {
            props: Props::default(),
            reference,
            row,
            color,
            grey_scale,
            channel: Channel::default(),
        }
    }

    fn focused(&self) -> bool {
        self.props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag()
    }

    /// Hue wraps around the circle; saturation and brightness stop at 0 and 100.
    fn adjust(&mut self, delta: f32) -> Option<Hsb> {
        let color = self.color?;
        let next = match self.channel {
            Channel::Hue => color.with_hue(color.hue() + delta),
            Channel::Saturation => color.with_saturation(color.saturation() + delta),
            Channel::Brightness => color.with_brightness(color.brightness() + delta),
        };
        self.color = Some(next);
        Some(next)
    }

    fn draw_slider(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        (value, max): (f32, f32),
        suffix: &str,
        focused: bool,
    ) {
        let [label_area, slider_area] =
            Layout::horizontal([Constraint::Length(14), Constraint::Min(10)]).areas(area);

        let accent = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("  {label}:")).style(if focused {
                accent.add_modifier(Modifier::BOLD)
            } else {
                accent
            }),
            label_area,
        );

        let width = slider_area.width.saturating_sub(7) as usize;
        let pos = ((value / max) * width as f32).round() as usize;
        let pos = pos.min(width.saturating_sub(1));

        let (filled, empty) = if focused {
            (Style::default().fg(Color::Cyan), Style::default().fg(Color::DarkGray))
        } else {
            (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
        };

        let mut spans: Vec<Span> = (0..width)
            .map(|i| match i.cmp(&pos) {
                std::cmp::Ordering::Less => Span::styled("━", filled),
                std::cmp::Ordering::Equal => Span::styled("●", Style::default().fg(Color::White)),
                std::cmp::Ordering::Greater => Span::styled("─", empty),
            })
            .collect();
        spans.push(Span::styled(format!(" {value:.0}{suffix}"), accent));

        frame.render_widget(Paragraph::new(Line::from(spans)), slider_area);
    }

    fn emit(&self, changed: Option<Hsb>) -> Option<Msg> {
        changed.map(Msg::ReferenceColorChanged)
    }
}

impl MockComponent for HsbPicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focused();
        let rows = Layout::vertical([Constraint::Length(1); 4]).split(area);

        let header_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let Some(color) = self.color else {
            frame.render_widget(
                Paragraph::new("No rows. Press a to add one.").style(header_style),
                rows[0],
            );
            return;
        };

        let [title_area, swatch_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(4)]).areas(rows[0]);
        let title = format!(
            "Row {} {}: {}",
            self.row + 1,
            self.reference.display_name(),
            color
        );
        frame.render_widget(Paragraph::new(title).style(header_style), title_area);

        let rgb = display_rgb(color, self.grey_scale);
        frame.render_widget(
            Paragraph::new("    ").style(Style::default().bg(Color::Rgb(rgb.red, rgb.green, rgb.blue))),
            swatch_area,
        );

        let sliders = [
            (Channel::Hue, "Hue", (color.hue(), 360.0), "°"),
            (Channel::Saturation, "Saturation", (color.saturation(), 100.0), "%"),
            (Channel::Brightness, "Brightness", (color.brightness(), 100.0), "%"),
        ];
        for (area, (channel, label, range, suffix)) in rows[1..].iter().zip(sliders) {
            self.draw_slider(frame, *area, label, range, suffix, focused && self.channel == channel);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        match self.color {
            Some(color) => State::Tup3((
                StateValue::F64(f64::from(color.hue())),
                StateValue::F64(f64::from(color.saturation())),
                StateValue::F64(f64::from(color.brightness())),
            )),
            None => State::None,
        }
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) => {
                self.channel = self.channel.prev();
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Down) => {
                self.channel = self.channel.next();
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Left) => match self.adjust(-1.0) {
                Some(_) => CmdResult::Changed(self.state()),
                None => CmdResult::None,
            },
            Cmd::Move(CmdDirection::Right) => match self.adjust(1.0) {
                Some(_) => CmdResult::Changed(self.state()),
                None => CmdResult::None,
            },
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for HsbPicker {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !self.focused() {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),

            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                None
            }

            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left))
            | AppAction::ValueDecrementSmall => {
                let changed = self.adjust(-1.0);
                self.emit(changed)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right))
            | AppAction::ValueIncrementSmall => {
                let changed = self.adjust(1.0);
                self.emit(changed)
            }
            AppAction::ValueDecrementLarge => {
                let changed = self.adjust(-LARGE_STEP);
                self.emit(changed)
            }
            AppAction::ValueIncrementLarge => {
                let changed = self.adjust(LARGE_STEP);
                self.emit(changed)
            }

            _ => None,
        }
    }
}
