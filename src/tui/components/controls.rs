//! Global ramp settings: step count, mixing space, mix curve, grey scale.

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

use crate::curves::CurveType;
use crate::interpolation::ColorSpace;
use crate::session::{MAX_STEP_COUNT, MIN_STEP_COUNT};
use crate::tui::activities::{Msg, main::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Custom attribute carrying the grey-scale flag when it is toggled elsewhere.
pub const GREY_SCALE_ATTR: &str = "grey-scale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ControlFocus {
    #[default]
    Steps,
    Space,
    Curve,
    GreyScale,
}

impl ControlFocus {
    const ALL: [ControlFocus; 4] = [Self::Steps, Self::Space, Self::Curve, Self::GreyScale];

    fn offset(self, by: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ALL[(idx + by).rem_euclid(len) as usize]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::Space => "Mix in",
            Self::Curve => "Mix curve",
            Self::GreyScale => "Grey scale",
        }
    }
}

/// Current values shown by the controls.
#[derive(Debug, Clone, Copy)]
pub struct ControlValues {
    pub step_count: usize,
    pub color_space: ColorSpace,
    pub curve_type: CurveType,
    pub grey_scale: bool,
}

pub struct Controls {
    props: Props,
    values: ControlValues,
    sub_focus: ControlFocus,
}

impl Controls {
    pub fn new(values: ControlValues) -> Self {
        Self {
            props: Props::default(),
            values,
            sub_focus: ControlFocus::default(),
        }
    }

    fn focused(&self) -> bool {
        self.props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag()
    }

    /// Step the focused control and describe the change.
    fn adjust(&mut self, forward: bool) -> Msg {
        match self.sub_focus {
            ControlFocus::Steps => {
                let count = if forward {
                    self.values.step_count + 1
                } else {
                    self.values.step_count.saturating_sub(1)
                };
                self.values.step_count = count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT);
                Msg::StepCountChanged(self.values.step_count)
            }
            ControlFocus::Space => {
                let space = self.values.color_space;
                self.values.color_space = if forward { space.next() } else { space.prev() };
                Msg::ColorSpaceChanged(self.values.color_space)
            }
            ControlFocus::Curve => {
                let curve = self.values.curve_type;
                self.values.curve_type = if forward {
                    curve.next_preset()
                } else {
                    curve.prev_preset()
                };
                Msg::CurveTypeChanged(self.values.curve_type)
            }
            ControlFocus::GreyScale => {
                self.values.grey_scale = !self.values.grey_scale;
                Msg::GreyScaleToggled
            }
        }
    }

    fn value_text(&self, focus: ControlFocus) -> String {
        match focus {
            ControlFocus::Steps => {
                let n = self.values.step_count;
                format!("{n} ({} colors)", 2 * n + 1)
            }
            ControlFocus::Space => self.values.color_space.display_name().to_string(),
            ControlFocus::Curve => self.values.curve_type.display_name().to_string(),
            ControlFocus::GreyScale => if self.values.grey_scale { "on" } else { "off" }.to_string(),
        }
    }
}

impl MockComponent for Controls {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focused();
        let rows = Layout::vertical([Constraint::Length(1); 4]).split(area);

        for (row, control) in rows.iter().zip(ControlFocus::ALL) {
            let active = focused && control == self.sub_focus;
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::styled(format!("{:<12}", format!("{}:", control.label())), style),
                Span::styled(if active { "◀ " } else { "  " }, style),
                Span::styled(self.value_text(control), style),
                Span::styled(if active { " ▶" } else { "" }, style),
            ]);
            frame.render_widget(Paragraph::new(line), *row);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        if let (Attribute::Custom(GREY_SCALE_ATTR), AttrValue::Flag(on)) = (&attr, &value) {
            self.values.grey_scale = *on;
        }
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.values.step_count))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) => {
                self.sub_focus = self.sub_focus.offset(-1);
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Down) => {
                self.sub_focus = self.sub_focus.offset(1);
                CmdResult::None
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for Controls {
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
            | AppAction::ValueDecrementSmall
            | AppAction::ValueDecrementLarge => Some(self.adjust(false)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right))
            | AppAction::ValueIncrementSmall
            | AppAction::ValueIncrementLarge => Some(self.adjust(true)),

            _ => None,
        }
    }
}
