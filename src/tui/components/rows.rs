//! Row list: one swatch strip per palette row, with row and reference
//! selection.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::color::display_rgb;
use crate::reference::Reference;
use crate::session::RowView;
use crate::tui::activities::{Msg, main::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Header, swatches, markers.
const ROW_HEIGHT: u16 = 3;

pub struct RowList {
    props: Props,
    rows: Vec<RowView>,
    selected_row: usize,
    selected_reference: Reference,
    grey_scale: bool,
}

impl RowList {
    pub fn new(
        rows: Vec<RowView>,
        selected_row: usize,
        selected_reference: Reference,
        grey_scale: bool,
    ) -> Self {
        Self {
            props: Props::default(),
            rows,
            selected_row,
            selected_reference,
            grey_scale,
        }
    }

    fn focused(&self) -> bool {
        self.props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag()
    }

    fn draw_row(&self, frame: &mut Frame, area: Rect, view: &RowView, focused: bool) {
        let selected = view.index == self.selected_row;
        let swatches = view.swatches();

        let header_style = match (selected, focused) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::Gray),
        };
        let header = Line::from(vec![
            Span::styled(if selected { "▸ " } else { "  " }, header_style),
            Span::styled(format!("Row {}", view.index + 1), header_style),
            Span::styled(
                if view.is_hue_sync { "  [hue sync]  " } else { "  [free hue]  " },
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("base {}", view.base), header_style),
        ]);

        let slot_width = (area.width.saturating_sub(2) as usize / swatches.len().max(1)).max(1);

        let strip: Vec<Span> = std::iter::once(Span::raw("  "))
            .chain(swatches.iter().map(|swatch| {
                let rgb = display_rgb(swatch.color, self.grey_scale);
                Span::styled(
                    " ".repeat(slot_width),
                    Style::default().bg(Color::Rgb(rgb.red, rgb.green, rgb.blue)),
                )
            }))
            .collect();

        let markers: Vec<Span> = std::iter::once(Span::raw("  "))
            .chain(swatches.iter().map(|swatch| {
                let Some(which) = swatch.reference else {
                    return Span::raw(" ".repeat(slot_width));
                };
                let label = &which.display_name()[..1];
                let current = selected && which == self.selected_reference;
                let (text, style) = if current {
                    (
                        format!("▲{label}"),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (label.to_string(), Style::default().fg(Color::DarkGray))
                };
                let text = format!("{text:<slot_width$}");
                Span::styled(text, style)
            }))
            .collect();

        let lines = vec![header, Line::from(strip), Line::from(markers)];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl MockComponent for RowList {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focused();
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!(" Rows ({}) ", self.rows.len()))
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.rows.is_empty() {
            frame.render_widget(Paragraph::new("  No rows"), inner);
            return;
        }

        let visible = (inner.height / ROW_HEIGHT).max(1) as usize;
        let offset = self.selected_row.saturating_sub(visible - 1);

        for (slot, view) in self.rows.iter().skip(offset).take(visible).enumerate() {
            let row_area = Rect {
                x: inner.x,
                y: inner.y + slot as u16 * ROW_HEIGHT,
                width: inner.width,
                height: ROW_HEIGHT.min(inner.height),
            };
            self.draw_row(frame, row_area, view, focused);
        }

        if self.rows.len() > visible {
            let mut state = ScrollbarState::new(self.rows.len()).position(self.selected_row);
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
        State::One(StateValue::Usize(self.selected_row))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) if self.selected_row > 0 => {
                self.selected_row -= 1;
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Down) if self.selected_row + 1 < self.rows.len() => {
                self.selected_row += 1;
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Left) => {
                self.selected_reference = self.selected_reference.prev();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.selected_reference = self.selected_reference.next();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for RowList {
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

        let (cmd, row_changed) = match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => {
                return Some(Msg::FocusNext);
            }
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => {
                return Some(Msg::FocusPrev);
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                (Cmd::Move(CmdDirection::Up), true)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                (Cmd::Move(CmdDirection::Down), true)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                (Cmd::Move(CmdDirection::Left), false)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                (Cmd::Move(CmdDirection::Right), false)
            }
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Changed(_) if row_changed => Some(Msg::RowSelected(self.selected_row)),
            CmdResult::Changed(_) => Some(Msg::ReferenceSelected(self.selected_reference)),
            _ => None,
        }
    }
}
