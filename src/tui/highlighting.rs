//! Syntax highlighting for the references screen, themed from a ramp.

use std::str::FromStr;
use std::sync::LazyLock;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{
    Color, FontStyle, ScopeSelectors, StyleModifier, Theme, ThemeItem, ThemeSettings,
};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use syntect_tui::into_span;

use crate::color::display_rgb;
use crate::session::RowView;

/// Cached syntax set - expensive to load, so we cache it globally.
pub static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Highlighter whose colors come from one row's ramp: the darkest shade as
/// background, tints for text.
pub struct Highlighter {
    theme: Theme,
}

impl Highlighter {
    pub fn new(view: &RowView, grey_scale: bool) -> Self {
        Self {
            theme: build_theme(view, grey_scale),
        }
    }

    pub fn background_color(&self) -> ratatui::style::Color {
        to_ratatui(self.theme.settings.background)
    }

    pub fn gutter_color(&self) -> ratatui::style::Color {
        to_ratatui(self.theme.settings.gutter_foreground)
    }

    /// Highlight code and return ratatui Lines.
    pub fn highlight(&self, code: &str, extension: &str) -> Vec<Line<'static>> {
        let syntax = SYNTAX_SET
            .find_syntax_by_extension(extension)
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        // LinesWithEndings keeps the newline so scopes close correctly
        LinesWithEndings::from(code)
            .map(|line| {
                let ranges = highlighter
                    .highlight_line(line, &SYNTAX_SET)
                    .unwrap_or_default();
                let spans: Vec<Span<'static>> = ranges
                    .into_iter()
                    .filter_map(|segment| into_span(segment).ok())
                    .map(|span| {
                        let content = span.content.trim_end_matches('\n').to_string();
                        Span::styled(content, foreground_only(span.style))
                    })
                    .filter(|span| !span.content.is_empty())
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Drop the background syntect-tui sets on every span so the widget
/// background shows through.
fn foreground_only(style: Style) -> Style {
    let mut patched = Style::new();
    if let Some(fg) = style.fg {
        patched = patched.fg(fg);
    }
    for modifier in [Modifier::BOLD, Modifier::ITALIC, Modifier::UNDERLINED] {
        if style.add_modifier.contains(modifier) {
            patched = patched.add_modifier(modifier);
        }
    }
    patched
}

fn to_ratatui(color: Option<Color>) -> ratatui::style::Color {
    color
        .map(|c| ratatui::style::Color::Rgb(c.r, c.g, c.b))
        .unwrap_or(ratatui::style::Color::Reset)
}

fn build_theme(view: &RowView, grey_scale: bool) -> Theme {
    let ramp = &view.ramp;
    let n = view.step_count;
    let at = |slot: usize| -> Color {
        ramp.get(slot.min(ramp.len().saturating_sub(1)))
            .map(|color| {
                let rgb = display_rgb(*color, grey_scale);
                Color {
                    r: rgb.red,
                    g: rgb.green,
                    b: rgb.blue,
                    a: 255,
                }
            })
            .unwrap_or(Color::BLACK)
    };

    // Slots: 0 darkest, n base, 2n palest
    let background = at(0);
    let foreground = at(2 * n);
    let muted = at(n + n / 2);

    let settings = ThemeSettings {
        foreground: Some(foreground),
        background: Some(background),
        caret: Some(foreground),
        gutter: Some(background),
        gutter_foreground: Some(muted),
        ..Default::default()
    };

    let rule = |scope: &str, color: Color, font_style: Option<FontStyle>| ThemeItem {
        scope: ScopeSelectors::from_str(scope).unwrap_or_default(),
        style: StyleModifier {
            foreground: Some(color),
            background: None,
            font_style,
        },
    };

    let scopes = vec![
        rule("punctuation, meta.structure", muted, None),
        rule(
            "support.type.property-name, entity.name.tag, string.unquoted.plain.out",
            at(2 * n - 1),
            Some(FontStyle::BOLD),
        ),
        rule("string", at(n + 1), None),
        rule("constant, constant.numeric", foreground, None),
    ];

    Theme {
        name: Some(format!("row {}", view.index + 1)),
        author: None,
        settings,
        scopes,
    }
}
