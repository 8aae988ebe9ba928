// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Small building blocks shared by the screens.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    render::icons::{FAVOURITE, NOT_FAVOURITE},
    theme::Theme,
};

/// A bordered panel with an accented title.
pub(crate) fn panel(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1))
}

pub(crate) fn key_hints(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
    spans.push(Span::raw(" "));
    for (key, action) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent_colour).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(theme.muted_fg),
        ));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        ": command  esc back  q quit",
        Style::default().fg(theme.muted_fg),
    ));
    Line::from(spans)
}

/// A "label: value" line.
pub(crate) fn field<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(theme.muted_fg)),
        Span::styled(value, Style::default().fg(theme.text_fg)),
    ])
}

pub(crate) fn heading<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn favourite_marker(is_favourite: bool, theme: &Theme) -> Span<'static> {
    if is_favourite {
        Span::styled(FAVOURITE, Style::default().fg(theme.favourite_fg))
    } else {
        Span::styled(NOT_FAVOURITE, Style::default().fg(theme.muted_fg))
    }
}

/// Fills `area` with a centred "not found" message.
pub(crate) fn draw_not_found(f: &mut Frame, area: Rect, title: &str, detail: &str, theme: &Theme) {
    let block = panel(title, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = vec![
        Line::default(),
        Line::from(Span::styled(title.to_string(), Style::default().fg(theme.error_fg).bold())),
        Line::default(),
        Line::from(Span::styled(detail.to_string(), Style::default().fg(theme.muted_fg))),
        Line::from(Span::styled(
            "Press esc to go back",
            Style::default().fg(theme.muted_fg),
        )),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
