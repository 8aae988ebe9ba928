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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
};

use crate::{
    components::{ArView, ar::ArState},
    devices::{ArMode, ArSession},
    model::Artwork,
    render::{
        Render,
        icons::{ICON_AUDIO_OFF, ICON_AUDIO_ON, ICON_PAUSE, ICON_PLAY, spinner},
        widgets::{field, panel},
    },
    theme::Theme,
};

/// Frames of a slowly turning wireframe cube.
const MODEL_FRAMES: [[&str; 5]; 4] = [
    ["   +------+ ", "  /      /| ", " +------+ | ", " |      | + ", " +------+/  "],
    ["  +------+  ", "  |\\      \\ ", "  | +------+", "  + |      |", "   \\+------+"],
    ["  +------+  ", " /|      |  ", "+ |      |  ", "| +------+  ", "|/      /   "],
    [" +------+   ", " |      |\\  ", " |      | + ", " +------+ | ", "  \\      \\| "],
];

impl Render for ArView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        self.draw_target(f, chunks[0], theme);

        match &self.state {
            ArState::Idle => draw_message(
                f,
                chunks[1],
                &[
                    "AR Camera View",
                    "Allow camera access for AR functionality",
                    "Press enter to start the camera",
                ],
                theme,
            ),
            ArState::Initialising => {
                let status = format!("{} Initialising AR camera...", spinner(self.frame));
                draw_message(
                    f,
                    chunks[1],
                    &[status.as_str(), "Hold your phone steady and point at the artwork"],
                    theme,
                );
            }
            ArState::Failed(reason) => draw_message(
                f,
                chunks[1],
                &["AR Initialization Failed", reason.as_str(), "Press enter to try again"],
                theme,
            ),
            ArState::Active(session) => {
                draw_session(f, chunks[1], session, self.artwork.as_ref(), self.frame, theme)
            }
        }
    }
}

impl ArView {
    fn draw_target(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = match &self.artwork {
            Some(artwork) => vec![
                Line::from(Span::styled(artwork.title.as_str(), Style::default().fg(theme.title_fg).bold())),
                Line::from(Span::styled(
                    format!("{}, {}", artwork.artist, artwork.year),
                    Style::default().fg(theme.artist_fg),
                )),
            ],
            None => vec![Line::from(Span::styled(
                "No artwork selected, point the camera at any artwork",
                Style::default().fg(theme.muted_fg),
            ))],
        };

        f.render_widget(Paragraph::new(text).block(panel("Target", theme)), area);
    }
}

fn draw_message(f: &mut Frame, area: Rect, lines: &[&str], theme: &Theme) {
    let mut text = vec![Line::default()];
    for (i, line) in lines.iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_fg)
        };
        text.push(Line::from(Span::styled(line.to_string(), style)));
    }

    f.render_widget(
        Paragraph::new(text)
            .block(panel("Camera", theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_session(
    f: &mut Frame,
    area: Rect,
    session: &ArSession,
    artwork: Option<&Artwork>,
    frame: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let selected = ArMode::ALL.iter().position(|m| *m == session.mode);
    let tabs = Tabs::new(ArMode::ALL.iter().map(|m| m.label()))
        .select(selected)
        .style(Style::default().fg(theme.muted_fg))
        .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let body: Vec<Line> = match session.mode {
        ArMode::Model => {
            // Quarter turns every second at the 250ms UI tick.
            let cube = MODEL_FRAMES[(frame / 4) % MODEL_FRAMES.len()];
            let mut lines = vec![Line::default()];
            lines.extend(
                cube.iter()
                    .map(|row| Line::from(Span::styled(*row, Style::default().fg(theme.accent_colour)))),
            );
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Tap on AR elements to get more information",
                Style::default().fg(theme.muted_fg),
            )));
            lines
        }
        ArMode::Info => match artwork {
            Some(artwork) => vec![
                Line::from(artwork.description.as_str()),
                Line::default(),
                field("Medium", &artwork.medium, theme),
                field("Dimensions", &artwork.dimensions, theme),
                field("Location", &artwork.location, theme),
            ],
            None => vec![Line::from(Span::styled(
                "Point at an artwork to see its details",
                Style::default().fg(theme.muted_fg),
            ))],
        },
        ArMode::Animation => {
            let width = 24;
            let position = if session.animating { frame % width } else { 0 };
            let track: String = (0..width)
                .map(|i| if i == position { '\u{25CF}' } else { '\u{00B7}' })
                .collect();
            vec![
                Line::default(),
                Line::from(Span::styled(track, Style::default().fg(theme.accent_colour))),
                Line::default(),
                Line::from(Span::styled(
                    "Watch the story of the artwork unfold",
                    Style::default().fg(theme.muted_fg),
                )),
            ]
        }
    };

    f.render_widget(
        Paragraph::new(body)
            .block(panel("AR Camera View", theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    let status = Line::from(vec![
        Span::styled(
            if session.audio { ICON_AUDIO_ON } else { ICON_AUDIO_OFF },
            Style::default().fg(theme.accent_colour),
        ),
        Span::styled(
            if session.audio { " audio on   " } else { " audio off   " },
            Style::default().fg(theme.muted_fg),
        ),
        Span::styled(
            if session.animating { ICON_PLAY } else { ICON_PAUSE },
            Style::default().fg(theme.accent_colour),
        ),
        Span::styled(
            if session.animating { " animating" } else { " paused" },
            Style::default().fg(theme.muted_fg),
        ),
    ])
    .centered();
    f.render_widget(Paragraph::new(status), chunks[2]);
}
