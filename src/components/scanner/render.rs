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
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::{
    components::{
        ScannerView,
        scanner::{DEMO_CODES, ScanStatus},
    },
    model::ScanKind,
    render::{
        Render,
        icons::{ICON_LOCATION, ICON_SCAN, spinner},
        widgets::panel,
    },
    theme::Theme,
};

impl Render for ScannerView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.draw_viewfinder(f, chunks[0], theme);
        self.draw_demo_codes(f, chunks[1], theme);
    }
}

impl ScannerView {
    fn draw_viewfinder(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mode_line = Line::from(
            [ScanKind::Qr, ScanKind::Nfc]
                .into_iter()
                .flat_map(|kind| {
                    let style = if kind == self.mode {
                        Style::default()
                            .fg(theme.background_colour)
                            .bg(theme.accent_colour)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.muted_fg)
                    };
                    [Span::styled(format!(" {} ", kind), style), Span::raw("  ")]
                })
                .collect::<Vec<_>>(),
        );

        let instructions = match self.mode {
            ScanKind::Qr => "Point your camera at the QR code next to the artwork",
            ScanKind::Nfc => "Hold your device near the NFC tag beside the artwork",
        };

        let mut text = vec![
            mode_line,
            Line::default(),
            Line::from(Span::styled(instructions, Style::default().fg(theme.muted_fg))),
            Line::default(),
        ];

        match &self.status {
            ScanStatus::Ready => {
                text.push(Line::from(Span::styled(
                    format!("{} Ready to scan", ICON_SCAN),
                    Style::default().fg(theme.text_fg),
                )));
            }
            ScanStatus::Scanning { kind, code } => {
                text.push(Line::from(Span::styled(
                    format!("{} Scanning {} code {}...", spinner(self.frame), kind, code),
                    Style::default().fg(theme.accent_colour).bold(),
                )));
            }
            ScanStatus::Found(artwork) => {
                text.push(Line::from(Span::styled(
                    "Artwork found",
                    Style::default().fg(theme.success_fg).bold(),
                )));
                text.push(Line::default());
                text.push(Line::from(Span::styled(
                    artwork.title.as_str(),
                    Style::default().fg(theme.title_fg).bold(),
                )));
                text.push(Line::from(Span::styled(
                    format!("{}, {}", artwork.artist, artwork.year),
                    Style::default().fg(theme.artist_fg),
                )));
                text.push(Line::from(Span::styled(
                    format!("{} {}", ICON_LOCATION, artwork.location),
                    Style::default().fg(theme.muted_fg),
                )));
                text.push(Line::default());
                text.push(Line::from(Span::styled(
                    "v view details   a view in AR   c scan again",
                    Style::default().fg(theme.muted_fg),
                )));
            }
            ScanStatus::NotFound { kind, code } => {
                text.push(Line::from(Span::styled(
                    format!("No artwork found for {} code {}", kind, code),
                    Style::default().fg(theme.error_fg).bold(),
                )));
                text.push(Line::from(Span::styled(
                    "Check the code and try again",
                    Style::default().fg(theme.muted_fg),
                )));
            }
        }

        f.render_widget(
            Paragraph::new(text)
                .block(panel("Scanner", theme))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn draw_demo_codes(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = DEMO_CODES
            .iter()
            .map(|(kind, code)| {
                let title = self
                    .museum
                    .find_by_code(*kind, code)
                    .map(|a| a.title.as_str())
                    .unwrap_or("unknown");
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<4}", kind.to_string()), Style::default().fg(theme.muted_fg)),
                    Span::styled(format!("{:<8}", code), Style::default().fg(theme.accent_colour)),
                    Span::styled(title, Style::default().fg(theme.text_fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(panel("Demo Codes", theme))
            .highlight_style(Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, area, self.selector.state_mut());
    }
}
