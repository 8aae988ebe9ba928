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
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState, Wrap},
};

use crate::{
    components::GalleryView,
    render::{
        Render,
        icons::ICON_LOCATION,
        widgets::{draw_not_found, favourite_marker, field, panel},
    },
    theme::Theme,
};

impl Render for GalleryView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.artwork_ids.is_empty() {
            draw_not_found(f, area, "No artworks", "This gallery is empty", theme);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.draw_table(f, chunks[0], theme);
        self.draw_preview(f, chunks[1], theme);
    }
}

impl GalleryView {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.artwork_ids.iter().filter_map(|id| {
            let artwork = self.museum.artwork(id)?;
            Some(Row::new(vec![
                Cell::from(favourite_marker(self.favourites.contains(id), theme)),
                Cell::from(Line::from(artwork.title.as_str()).style(Style::default().fg(theme.title_fg))),
                Cell::from(Line::from(artwork.artist.as_str()).style(Style::default().fg(theme.artist_fg))),
                Cell::from(Line::from(artwork.year.as_str()).style(Style::default().fg(theme.muted_fg))),
            ]))
        });

        let description = self
            .museum
            .section(self.category)
            .map(|s| format!("{} {}", s.icon, s.name))
            .unwrap_or_default();

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(45),
                Constraint::Percentage(35),
                Constraint::Percentage(20),
            ],
        )
        .header(
            Row::new(vec!["", "Title", "Artist", "Year"])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD))
        .block(panel(&description, theme));

        let mut state = TableState::default().with_selected(self.selector.selected());
        f.render_stateful_widget(table, area, &mut state);
    }

    fn draw_preview(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(artwork) = self.selected_artwork() else {
            return;
        };

        let text = vec![
            Line::from(vec![
                favourite_marker(self.favourites.contains(&artwork.id), theme),
                Span::raw(" "),
                Span::styled(artwork.title.as_str(), Style::default().fg(theme.title_fg).bold()),
            ]),
            Line::from(Span::styled(
                format!("{}, {}", artwork.artist, artwork.year),
                Style::default().fg(theme.artist_fg),
            )),
            Line::from(Span::styled(
                format!("{} {}", ICON_LOCATION, artwork.location),
                Style::default().fg(theme.muted_fg),
            )),
            Line::default(),
            Line::from(Span::styled(artwork.description.as_str(), Style::default().fg(theme.text_fg))),
            Line::default(),
            field("Medium", &artwork.medium, theme),
            field("QR", &artwork.qr_code, theme),
            field("NFC", &artwork.nfc_code, theme),
        ];

        f.render_widget(
            Paragraph::new(text)
                .block(panel("Preview", theme))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
