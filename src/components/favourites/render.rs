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
    widgets::{Cell, Paragraph, Row, Table, TableState, Wrap},
};

use crate::{
    components::FavouritesView,
    model::Category,
    render::{
        Render,
        icons::{FAVOURITE, ICON_LOCATION},
        widgets::{heading, panel},
    },
    theme::Theme,
    util::format::count_of,
};

impl Render for FavouritesView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.artwork_ids.is_empty() {
            self.draw_empty(f, area, theme);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.draw_table(f, chunks[0], theme);
        self.draw_stats(f, chunks[1], theme);
    }
}

impl FavouritesView {
    fn draw_empty(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = vec![
            Line::default(),
            Line::from(Span::styled(
                format!("{} No favourites yet", FAVOURITE),
                Style::default().fg(theme.favourite_fg).bold(),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press f on any artwork to add it to your collection",
                Style::default().fg(theme.muted_fg),
            )),
        ];

        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(panel("My Favourites", theme)),
            area,
        );
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.artworks().map(|artwork| {
            Row::new(vec![
                Cell::from(Line::from(artwork.title.as_str()).style(Style::default().fg(theme.title_fg))),
                Cell::from(Line::from(artwork.artist.as_str()).style(Style::default().fg(theme.artist_fg))),
                Cell::from(
                    Line::from(format!("{} {}", ICON_LOCATION, artwork.location))
                        .style(Style::default().fg(theme.muted_fg)),
                ),
            ])
        });

        let title = count_of(self.artwork_ids.len(), "favourite");
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ],
        )
        .header(
            Row::new(vec!["Title", "Artist", "Location"])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD))
        .block(panel(&title, theme));

        let mut state = TableState::default().with_selected(self.selector.selected());
        f.render_stateful_widget(table, area, &mut state);
    }

    fn draw_stats(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut text = vec![heading("Collection", theme), Line::default()];

        for category in Category::ALL {
            let name = self
                .museum
                .section(category)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| category.to_string());
            text.push(Line::from(vec![
                Span::styled(format!("{:<20}", name), Style::default().fg(theme.muted_fg)),
                Span::styled(
                    self.count_in(category).to_string(),
                    Style::default().fg(theme.accent_colour).bold(),
                ),
            ]));
        }

        if let Some(artwork) = self.selected_artwork() {
            text.push(Line::default());
            text.push(heading("Selected", theme));
            text.push(Line::from(Span::styled(
                format!("{}, {}", artwork.artist, artwork.year),
                Style::default().fg(theme.artist_fg),
            )));
            text.push(Line::from(Span::styled(
                artwork.description.as_str(),
                Style::default().fg(theme.text_fg),
            )));
        }

        f.render_widget(
            Paragraph::new(text)
                .block(panel("Stats", theme))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
