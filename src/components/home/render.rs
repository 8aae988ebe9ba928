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
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::{
    components::{HomeView, home::HomeItem},
    render::{Render, widgets::panel},
    theme::Theme,
    util::format::count_of,
};

impl Render for HomeView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.draw_welcome(f, chunks[0], theme);
        self.draw_items(f, chunks[1], theme);
    }
}

impl HomeView {
    fn draw_welcome(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = panel("Welcome", theme);

        let text = vec![
            Line::from(Span::styled(
                "Discover art through your terminal",
                Style::default().fg(theme.title_fg).bold(),
            )),
            Line::from(vec![
                Span::styled(count_of(self.museum.artworks().len(), "artwork"), Style::default().fg(theme.accent_colour)),
                Span::styled(" in ", Style::default().fg(theme.muted_fg)),
                Span::styled(count_of(self.museum.sections().len(), "gallery section"), Style::default().fg(theme.accent_colour)),
                Span::styled(", ", Style::default().fg(theme.muted_fg)),
                Span::styled(count_of(self.museum.tours().len(), "guided tour"), Style::default().fg(theme.accent_colour)),
                Span::styled(", ", Style::default().fg(theme.muted_fg)),
                Span::styled(count_of(self.favourite_count, "favourite"), Style::default().fg(theme.favourite_fg)),
            ]),
            Line::from(Span::styled(
                "Scan a code beside any artwork to learn its story.",
                Style::default().fg(theme.muted_fg),
            )),
        ];

        f.render_widget(
            Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn draw_items(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| match item {
                HomeItem::Section(category) => {
                    let count = self.museum.artwork_count(*category);
                    let (icon, name, description) = match self.museum.section(*category) {
                        Some(s) => (s.icon.as_str(), s.name.as_str(), s.description.as_str()),
                        None => ("", "", ""),
                    };
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::raw(format!("{} ", icon)),
                            Span::styled(name, Style::default().fg(theme.title_fg).bold()),
                            Span::styled(
                                format!("  {}", count_of(count, "artwork")),
                                Style::default().fg(theme.accent_colour),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("   {}", description),
                            Style::default().fg(theme.muted_fg),
                        )),
                    ])
                }
                HomeItem::Link(label, blurb, _) => ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("\u{2192} {}", label),
                        Style::default().fg(theme.text_fg).bold(),
                    )),
                    Line::from(Span::styled(
                        format!("   {}", blurb),
                        Style::default().fg(theme.muted_fg),
                    )),
                ]),
            })
            .collect();

        let list = List::new(items)
            .block(panel("Explore", theme))
            .highlight_style(
                Style::default()
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            );

        f.render_stateful_widget(list, area, self.selector.state_mut());
    }
}
