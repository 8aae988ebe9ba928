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
    components::ToursView,
    data::CUSTOM_TOUR_ID,
    render::{
        Render,
        icons::{FAVOURITE, ICON_TIMER},
        widgets::{heading, panel},
    },
    theme::Theme,
    util::format::count_of,
};

impl Render for ToursView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_list(f, chunks[0], theme);
        self.draw_stops(f, chunks[1], theme);
    }
}

impl ToursView {
    fn draw_list(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .tours
            .iter()
            .map(|tour| {
                let marker = if tour.id == CUSTOM_TOUR_ID { FAVOURITE } else { " " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", marker), Style::default().fg(theme.favourite_fg)),
                        Span::styled(tour.name.as_str(), Style::default().fg(theme.title_fg).bold()),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "  {} {}  {}",
                            ICON_TIMER,
                            tour.duration,
                            count_of(tour.stops.len(), "stop")
                        ),
                        Style::default().fg(theme.accent_colour),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", tour.description),
                        Style::default().fg(theme.muted_fg),
                    )),
                    Line::default(),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(panel("Expert-curated journeys through art", theme))
            .highlight_style(Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, area, self.selector.state_mut());
    }

    fn draw_stops(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(tour) = self.selected_tour() else {
            return;
        };

        let mut text = vec![heading(&tour.name, theme), Line::default()];
        for (i, stop) in tour.stops.iter().enumerate() {
            let title = self
                .museum
                .artwork(&stop.artwork)
                .map(|a| a.title.as_str())
                .unwrap_or(stop.artwork.as_str());
            text.push(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(theme.muted_fg)),
                Span::styled(title, Style::default().fg(theme.title_fg)),
                Span::styled(format!("  {}", stop.duration), Style::default().fg(theme.accent_colour)),
            ]));
            text.push(Line::from(Span::styled(
                format!("    {}", stop.focus),
                Style::default().fg(theme.muted_fg),
            )));
        }

        f.render_widget(
            Paragraph::new(text)
                .block(panel("Stops", theme))
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}
