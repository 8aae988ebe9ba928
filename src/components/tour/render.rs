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
    widgets::{Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    components::TourView,
    model::{Tour, tour::TourState},
    render::{
        Render,
        icons::{ICON_DONE, ICON_LOCATION, ICON_PAUSE, ICON_PENDING, ICON_PLAY, ICON_STOP, ICON_TIMER},
        widgets::{draw_not_found, field, heading, panel},
    },
    theme::Theme,
    util::format::{format_percent, format_time},
};

impl Render for TourView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(tour) = &self.tour else {
            let detail = format!("No tour with id '{}'", self.requested_id);
            draw_not_found(f, area, "Tour not found", &detail, theme);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_header(f, chunks[0], tour, theme);
        self.draw_progress(f, chunks[1], theme);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        self.draw_stops(f, body[0], tour, theme);
        self.draw_current_stop(f, body[1], tour, theme);
    }
}

impl TourView {
    fn draw_header(&self, f: &mut Frame, area: Rect, tour: &Tour, theme: &Theme) {
        let text = vec![
            Line::from(Span::styled(tour.name.as_str(), Style::default().fg(theme.title_fg).bold())),
            Line::from(Span::styled(tour.description.as_str(), Style::default().fg(theme.muted_fg))),
            Line::from(vec![
                Span::styled("Duration ", Style::default().fg(theme.muted_fg)),
                Span::styled(tour.duration.as_str(), Style::default().fg(theme.accent_colour)),
                Span::styled("   Artworks ", Style::default().fg(theme.muted_fg)),
                Span::styled(tour.stops.len().to_string(), Style::default().fg(theme.accent_colour)),
                Span::styled("   Self-Paced Experience", Style::default().fg(theme.muted_fg)),
            ]),
        ];

        f.render_widget(
            Paragraph::new(text)
                .block(panel("Tour", theme))
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn draw_progress(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = panel("Progress", theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(32)])
            .split(inner);

        let progress = self.run().progress();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
            .ratio(progress.clamp(0.0, 1.0))
            .label(format!(
                "{}/{} stops  {}",
                self.run().completed_count(),
                self.run().stop_count(),
                format_percent(progress)
            ))
            .use_unicode(true);
        f.render_widget(gauge, columns[0]);

        let (icon, state) = match self.run().state() {
            TourState::NotStarted => (ICON_STOP, "Not started"),
            TourState::Active => (ICON_PLAY, "In progress"),
            TourState::Paused => (ICON_PAUSE, "Paused"),
            TourState::Completed => (ICON_DONE, "Complete"),
        };
        let status = Line::from(vec![
            Span::styled(format!(" {} {} ", icon, state), Style::default().fg(theme.text_fg)),
            Span::styled(
                format!(" {} {}", ICON_TIMER, format_time(self.run().elapsed())),
                Style::default().fg(theme.accent_colour).bold(),
            ),
        ])
        .right_aligned();
        f.render_widget(Paragraph::new(status), columns[1]);
    }

    fn draw_stops(&self, f: &mut Frame, area: Rect, tour: &Tour, theme: &Theme) {
        let started = self.run().state() != TourState::NotStarted;

        let items: Vec<ListItem> = tour
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| {
                let (icon, colour) = if self.run().is_stop_completed(i) {
                    (ICON_DONE, theme.success_fg)
                } else if started && i == self.run().current_stop() {
                    (ICON_PLAY, theme.accent_colour)
                } else {
                    (ICON_PENDING, theme.muted_fg)
                };
                let title = self
                    .museum
                    .artwork(&stop.artwork)
                    .map(|a| a.title.as_str())
                    .unwrap_or(stop.artwork.as_str());
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", icon), Style::default().fg(colour)),
                    Span::styled(title, Style::default().fg(theme.text_fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(panel("Stops", theme))
            .highlight_style(Style::default().bg(theme.selection_bg).add_modifier(Modifier::BOLD));

        let mut state = ListState::default().with_selected(Some(self.run().current_stop()));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_current_stop(&self, f: &mut Frame, area: Rect, tour: &Tour, theme: &Theme) {
        if self.run().state() == TourState::Completed {
            let text = vec![
                heading("Tour Complete!", theme),
                Line::default(),
                Line::from(format!(
                    "You visited all {} stops in {}.",
                    self.run().stop_count(),
                    format_time(self.run().elapsed())
                )),
                Line::default(),
                Line::from(Span::styled(
                    "Press r to reset or s to take the tour again",
                    Style::default().fg(theme.muted_fg),
                )),
            ];
            f.render_widget(
                Paragraph::new(text)
                    .block(panel("Finished", theme))
                    .wrap(Wrap { trim: true }),
                area,
            );
            return;
        }

        let index = self.run().current_stop();
        let (Some(stop), Some(artwork)) = (tour.stops.get(index), self.current_artwork()) else {
            return;
        };

        let mut text = vec![
            Line::from(Span::styled(
                format!("Stop {} of {}", index + 1, tour.stops.len()),
                Style::default().fg(theme.muted_fg),
            )),
            Line::from(Span::styled(artwork.title.as_str(), Style::default().fg(theme.title_fg).bold())),
            Line::from(Span::styled(
                format!("{}, {}", artwork.artist, artwork.year),
                Style::default().fg(theme.artist_fg),
            )),
            Line::from(Span::styled(
                format!("{} {}", ICON_LOCATION, artwork.location),
                Style::default().fg(theme.muted_fg),
            )),
            Line::default(),
            field("Focus", &stop.focus, theme),
            field("Time here", &stop.duration, theme),
            Line::default(),
            Line::from(artwork.description.as_str()),
        ];

        if self.run().state() == TourState::NotStarted {
            text.push(Line::default());
            text.push(Line::from(Span::styled(
                "Press s to start the tour",
                Style::default().fg(theme.accent_colour),
            )));
        }

        f.render_widget(
            Paragraph::new(text)
                .block(panel("Current Stop", theme))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
