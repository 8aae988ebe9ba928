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
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::{
    components::{
        PortfolioView,
        portfolio::{PortfolioTab, SendState, field_index},
    },
    model::contact::ContactField,
    render::{
        Render,
        icons::{ICON_DONE, ICON_LOCATION},
        widgets::{field, heading, panel},
    },
    theme::Theme,
};

impl Render for PortfolioView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        self.draw_banner(f, chunks[0], theme);
        self.draw_tabs(f, chunks[1], theme);

        match self.tab {
            PortfolioTab::Contact => self.draw_contact(f, chunks[2], theme),
            tab => {
                let text = match tab {
                    PortfolioTab::About => self.about_text(theme),
                    PortfolioTab::Skills => self.skills_text(theme),
                    PortfolioTab::Projects => self.projects_text(theme),
                    _ => self.experience_text(theme),
                };
                f.render_widget(
                    Paragraph::new(text)
                        .block(panel(&tab.to_string(), theme))
                        .wrap(Wrap { trim: false })
                        .scroll((self.scroll, 0)),
                    chunks[2],
                );
            }
        }
    }
}

impl PortfolioView {
    fn draw_banner(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let personal = &self.portfolio.personal;
        let text = vec![
            Line::from(Span::styled(personal.name.as_str(), Style::default().fg(theme.title_fg).bold())),
            Line::from(Span::styled(personal.title.as_str(), Style::default().fg(theme.accent_colour))),
            Line::from(Span::styled(personal.tagline.as_str(), Style::default().fg(theme.muted_fg))),
        ];
        f.render_widget(Paragraph::new(text).block(Block::default().borders(Borders::NONE)), area);
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let titles = PortfolioTab::ALL.iter().map(|t| t.to_string());
        let tabs = Tabs::new(titles)
            .style(Style::default().fg(theme.muted_fg))
            .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .select(PortfolioTab::ALL.iter().position(|t| *t == self.tab))
            .divider("|");
        f.render_widget(tabs, area);
    }

    fn about_text<'a>(&'a self, theme: &Theme) -> Vec<Line<'a>> {
        let about = &self.portfolio.about;
        let mut text = vec![
            Line::from(about.summary.as_str()),
            Line::default(),
            heading("Highlights", theme),
        ];
        text.extend(about.highlights.iter().map(|h| Line::from(format!("  {} {}", ICON_DONE, h))));
        text
    }

    fn skills_text<'a>(&'a self, theme: &Theme) -> Vec<Line<'a>> {
        let mut text = Vec::new();
        for group in &self.portfolio.skills {
            text.push(heading(&group.category, theme));
            text.push(Line::from(Span::styled(
                group.technologies.join("  "),
                Style::default().fg(theme.text_fg),
            )));
            text.push(Line::default());
        }
        text
    }

    fn projects_text<'a>(&'a self, theme: &Theme) -> Vec<Line<'a>> {
        let mut text = Vec::new();
        for project in &self.portfolio.projects {
            text.push(Line::from(vec![
                Span::styled(project.title.as_str(), Style::default().fg(theme.title_fg).bold()),
                Span::styled(format!("  [{}]", project.status), Style::default().fg(theme.muted_fg)),
            ]));
            text.push(Line::from(project.description.as_str()));
            text.extend(
                project
                    .features
                    .iter()
                    .map(|feature| Line::from(format!("  - {}", feature))),
            );
            text.push(Line::from(vec![
                Span::styled("Stack: ", Style::default().fg(theme.muted_fg)),
                Span::styled(project.technologies.join(", "), Style::default().fg(theme.artist_fg)),
            ]));
            if let Some(url) = &project.github_url {
                text.push(field("Code", url, theme));
            }
            if let Some(url) = &project.live_url {
                text.push(field("Live", url, theme));
            }
            text.push(Line::default());
        }
        text
    }

    fn experience_text<'a>(&'a self, theme: &Theme) -> Vec<Line<'a>> {
        let mut text = Vec::new();
        for job in &self.portfolio.experience {
            text.push(Line::from(vec![
                Span::styled(job.position.as_str(), Style::default().fg(theme.title_fg).bold()),
                Span::styled(format!(" at {}", job.company), Style::default().fg(theme.artist_fg)),
            ]));
            text.push(Line::from(Span::styled(
                format!("{}  {} {}", job.duration, ICON_LOCATION, job.location),
                Style::default().fg(theme.muted_fg),
            )));
            text.push(Line::from(job.description.as_str()));
            text.extend(
                job.achievements
                    .iter()
                    .map(|a| Line::from(format!("  {} {}", ICON_DONE, a))),
            );
            text.push(Line::default());
        }
        text
    }

    fn draw_contact(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let personal = &self.portfolio.personal;
        let details = vec![
            heading("Get in touch", theme),
            Line::default(),
            field("Email", &personal.email, theme),
            field("Location", &personal.location, theme),
            field("GitHub", &personal.github, theme),
            field("LinkedIn", &personal.linkedin, theme),
        ];
        f.render_widget(
            Paragraph::new(details)
                .block(panel("Contact", theme))
                .wrap(Wrap { trim: true }),
            columns[0],
        );

        let form_block = panel("Send a Message", theme);
        let inner = form_block.inner(columns[1]);
        f.render_widget(form_block, columns[1]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        for contact_field in ContactField::ALL {
            let row = rows[field_index(contact_field)];
            let focused = self.editing && contact_field == self.field;
            let border = if focused { theme.accent_colour } else { theme.border_colour };
            let input = self.input(contact_field);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(contact_field.label());
            let width = block.inner(row).width.max(1) as usize;
            let scroll = input.cursor().saturating_sub(width - 1);

            f.render_widget(
                Paragraph::new(input.value())
                    .style(Style::default().fg(theme.text_fg))
                    .scroll((0, scroll as u16))
                    .block(block),
                row,
            );

            if focused {
                let x = row.x + 1 + (input.cursor() - scroll) as u16;
                f.set_cursor_position((x, row.y + 1));
            }
        }

        let status = match self.send_state {
            SendState::Sending => Span::styled("Sending...", Style::default().fg(theme.accent_colour)),
            SendState::Sent => Span::styled(
                format!("{} Message sent", ICON_DONE),
                Style::default().fg(theme.success_fg),
            ),
            SendState::Idle if self.editing => {
                Span::styled("enter to send, esc to stop editing", Style::default().fg(theme.muted_fg))
            }
            SendState::Idle => Span::styled("press e to write a message", Style::default().fg(theme.muted_fg)),
        };
        f.render_widget(Paragraph::new(Line::from(status)), rows[4]);
    }
}
