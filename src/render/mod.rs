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

mod commander;
pub(crate) mod icons;
mod notice;
pub(crate) mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    components::Screen,
    render::{commander::draw_commander, notice::draw_notice, widgets::key_hints},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

const NAV_ITEMS: [(&str, &str); 6] = [
    ("1", "Home"),
    ("2", "Scanner"),
    ("3", "Tours"),
    ("4", "Favourites"),
    ("5", "AR"),
    ("6", "Portfolio"),
];

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: header, main, key hints, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let theme = app.theme;
    app.screen.draw(f, outer[1], &theme);

    let mut hints = app.screen.key_hints().to_vec();
    if app.router.can_go_back() {
        hints.push(("esc", "back"));
    }
    let hints = key_hints(&hints, &theme);
    f.render_widget(Paragraph::new(hints), outer[2]);

    draw_commander(f, outer[3], app);

    if let Some(notice) = &app.notice {
        draw_notice(f, outer[1], notice, &theme);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(rows[0]);

    let active = active_nav_item(&app.screen);

    let mut spans = vec![Span::styled(
        " amuse ",
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(theme.background_colour)
            .bg(theme.accent_colour),
    )];
    for (i, (key, label)) in NAV_ITEMS.iter().enumerate() {
        let style = if Some(i) == active {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_fg)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{} {}", key, label), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    let location = Line::from(vec![
        Span::styled(app.screen.title(), Style::default().fg(theme.title_fg).bold()),
        Span::styled(format!("  {} ", app.router.current().route), Style::default().fg(theme.muted_fg)),
    ])
    .right_aligned();
    f.render_widget(Paragraph::new(location), columns[1]);

    f.render_widget(
        Paragraph::new("\u{2500}".repeat(rows[1].width as usize)).fg(theme.border_colour),
        rows[1],
    );
}

fn active_nav_item(screen: &Screen) -> Option<usize> {
    match screen {
        Screen::Home(_) => Some(0),
        Screen::Scanner(_) => Some(1),
        Screen::Tours(_) | Screen::Tour(_) => Some(2),
        Screen::Favourites(_) => Some(3),
        Screen::Ar(_) => Some(4),
        Screen::Portfolio(_) => Some(5),
        Screen::Gallery(_) | Screen::Artwork(_) => None,
    }
}
