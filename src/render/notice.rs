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
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    model::notice::{Notice, NoticeKind},
    theme::Theme,
};

const NOTICE_WIDTH: u16 = 48;
const NOTICE_HEIGHT: u16 = 5;

/// Draws a notice in the bottom right corner of `area`.
pub(crate) fn draw_notice(f: &mut Frame, area: Rect, notice: &Notice, theme: &Theme) {
    let width = NOTICE_WIDTH.min(area.width);
    let height = NOTICE_HEIGHT.min(area.height);
    let popup = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };

    let colour = match notice.kind {
        NoticeKind::Info => theme.success_fg,
        NoticeKind::Error => theme.error_fg,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    let text = vec![
        Line::from(Span::styled(
            notice.title.as_str(),
            Style::default().fg(colour).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            notice.description.as_str(),
            Style::default().fg(theme.text_fg),
        )),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
