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
    widgets::{Paragraph, Tabs, Wrap},
};

use crate::{
    components::{
        ArtworkView,
        artwork::ArtworkTab,
    },
    model::Artwork,
    render::{
        Render,
        icons::ICON_LOCATION,
        widgets::{draw_not_found, favourite_marker, field, heading, panel},
    },
    theme::Theme,
};

impl Render for ArtworkView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(artwork) = &self.artwork else {
            let detail = format!("No artwork with id '{}'", self.requested_id);
            draw_not_found(f, area, "Artwork not found", &detail, theme);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        draw_summary(f, chunks[0], artwork, self.is_favourite, theme);

        let selected = ArtworkTab::ALL.iter().position(|t| *t == self.tab);
        let tabs = Tabs::new(ArtworkTab::ALL.iter().map(|t| t.label()))
            .select(selected)
            .style(Style::default().fg(theme.muted_fg))
            .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[1]);

        let body = match self.tab {
            ArtworkTab::Overview => overview(artwork, theme),
            ArtworkTab::History => history(artwork, theme),
            ArtworkTab::Technique => technique(artwork, theme),
        };

        f.render_widget(
            Paragraph::new(body)
                .block(panel(self.tab.label(), theme))
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0)),
            chunks[2],
        );
    }
}

fn draw_summary(f: &mut Frame, area: Rect, artwork: &Artwork, is_favourite: bool, theme: &Theme) {
    let text = vec![
        Line::from(vec![
            favourite_marker(is_favourite, theme),
            Span::raw(" "),
            Span::styled(artwork.title.as_str(), Style::default().fg(theme.title_fg).bold()),
        ]),
        Line::from(Span::styled(
            format!("{}, {}", artwork.artist, artwork.year),
            Style::default().fg(theme.artist_fg),
        )),
        Line::from(Span::styled(
            format!("{} {}   {}", ICON_LOCATION, artwork.location, artwork.category),
            Style::default().fg(theme.muted_fg),
        )),
    ];

    f.render_widget(Paragraph::new(text).block(panel("Artwork", theme)), area);
}

fn overview<'a>(artwork: &'a Artwork, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(artwork.description.as_str()),
        Line::default(),
        heading("Interesting Facts", theme),
    ];
    lines.extend(
        artwork
            .interesting_facts
            .iter()
            .map(|fact| Line::from(format!("\u{2022} {}", fact))),
    );
    lines
}

fn history<'a>(artwork: &'a Artwork, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        heading("About the Artist", theme),
        Line::from(artwork.artist_info.as_str()),
        Line::default(),
        heading("Historical Context", theme),
        Line::from(artwork.historical_context.as_str()),
        Line::default(),
        heading("Cultural Significance", theme),
        Line::from(artwork.cultural_significance.as_str()),
    ]
}

fn technique<'a>(artwork: &'a Artwork, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        heading("Techniques", theme),
        Line::from(artwork.techniques.as_str()),
        Line::default(),
        field("Medium", &artwork.medium, theme),
        field("Dimensions", &artwork.dimensions, theme),
        field("Provenance", &artwork.provenance, theme),
        Line::default(),
        field("QR code", &artwork.qr_code, theme),
        field("NFC tag", &artwork.nfc_code, theme),
    ]
}
