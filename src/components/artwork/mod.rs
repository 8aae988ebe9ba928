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

mod event;
mod render;

use crate::{data::Museum, model::Artwork};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArtworkTab {
    Overview,
    History,
    Technique,
}

impl ArtworkTab {
    pub(crate) const ALL: [ArtworkTab; 3] = [
        ArtworkTab::Overview,
        ArtworkTab::History,
        ArtworkTab::Technique,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ArtworkTab::Overview => "Overview",
            ArtworkTab::History => "History",
            ArtworkTab::Technique => "Technique",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub(crate) struct ArtworkView {
    requested_id: String,
    artwork: Option<Artwork>,
    is_favourite: bool,
    tab: ArtworkTab,
    scroll: u16,
}

impl ArtworkView {
    /// An unknown id still mounts, and renders as "not found".
    pub(crate) fn new(museum: &Museum, artwork_id: &str, favourites: &[String]) -> Self {
        Self {
            requested_id: artwork_id.to_string(),
            artwork: museum.artwork(artwork_id).cloned(),
            is_favourite: favourites.iter().any(|id| id == artwork_id),
            tab: ArtworkTab::Overview,
            scroll: 0,
        }
    }

    pub(crate) fn title(&self) -> String {
        match &self.artwork {
            Some(artwork) => artwork.title.clone(),
            None => "Artwork not found".to_string(),
        }
    }

    pub(crate) fn favourites_changed(&mut self, favourites: &[String]) {
        self.is_favourite = favourites.iter().any(|id| *id == self.requested_id);
    }

    fn set_tab(&mut self, tab: ArtworkTab) {
        self.tab = tab;
        self.scroll = 0;
    }
}

/// The text offered when the visitor shares an artwork.
pub(crate) fn share_text(artwork: &Artwork) -> String {
    format!("Check out {} by {}", artwork.title, artwork.artist)
}
