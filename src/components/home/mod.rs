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

use std::sync::Arc;

use crate::{
    components::Selector,
    data::Museum,
    model::Category,
    router::Route,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HomeItem {
    Section(Category),
    Link(&'static str, &'static str, Route),
}

const LINKS: [(&str, &str, Route); 5] = [
    ("Scan Artwork", "Point at a QR code or tap an NFC tag", Route::Scanner),
    ("AR Experience", "See artworks come alive", Route::Ar),
    ("Guided Tours", "Expert-curated journeys through art", Route::Tours),
    ("My Favourites", "Artworks you have saved", Route::Favourites),
    ("Portfolio", "About the author of this guide", Route::Portfolio),
];

pub(crate) struct HomeView {
    museum: Arc<Museum>,
    items: Vec<HomeItem>,
    selector: Selector,
    favourite_count: usize,
}

impl HomeView {
    pub(crate) fn new(museum: Arc<Museum>, favourites: &[String]) -> Self {
        let items: Vec<HomeItem> = museum
            .sections()
            .iter()
            .map(|s| HomeItem::Section(s.id))
            .chain(
                LINKS
                    .into_iter()
                    .map(|(label, blurb, route)| HomeItem::Link(label, blurb, route)),
            )
            .collect();

        Self {
            selector: Selector::new(items.len()),
            museum,
            items,
            favourite_count: favourites.len(),
        }
    }

    pub(crate) fn favourites_changed(&mut self, favourites: &[String]) {
        self.favourite_count = favourites.len();
    }

    fn route_for(&self, index: usize) -> Option<Route> {
        match self.items.get(index)? {
            HomeItem::Section(category) => Some(Route::Gallery(*category)),
            HomeItem::Link(_, _, route) => Some(route.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_come_before_links() {
        let museum = Arc::new(Museum::load().unwrap());
        let view = HomeView::new(museum, &[]);

        assert_eq!(view.items.len(), 3 + LINKS.len());
        assert_eq!(view.route_for(0), Some(Route::Gallery(Category::Paintings)));
        assert_eq!(view.route_for(3), Some(Route::Scanner));
        assert_eq!(view.route_for(99), None);
    }
}
