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

use std::{collections::HashSet, sync::Arc};

use crate::{
    components::Selector,
    data::Museum,
    model::{Artwork, Category},
};

pub(crate) struct GalleryView {
    museum: Arc<Museum>,
    category: Category,
    artwork_ids: Vec<String>,
    favourites: HashSet<String>,
    selector: Selector,
}

impl GalleryView {
    pub(crate) fn new(museum: Arc<Museum>, category: Category, favourites: &[String]) -> Self {
        let artwork_ids: Vec<String> = museum.artworks_in(category).map(|a| a.id.clone()).collect();

        Self {
            selector: Selector::new(artwork_ids.len()),
            museum,
            category,
            artwork_ids,
            favourites: favourites.iter().cloned().collect(),
        }
    }

    pub(crate) fn title(&self) -> String {
        self.museum
            .section(self.category)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| self.category.to_string())
    }

    pub(crate) fn favourites_changed(&mut self, favourites: &[String]) {
        self.favourites = favourites.iter().cloned().collect();
    }

    fn selected_artwork(&self) -> Option<&Artwork> {
        let id = self.artwork_ids.get(self.selector.selected()?)?;
        self.museum.artwork(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_the_category() {
        let museum = Arc::new(Museum::load().unwrap());
        let view = GalleryView::new(museum.clone(), Category::Sculptures, &[]);

        assert_eq!(view.artwork_ids.len(), museum.artwork_count(Category::Sculptures));
        assert!(
            view.artwork_ids
                .iter()
                .all(|id| museum.artwork(id).unwrap().category == Category::Sculptures)
        );
        assert_eq!(view.selected_artwork().unwrap().id, view.artwork_ids[0]);
    }
}
