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
    model::{Artwork, Category},
};

pub(crate) struct FavouritesView {
    museum: Arc<Museum>,
    artwork_ids: Vec<String>,
    selector: Selector,
}

impl FavouritesView {
    pub(crate) fn new(museum: Arc<Museum>, favourites: &[String]) -> Self {
        let mut view = Self {
            museum,
            artwork_ids: Vec::new(),
            selector: Selector::new(0),
        };
        view.favourites_changed(favourites);
        view
    }

    /// Ids no longer in the museum are skipped rather than shown as blanks.
    pub(crate) fn favourites_changed(&mut self, favourites: &[String]) {
        self.artwork_ids = favourites
            .iter()
            .filter(|id| self.museum.artwork(id).is_some())
            .cloned()
            .collect();
        self.selector.set_len(self.artwork_ids.len());
    }

    fn artworks(&self) -> impl Iterator<Item = &Artwork> {
        self.artwork_ids.iter().filter_map(|id| self.museum.artwork(id))
    }

    fn selected_artwork(&self) -> Option<&Artwork> {
        let id = self.artwork_ids.get(self.selector.selected()?)?;
        self.museum.artwork(id)
    }

    fn count_in(&self, category: Category) -> usize {
        self.artworks().filter(|a| a.category == category).count()
    }

    fn share_text(&self) -> String {
        let titles: Vec<&str> = self.artworks().map(|a| a.title.as_str()).collect();
        format!("My favorite artworks from the museum: {}", titles.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(favourites: &[&str]) -> FavouritesView {
        let museum = Arc::new(Museum::load().unwrap());
        let ids: Vec<String> = favourites.iter().map(|s| s.to_string()).collect();
        FavouritesView::new(museum, &ids)
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let view = view(&["david", "lost-painting", "mona-lisa"]);
        assert_eq!(view.artwork_ids, vec!["david", "mona-lisa"]);
        assert_eq!(view.selector.selected(), Some(0));
    }

    #[test]
    fn stats_are_per_category() {
        let view = view(&["david", "mona-lisa", "starry-night"]);
        assert_eq!(view.count_in(Category::Paintings), 2);
        assert_eq!(view.count_in(Category::Sculptures), 1);
        assert_eq!(view.count_in(Category::Historical), 0);
    }

    #[test]
    fn share_lists_titles_in_order() {
        let view = view(&["david", "mona-lisa"]);
        assert_eq!(
            view.share_text(),
            "My favorite artworks from the museum: David, Mona Lisa"
        );
    }

    #[test]
    fn removal_keeps_selection_in_range() {
        let mut view = view(&["david", "mona-lisa"]);
        view.selector.state_mut().select(Some(1));

        view.favourites_changed(&["david".to_string()]);
        assert_eq!(view.selected_artwork().unwrap().id, "david");

        view.favourites_changed(&[]);
        assert!(view.selected_artwork().is_none());
    }
}
