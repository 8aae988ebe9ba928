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
    data::{CUSTOM_TOUR_ID, Museum},
    model::Tour,
    router::{NavParams, Route},
};

pub(crate) struct ToursView {
    museum: Arc<Museum>,
    tours: Vec<Tour>,
    custom_artworks: Option<Vec<String>>,
    selector: Selector,
}

impl ToursView {
    /// Lists the museum's tours, preceded by a tour of `custom_artworks` when
    /// any of them are known artworks.
    pub(crate) fn new(museum: &Arc<Museum>, custom_artworks: Option<&[String]>) -> Self {
        let custom = custom_artworks.and_then(|ids| museum.custom_tour(ids));
        let custom_artworks = custom
            .as_ref()
            .and(custom_artworks.map(|ids| ids.to_vec()));

        let tours: Vec<Tour> = custom
            .into_iter()
            .chain(museum.tours().iter().cloned())
            .collect();

        Self {
            museum: museum.clone(),
            selector: Selector::new(tours.len()),
            tours,
            custom_artworks,
        }
    }

    fn selected_tour(&self) -> Option<&Tour> {
        self.tours.get(self.selector.selected()?)
    }

    fn navigation_for(&self, tour: &Tour) -> (Route, NavParams) {
        let route = Route::Tour(tour.id.clone());
        match &self.custom_artworks {
            Some(ids) if tour.id == CUSTOM_TOUR_ID => (route, NavParams::custom_tour(ids.clone())),
            _ => (route, NavParams::default()),
        }
    }
}
