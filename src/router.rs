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

//! Path based navigation between screens.
//!
//! Every screen of the guide is reachable through a path such as
//! `/artwork/starry-night`. A navigation pairs the parsed [`Route`] with the
//! [`NavParams`] the previous screen wanted to hand over, and the [`Router`]
//! keeps a history of them so the visitor can go back.
//!
//! Each navigation also bumps the router generation. Work started on behalf of
//! a screen records the generation it was started under, and its result is
//! thrown away if the generation has moved on by the time it arrives.

use std::fmt;

use crate::{
    error::{GuideError, GuideResult},
    model::Category,
};

const MAX_HISTORY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Gallery(Category),
    Artwork(String),
    Scanner,
    Ar,
    Tours,
    Tour(String),
    Favourites,
    Portfolio,
}

impl Route {
    /// Parses a path such as `/gallery/paintings`.
    ///
    /// A trailing slash is ignored and a missing leading slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::UnknownRoute`] if no screen answers to the path.
    pub(crate) fn parse(path: &str) -> GuideResult<Self> {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["gallery", category] => {
                Route::Gallery(Category::from_id(category).ok_or_else(|| unknown(path))?)
            }
            ["artwork", id] if !id.is_empty() => Route::Artwork(id.to_string()),
            ["scanner"] => Route::Scanner,
            ["ar"] => Route::Ar,
            ["tours"] => Route::Tours,
            ["tour", id] if !id.is_empty() => Route::Tour(id.to_string()),
            ["favorites"] | ["favourites"] => Route::Favourites,
            ["portfolio"] => Route::Portfolio,
            _ => return Err(unknown(path)),
        };

        Ok(route)
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Gallery(category) => format!("/gallery/{}", category.id()),
            Route::Artwork(id) => format!("/artwork/{}", id),
            Route::Scanner => "/scanner".to_string(),
            Route::Ar => "/ar".to_string(),
            Route::Tours => "/tours".to_string(),
            Route::Tour(id) => format!("/tour/{}", id),
            Route::Favourites => "/favorites".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn unknown(path: &str) -> GuideError {
    GuideError::UnknownRoute(path.trim().to_string())
}

/// Context handed from one screen to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NavParams {
    /// A code the scanner should read as soon as it opens.
    pub(crate) target_qr: Option<String>,

    /// The artwork the AR screen should show.
    pub(crate) artwork_id: Option<String>,

    /// Artwork ids to offer as a custom tour.
    pub(crate) custom_artworks: Option<Vec<String>>,
}

impl NavParams {
    pub(crate) fn scan(code: impl Into<String>) -> Self {
        Self {
            target_qr: Some(code.into()),
            ..Self::default()
        }
    }

    pub(crate) fn artwork(id: impl Into<String>) -> Self {
        Self {
            artwork_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub(crate) fn custom_tour(ids: Vec<String>) -> Self {
        Self {
            custom_artworks: Some(ids),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Navigation {
    pub(crate) route: Route,
    pub(crate) params: NavParams,
}

#[derive(Debug)]
pub(crate) struct Router {
    current: Navigation,
    history: Vec<Navigation>,
    generation: u64,
}

impl Router {
    pub(crate) fn new() -> Self {
        Self {
            current: Navigation {
                route: Route::Home,
                params: NavParams::default(),
            },
            history: Vec::new(),
            generation: 0,
        }
    }

    pub(crate) fn current(&self) -> &Navigation {
        &self.current
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result requested under `generation` is still wanted.
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub(crate) fn navigate(&mut self, route: Route, params: NavParams) -> &Navigation {
        let previous = std::mem::replace(&mut self.current, Navigation { route, params });
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.generation += 1;
        &self.current
    }

    /// Returns to the previous screen, with the parameters it was opened with.
    ///
    /// Does nothing and returns `None` when there is no history.
    pub(crate) fn back(&mut self) -> Option<&Navigation> {
        let previous = self.history.pop()?;
        self.current = previous;
        self.generation += 1;
        Some(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_parses_from_its_own_path() {
        let routes = [
            Route::Home,
            Route::Gallery(Category::Paintings),
            Route::Gallery(Category::Sculptures),
            Route::Gallery(Category::Historical),
            Route::Artwork("mona-lisa".to_string()),
            Route::Scanner,
            Route::Ar,
            Route::Tours,
            Route::Tour("highlights-tour".to_string()),
            Route::Favourites,
            Route::Portfolio,
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn parse_is_lenient_about_slashes() {
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("scanner/").unwrap(), Route::Scanner);
        assert_eq!(
            Route::parse(" /tour/art-history-tour ").unwrap(),
            Route::Tour("art-history-tour".to_string())
        );
        assert_eq!(Route::parse("/favourites").unwrap(), Route::Favourites);
    }

    #[test]
    fn unknown_paths_are_errors() {
        for path in ["/nowhere", "/gallery/furniture", "/artwork", "/tour/a/b"] {
            assert!(matches!(
                Route::parse(path),
                Err(GuideError::UnknownRoute(_))
            ));
        }
    }

    #[test]
    fn navigation_carries_params_and_history() {
        let mut router = Router::new();
        assert!(!router.can_go_back());

        router.navigate(Route::Scanner, NavParams::scan("QR001"));
        router.navigate(Route::Ar, NavParams::artwork("mona-lisa"));

        assert_eq!(router.current().route, Route::Ar);
        assert_eq!(
            router.current().params.artwork_id.as_deref(),
            Some("mona-lisa")
        );

        let back = router.back().unwrap();
        assert_eq!(back.route, Route::Scanner);
        assert_eq!(back.params.target_qr.as_deref(), Some("QR001"));

        assert_eq!(router.back().unwrap().route, Route::Home);
        assert!(router.back().is_none());
        assert_eq!(router.current().route, Route::Home);
    }

    #[test]
    fn generation_moves_with_every_navigation() {
        let mut router = Router::new();
        let started = router.generation();
        assert!(router.is_current(started));

        router.navigate(Route::Tours, NavParams::default());
        assert!(!router.is_current(started));

        let on_tours = router.generation();
        router.back();
        assert!(!router.is_current(on_tours));

        // Nothing to go back to, nothing changes.
        let at_home = router.generation();
        router.back();
        assert!(router.is_current(at_home));
    }

    #[test]
    fn history_is_bounded() {
        let mut router = Router::new();
        for _ in 0..(MAX_HISTORY + 10) {
            router.navigate(Route::Tours, NavParams::default());
        }

        let mut steps = 0;
        while router.back().is_some() {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY);
    }
}
