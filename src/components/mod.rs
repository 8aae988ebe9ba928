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

//! The screens of the guide.
//!
//! Each route mounts exactly one [`Screen`]. A screen owns the state the
//! visitor builds up while on it (cursor positions, tabs, a running tour) and
//! that state is dropped when the visitor navigates away. Screens never
//! change shared state directly; they ask for it with [`AppEvent`]s.

mod ar;
mod artwork;
mod favourites;
mod gallery;
mod home;
mod portfolio;
mod scanner;
mod selector;
mod tour;
mod tours;

pub(crate) use ar::ArView;
pub(crate) use artwork::ArtworkView;
pub(crate) use favourites::FavouritesView;
pub(crate) use gallery::GalleryView;
pub(crate) use home::HomeView;
pub(crate) use portfolio::PortfolioView;
pub(crate) use scanner::ScannerView;
pub(crate) use selector::{Selector, SelectorAction};
pub(crate) use tour::TourView;
pub(crate) use tours::ToursView;

use std::sync::{Arc, mpsc::Sender};

use anyhow::Result;
use crossterm::event::Event;
use ratatui::{Frame, layout::Rect};

use crate::{
    data::Museum,
    error::GuideError,
    events::{AppEvent, AppEventProcessor, Focus},
    model::portfolio::Portfolio,
    render::Render,
    router::{Navigation, Route},
    theme::Theme,
};

/// What a screen may read while it is being mounted.
pub(crate) struct MountContext<'a> {
    pub(crate) museum: &'a Arc<Museum>,
    pub(crate) portfolio: &'a Arc<Portfolio>,
    pub(crate) favourites: &'a [String],
    pub(crate) generation: u64,
    pub(crate) event_tx: &'a Sender<AppEvent>,
}

pub(crate) enum Screen {
    Home(HomeView),
    Gallery(GalleryView),
    Artwork(ArtworkView),
    Scanner(ScannerView),
    Ar(ArView),
    Tours(ToursView),
    Tour(TourView),
    Favourites(FavouritesView),
    Portfolio(PortfolioView),
}

impl Screen {
    /// Creates the screen for a navigation.
    ///
    /// # Errors
    ///
    /// Returns an error if a screen cannot queue the work it starts with.
    pub(crate) fn mount(nav: &Navigation, ctx: &MountContext) -> Result<Self> {
        let museum = ctx.museum.clone();

        let screen = match &nav.route {
            Route::Home => Screen::Home(HomeView::new(museum, ctx.favourites)),
            Route::Gallery(category) => {
                Screen::Gallery(GalleryView::new(museum, *category, ctx.favourites))
            }
            Route::Artwork(id) => Screen::Artwork(ArtworkView::new(&museum, id, ctx.favourites)),
            Route::Scanner => {
                let view = ScannerView::new(museum);
                view.on_mount(&nav.params, ctx.event_tx)?;
                Screen::Scanner(view)
            }
            Route::Ar => Screen::Ar(ArView::new(&museum, nav.params.artwork_id.as_deref())),
            Route::Tours => {
                Screen::Tours(ToursView::new(&museum, nav.params.custom_artworks.as_deref()))
            }
            Route::Tour(id) => Screen::Tour(TourView::new(
                &museum,
                id,
                nav.params.custom_artworks.as_deref(),
                ctx.generation,
            )),
            Route::Favourites => Screen::Favourites(FavouritesView::new(museum, ctx.favourites)),
            Route::Portfolio => Screen::Portfolio(PortfolioView::new(ctx.portfolio.clone())),
        };

        Ok(screen)
    }

    pub(crate) fn title(&self) -> String {
        match self {
            Screen::Home(_) => "Museum Guide".to_string(),
            Screen::Gallery(view) => view.title(),
            Screen::Artwork(view) => view.title(),
            Screen::Scanner(_) => "Scan Artwork".to_string(),
            Screen::Ar(_) => "AR Experience".to_string(),
            Screen::Tours(_) => "Guided Tours".to_string(),
            Screen::Tour(view) => view.title(),
            Screen::Favourites(_) => "My Favourites".to_string(),
            Screen::Portfolio(_) => "Portfolio".to_string(),
        }
    }

    /// Keys the screen responds to, as (key, action) pairs.
    pub(crate) fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Screen::Home(_) => &[("j/k", "move"), ("enter", "open")],
            Screen::Gallery(_) => &[
                ("enter", "details"),
                ("f", "favourite"),
                ("s", "scan"),
                ("a", "AR"),
            ],
            Screen::Artwork(_) => &[
                ("tab", "section"),
                ("j/k", "scroll"),
                ("f", "favourite"),
                ("s", "scan"),
                ("a", "AR"),
                ("y", "share"),
            ],
            Screen::Scanner(_) => &[
                ("m", "QR/NFC"),
                ("enter", "scan"),
                ("v", "details"),
                ("a", "AR"),
                ("c", "clear"),
            ],
            Screen::Ar(_) => &[
                ("enter", "start"),
                ("m", "mode"),
                ("d/i/n", "3D/info/anim"),
                ("o", "audio"),
                ("p", "animation"),
                ("x", "stop"),
            ],
            Screen::Tours(_) => &[("j/k", "move"), ("enter", "take tour")],
            Screen::Tour(_) => &[
                ("s", "start"),
                ("space", "pause"),
                ("n", "next"),
                ("p", "previous"),
                ("r", "reset"),
                ("v", "artwork"),
                ("c", "scan"),
                ("a", "AR"),
            ],
            Screen::Favourites(_) => &[
                ("enter", "open"),
                ("d", "remove"),
                ("C", "clear all"),
                ("t", "custom tour"),
                ("y", "share"),
            ],
            Screen::Portfolio(view) if view.is_editing() => &[
                ("tab", "next field"),
                ("enter", "send"),
                ("esc", "stop editing"),
            ],
            Screen::Portfolio(_) => &[("tab", "section"), ("j/k", "scroll"), ("e", "write")],
        }
    }

    /// What went wrong while mounting, for screens that can mount empty.
    pub(crate) fn mount_error(&self) -> Option<GuideError> {
        match self {
            Screen::Tour(view) => view.missing_tour(),
            _ => None,
        }
    }

    pub(crate) fn focus(&self) -> Focus {
        match self {
            Screen::Portfolio(view) if view.is_editing() => Focus::Input,
            _ => Focus::None,
        }
    }

    /// Advances animations; called on every UI tick.
    pub(crate) fn tick(&mut self) {
        match self {
            Screen::Scanner(view) => view.tick(),
            Screen::Ar(view) => view.tick(),
            _ => {}
        }
    }

    /// Brings favourite markers in line with the registry.
    pub(crate) fn favourites_changed(&mut self, favourites: &[String]) {
        match self {
            Screen::Home(view) => view.favourites_changed(favourites),
            Screen::Gallery(view) => view.favourites_changed(favourites),
            Screen::Artwork(view) => view.favourites_changed(favourites),
            Screen::Favourites(view) => view.favourites_changed(favourites),
            _ => {}
        }
    }
}

impl AppEventProcessor for Screen {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        match self {
            Screen::Home(view) => view.process_event(event, event_tx),
            Screen::Gallery(view) => view.process_event(event, event_tx),
            Screen::Artwork(view) => view.process_event(event, event_tx),
            Screen::Scanner(view) => view.process_event(event, event_tx),
            Screen::Ar(view) => view.process_event(event, event_tx),
            Screen::Tours(view) => view.process_event(event, event_tx),
            Screen::Tour(view) => view.process_event(event, event_tx),
            Screen::Favourites(view) => view.process_event(event, event_tx),
            Screen::Portfolio(view) => view.process_event(event, event_tx),
        }
    }
}

impl Render for Screen {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        match self {
            Screen::Home(view) => view.draw(f, area, theme),
            Screen::Gallery(view) => view.draw(f, area, theme),
            Screen::Artwork(view) => view.draw(f, area, theme),
            Screen::Scanner(view) => view.draw(f, area, theme),
            Screen::Ar(view) => view.draw(f, area, theme),
            Screen::Tours(view) => view.draw(f, area, theme),
            Screen::Tour(view) => view.draw(f, area, theme),
            Screen::Favourites(view) => view.draw(f, area, theme),
            Screen::Portfolio(view) => view.draw(f, area, theme),
        }
    }
}
