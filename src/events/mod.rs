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

//! Application events and the main event loop.
//!
//! Everything that changes application state arrives here as an [`AppEvent`]:
//! key presses and UI ticks from the terminal threads, requests raised by the
//! screens and the command line, and results coming back from the task
//! worker. Events are handled one at a time on the UI thread, which owns all
//! application state.
//!
//! Results of asynchronous work carry the router generation they were
//! requested under and are dropped if the visitor has navigated since.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    devices::ArSession,
    error::GuideResult,
    model::{Artwork, ScanKind, contact::ContactForm, notice::Notice},
    render::draw,
    router::{NavParams, Route},
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    Navigate(Route, NavParams),
    Back,

    ToggleFavourite(String),
    AddFavourite(String),
    RemoveFavourite(String),
    ClearFavourites,

    RequestScan(ScanKind, String),
    ScanFinished {
        generation: u64,
        kind: ScanKind,
        code: String,
        artwork: Option<Box<Artwork>>,
    },

    RequestAr,
    ArFinished {
        generation: u64,
        result: GuideResult<ArSession>,
    },

    TourTick(u64),

    SubmitContact(ContactForm),
    ContactFinished {
        generation: u64,
        result: GuideResult<()>,
    },

    Notify(Notice),

    Error(String),

    ExitApplication,
}

/// Whether key presses go to an input widget or may also trigger the global
/// shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Input,
    None,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app),

        AppEvent::Navigate(route, params) => handle_navigate(app, route, params)?,
        AppEvent::Back => handle_back(app)?,

        AppEvent::ToggleFavourite(id) => handle_toggle_favourite(app, &id),
        AppEvent::AddFavourite(id) => handle_add_favourite(app, &id),
        AppEvent::RemoveFavourite(id) => handle_remove_favourite(app, &id),
        AppEvent::ClearFavourites => handle_clear_favourites(app),

        AppEvent::RequestScan(kind, code) => handle_request_scan(app, kind, code)?,
        AppEvent::ScanFinished {
            generation,
            kind,
            code,
            artwork,
        } => handle_scan_finished(app, generation, kind, code, artwork),

        AppEvent::RequestAr => handle_request_ar(app)?,
        AppEvent::ArFinished { generation, result } => handle_ar_finished(app, generation, result),

        AppEvent::TourTick(generation) => handle_tour_tick(app, generation),

        AppEvent::SubmitContact(form) => handle_submit_contact(app, form)?,
        AppEvent::ContactFinished { generation, result } => {
            handle_contact_finished(app, generation, result)
        }

        AppEvent::Notify(notice) => handle_notify(app, notice),

        AppEvent::Error(message) => handle_error(app, message),

        AppEvent::ExitApplication => {}
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{
        Arc,
        mpsc::{self, Receiver},
    };

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        components::Screen,
        config::AppConfig,
        data::{Museum, load_portfolio},
        model::{favourites::Favourites, notice::NoticeKind},
        store::MemoryStore,
        tasks::AppTask,
    };

    pub(crate) fn test_app() -> (App, Receiver<AppTask>) {
        let museum = Arc::new(Museum::load().unwrap());
        let portfolio = Arc::new(load_portfolio().unwrap());
        let favourites = Favourites::open(Box::new(MemoryStore::new()));
        let (task_tx, task_rx) = mpsc::channel();

        let app = App::new(AppConfig::default(), museum, portfolio, favourites, task_tx).unwrap();
        (app, task_rx)
    }

    /// Handles everything queued on the event channel, as the main loop would.
    pub(crate) fn pump(app: &mut App) {
        while let Ok(event) = app.event_rx.try_recv() {
            handle_event(app, event).unwrap();
        }
    }

    pub(crate) fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(app, AppEvent::Key(key)).unwrap();
        pump(app);
    }

    fn navigate(app: &mut App, path: &str, params: NavParams) {
        let route = Route::parse(path).unwrap();
        handle_event(app, AppEvent::Navigate(route, params)).unwrap();
        pump(app);
    }

    #[test]
    fn navigation_mounts_the_matching_screen() {
        let (mut app, _tasks) = test_app();
        assert!(matches!(app.screen, Screen::Home(_)));

        navigate(&mut app, "/gallery/sculptures", NavParams::default());
        assert!(matches!(app.screen, Screen::Gallery(_)));

        navigate(&mut app, "/tour/highlights-tour", NavParams::default());
        assert!(matches!(app.screen, Screen::Tour(_)));

        handle_event(&mut app, AppEvent::Back).unwrap();
        assert!(matches!(app.screen, Screen::Gallery(_)));
    }

    #[test]
    fn scanner_auto_scans_target_code() {
        let (mut app, tasks) = test_app();
        navigate(&mut app, "/scanner", NavParams::scan("QR002"));

        match tasks.try_recv().unwrap() {
            AppTask::Scan {
                generation,
                kind,
                code,
            } => {
                assert_eq!(generation, app.router.generation());
                assert_eq!(kind, ScanKind::Qr);
                assert_eq!(code, "QR002");
            }
            other => panic!("unexpected task {:?}", other),
        }
    }

    #[test]
    fn stale_scan_results_are_dropped() {
        let (mut app, tasks) = test_app();
        navigate(&mut app, "/scanner", NavParams::scan("QR002"));
        let Ok(AppTask::Scan { generation, .. }) = tasks.try_recv() else {
            panic!("expected a scan task");
        };

        // The visitor leaves and comes back before the scan answers.
        navigate(&mut app, "/tours", NavParams::default());
        navigate(&mut app, "/scanner", NavParams::default());

        let artwork = app.museum.find_by_code(ScanKind::Qr, "QR002").cloned();
        handle_event(
            &mut app,
            AppEvent::ScanFinished {
                generation,
                kind: ScanKind::Qr,
                code: "QR002".to_string(),
                artwork: artwork.map(Box::new),
            },
        )
        .unwrap();

        let Screen::Scanner(view) = &app.screen else {
            panic!("expected the scanner");
        };
        assert!(view.result().is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn unknown_scan_code_raises_error_notice() {
        let (mut app, _tasks) = test_app();
        navigate(&mut app, "/scanner", NavParams::default());

        let generation = app.router.generation();
        handle_event(
            &mut app,
            AppEvent::ScanFinished {
                generation,
                kind: ScanKind::Nfc,
                code: "NFC999".to_string(),
                artwork: None,
            },
        )
        .unwrap();

        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Scan Failed");
    }

    #[test]
    fn favourite_toggle_updates_registry_and_notifies() {
        let (mut app, _tasks) = test_app();

        handle_event(&mut app, AppEvent::ToggleFavourite("david".to_string())).unwrap();
        assert!(app.favourites.contains("david"));
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Info);

        handle_event(&mut app, AppEvent::ToggleFavourite("david".to_string())).unwrap();
        assert!(!app.favourites.contains("david"));
    }

    #[test]
    fn favouriting_unknown_artwork_is_refused() {
        let (mut app, _tasks) = test_app();

        handle_event(&mut app, AppEvent::AddFavourite("nope".to_string())).unwrap();
        assert!(app.favourites.is_empty());
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn clearing_favourites_reports_what_was_removed() {
        let (mut app, _tasks) = test_app();

        handle_event(&mut app, AppEvent::ClearFavourites).unwrap();
        assert_eq!(app.notice.as_ref().unwrap().title, "No Favourites");

        app.favourites.add("david").unwrap();
        app.favourites.add("mona-lisa").unwrap();
        handle_event(&mut app, AppEvent::ClearFavourites).unwrap();

        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.title, "Favourites Cleared");
        assert_eq!(notice.description, "Removed 2 artworks");
        assert!(app.favourites.is_empty());
    }

    #[test]
    fn unknown_tour_is_reported() {
        let (mut app, _tasks) = test_app();
        navigate(&mut app, "/tour/moonlight-tour", NavParams::default());

        assert!(matches!(app.screen, Screen::Tour(_)));
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.description, "Tour not found: moonlight-tour");
    }

    #[test]
    fn notices_expire_and_can_be_dismissed() {
        let (mut app, _tasks) = test_app();
        app.config.notice_ticks = 2;

        handle_event(&mut app, AppEvent::Notify(Notice::info("Hello", "there"))).unwrap();
        handle_event(&mut app, AppEvent::Tick).unwrap();
        assert!(app.notice.is_some());
        handle_event(&mut app, AppEvent::Tick).unwrap();
        assert!(app.notice.is_none());

        handle_event(&mut app, AppEvent::Notify(Notice::info("Hello", "again"))).unwrap();
        press(&mut app, KeyCode::Esc);
        assert!(app.notice.is_none());
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[test]
    fn global_keys_switch_screens_and_go_back() {
        let (mut app, _tasks) = test_app();

        press(&mut app, KeyCode::Char('3'));
        assert!(matches!(app.screen, Screen::Tours(_)));

        press(&mut app, KeyCode::Char('4'));
        assert!(matches!(app.screen, Screen::Favourites(_)));

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.screen, Screen::Tours(_)));
    }

    #[test]
    fn quit_key_requests_exit() {
        let (mut app, _tasks) = test_app();

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        handle_event(&mut app, AppEvent::Key(key)).unwrap();
        assert!(matches!(
            app.event_rx.try_recv(),
            Ok(AppEvent::ExitApplication)
        ));
    }

    #[test]
    fn commander_navigates() {
        let (mut app, _tasks) = test_app();

        press(&mut app, KeyCode::Char(':'));
        for c in "art starry-night".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.screen, Screen::Artwork(_)));
        assert_eq!(app.router.current().route.path(), "/artwork/starry-night");
        assert!(!app.commander.active());
    }

    #[test]
    fn tour_ticks_only_count_for_the_current_screen() {
        let (mut app, _tasks) = test_app();
        navigate(&mut app, "/tour/highlights-tour", NavParams::default());
        let generation = app.router.generation();

        press(&mut app, KeyCode::Char('s'));
        handle_event(&mut app, AppEvent::TourTick(generation)).unwrap();
        handle_event(&mut app, AppEvent::TourTick(generation - 1)).unwrap();

        let Screen::Tour(view) = &app.screen else {
            panic!("expected the tour screen");
        };
        assert_eq!(view.run().elapsed(), 1);
    }

    #[test]
    fn custom_tour_from_favourites() {
        let (mut app, _tasks) = test_app();
        app.favourites.add("david").unwrap();
        app.favourites.add("mona-lisa").unwrap();

        navigate(&mut app, "/favorites", NavParams::default());
        press(&mut app, KeyCode::Char('t'));
        assert!(matches!(app.screen, Screen::Tours(_)));
        assert_eq!(
            app.router.current().params.custom_artworks.as_deref(),
            Some(&["david".to_string(), "mona-lisa".to_string()][..])
        );

        // The custom tour is listed first.
        press(&mut app, KeyCode::Enter);
        let Screen::Tour(view) = &app.screen else {
            panic!("expected the tour screen");
        };
        assert_eq!(view.run().stop_count(), 2);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn contact_form_keeps_keys_and_sends_when_valid() {
        let (mut app, tasks) = test_app();
        navigate(&mut app, "/portfolio", NavParams::default());
        press(&mut app, KeyCode::Char('e'));

        // Neither the command line nor the quit shortcut fire while typing.
        type_text(&mut app, ":q");
        assert!(!app.commander.active());
        assert!(matches!(app.screen, Screen::Portfolio(_)));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.as_ref().unwrap().title, "Message Not Sent");
        assert!(tasks.try_recv().is_err());

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hello");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lovely tours");
        press(&mut app, KeyCode::Enter);

        let Ok(AppTask::SubmitContact { generation, form }) = tasks.try_recv() else {
            panic!("expected a contact task");
        };
        assert_eq!(form.name, ":q");

        handle_event(
            &mut app,
            AppEvent::ContactFinished {
                generation,
                result: Ok(()),
            },
        )
        .unwrap();
        assert_eq!(app.notice.as_ref().unwrap().title, "Message Sent!");
        let Screen::Portfolio(view) = &app.screen else {
            panic!("expected the portfolio");
        };
        assert!(!view.is_editing());
    }
}
