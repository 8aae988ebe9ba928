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

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::{
    App,
    components::{MountContext, Screen},
    devices::ArSession,
    error::{GuideError, GuideResult},
    model::{Artwork, ScanKind, contact::ContactForm, notice::Notice},
    router::{NavParams, Route},
    tasks::AppTask,
    util::format::count_of,
};

pub(super) fn handle_tick(app: &mut App) {
    if let Some(notice) = app.notice.as_mut() {
        if notice.tick() {
            app.notice = None;
        }
    }

    app.screen.tick();
}

pub(super) fn handle_navigate(app: &mut App, route: Route, params: NavParams) -> Result<()> {
    info!(path = %route, "Navigate");
    app.router.navigate(route, params);
    mount_current(app)
}

pub(super) fn handle_back(app: &mut App) -> Result<()> {
    if app.router.back().is_none() {
        return Ok(());
    }

    info!(path = %app.router.current().route, "Back");
    mount_current(app)
}

/// Replaces the current screen with a fresh one for the current route.
///
/// The old screen is dropped, which also stops anything it had running.
fn mount_current(app: &mut App) -> Result<()> {
    let ctx = MountContext {
        museum: &app.museum,
        portfolio: &app.portfolio,
        favourites: app.favourites.list(),
        generation: app.router.generation(),
        event_tx: &app.event_tx,
    };

    app.screen = Screen::mount(app.router.current(), &ctx)?;

    if let Some(e) = app.screen.mount_error() {
        warn!(error = %e, "Nothing to show");
        handle_notify(app, Notice::from_error("Not Found", &e));
    }

    Ok(())
}

fn artwork_title(app: &App, artwork_id: &str) -> GuideResult<String> {
    app.museum
        .artwork(artwork_id)
        .map(|a| a.title.clone())
        .ok_or_else(|| GuideError::UnknownArtwork(artwork_id.to_string()))
}

/// Reports the outcome of a favourites change and brings the screen in line
/// with the registry.
fn favourites_changed(app: &mut App, outcome: GuideResult<Notice>) {
    match outcome {
        Ok(notice) => handle_notify(app, notice),
        Err(e) => {
            error!(error = %e, "Favourites update failed");
            handle_notify(app, Notice::from_error("Favourites", &e));
        }
    }

    app.screen.favourites_changed(app.favourites.list());
}

pub(super) fn handle_toggle_favourite(app: &mut App, artwork_id: &str) {
    let outcome = artwork_title(app, artwork_id).and_then(|title| {
        let added = app.favourites.toggle(artwork_id)?;
        Ok(if added {
            Notice::info("Added to Favourites", title)
        } else {
            Notice::info("Removed from Favourites", title)
        })
    });
    favourites_changed(app, outcome);
}

pub(super) fn handle_add_favourite(app: &mut App, artwork_id: &str) {
    let outcome = artwork_title(app, artwork_id).and_then(|title| {
        app.favourites.add(artwork_id)?;
        Ok(Notice::info("Added to Favourites", title))
    });
    favourites_changed(app, outcome);
}

pub(super) fn handle_remove_favourite(app: &mut App, artwork_id: &str) {
    // Removing does not need the artwork to still exist.
    let title = artwork_title(app, artwork_id).unwrap_or_else(|_| artwork_id.to_string());
    let outcome = app
        .favourites
        .remove(artwork_id)
        .map(|_| Notice::info("Removed from Favourites", title));
    favourites_changed(app, outcome);
}

pub(super) fn handle_clear_favourites(app: &mut App) {
    if app.favourites.is_empty() {
        handle_notify(app, Notice::info("No Favourites", "There is nothing to clear"));
        return;
    }

    let removed = count_of(app.favourites.len(), "artwork");
    let outcome = app
        .favourites
        .clear()
        .map(|_| Notice::info("Favourites Cleared", format!("Removed {}", removed)));
    favourites_changed(app, outcome);
}

pub(super) fn handle_request_scan(app: &mut App, kind: ScanKind, code: String) -> Result<()> {
    if !matches!(app.screen, Screen::Scanner(_)) {
        handle_navigate(app, Route::Scanner, NavParams::default())?;
    }

    let Screen::Scanner(view) = &mut app.screen else {
        return Ok(());
    };

    if view.begin_scan(kind, &code) {
        app.task_tx.send(AppTask::Scan {
            generation: app.router.generation(),
            kind,
            code,
        })?;
    }

    Ok(())
}

pub(super) fn handle_scan_finished(
    app: &mut App,
    generation: u64,
    kind: ScanKind,
    code: String,
    artwork: Option<Box<Artwork>>,
) {
    if !app.router.is_current(generation) {
        debug!(%kind, code, "Discarding stale scan result");
        return;
    }

    let Screen::Scanner(view) = &mut app.screen else {
        return;
    };

    let notice = match &artwork {
        Some(artwork) => Notice::info(
            "Scan Successful!",
            format!("Found artwork: {}", artwork.title),
        ),
        None => Notice::from_error(
            "Scan Failed",
            &GuideError::UnknownCode {
                kind,
                code: code.clone(),
            },
        ),
    };

    view.scan_finished(kind, code, artwork.map(|a| *a));
    handle_notify(app, notice);
}

pub(super) fn handle_request_ar(app: &mut App) -> Result<()> {
    let Screen::Ar(view) = &mut app.screen else {
        return Ok(());
    };

    if view.begin_initialise() {
        app.task_tx.send(AppTask::InitialiseAr {
            generation: app.router.generation(),
        })?;
    }

    Ok(())
}

pub(super) fn handle_ar_finished(app: &mut App, generation: u64, result: GuideResult<ArSession>) {
    if !app.router.is_current(generation) {
        debug!("Discarding stale AR initialisation result");
        return;
    }

    let Screen::Ar(view) = &mut app.screen else {
        return;
    };

    let notice = match &result {
        Ok(_) => Notice::info(
            "AR Mode Activated!",
            "Point your camera at the artwork to begin",
        ),
        Err(e) => Notice::from_error("AR Initialization Failed", e),
    };

    view.camera_ready(result);
    handle_notify(app, notice);
}

pub(super) fn handle_tour_tick(app: &mut App, generation: u64) {
    if !app.router.is_current(generation) {
        return;
    }

    if let Screen::Tour(view) = &mut app.screen {
        view.tick();
    }
}

pub(super) fn handle_submit_contact(app: &mut App, form: ContactForm) -> Result<()> {
    if !matches!(app.screen, Screen::Portfolio(_)) {
        return Ok(());
    }

    if let Err(e) = form.validate() {
        handle_notify(app, Notice::from_error("Message Not Sent", &e));
        return Ok(());
    }

    let Screen::Portfolio(view) = &mut app.screen else {
        return Ok(());
    };

    if view.begin_submit() {
        app.task_tx.send(AppTask::SubmitContact {
            generation: app.router.generation(),
            form,
        })?;
    }

    Ok(())
}

pub(super) fn handle_contact_finished(app: &mut App, generation: u64, result: GuideResult<()>) {
    if !app.router.is_current(generation) {
        debug!("Discarding stale contact result");
        return;
    }

    let Screen::Portfolio(view) = &mut app.screen else {
        return;
    };

    let notice = match &result {
        Ok(()) => Notice::info(
            "Message Sent!",
            "Thank you for reaching out, I'll get back to you soon",
        ),
        Err(e) => Notice::from_error("Message Not Sent", e),
    };

    view.contact_finished(result.is_ok());
    handle_notify(app, notice);
}

pub(super) fn handle_notify(app: &mut App, notice: Notice) {
    debug!(title = %notice.title, description = %notice.description, "Notice");
    app.notice = Some(notice.with_lifetime(app.config.notice_ticks));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "Application error");
    handle_notify(app, Notice::error("Error", message));
}
