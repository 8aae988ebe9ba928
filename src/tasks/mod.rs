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

//! Asynchronous application task processing.
//!
//! Scanning a code, starting the AR camera and sending a contact message all
//! take a noticeable amount of time. The screens hand them to a dedicated
//! worker thread as [`AppTask`]s so that the UI keeps drawing, and the worker
//! reports each outcome back as an [`AppEvent`].
//!
//! Every task carries the router generation it was requested under. The worker
//! passes it through untouched; deciding whether the result is still wanted is
//! the UI thread's business.

mod handlers;
use handlers::*;

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

use anyhow::Result;
use tracing::{error, info};

use crate::{
    config::AppConfig,
    data::Museum,
    devices::{ArCamera, ContactDesk, Latency, ScanResolver, ThreadLatency},
    events::AppEvent,
    model::{ScanKind, contact::ContactForm},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    Scan {
        generation: u64,
        kind: ScanKind,
        code: String,
    },

    InitialiseAr {
        generation: u64,
    },

    SubmitContact {
        generation: u64,
        form: ContactForm,
    },
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `config` - The application configuration, for device timings.
/// * `museum` - The museum data, for resolving scans.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    museum: Arc<Museum>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let timings = config.timings();
    let camera_permission = config.camera_permission;

    thread::spawn(move || {
        let ctx = TaskContext {
            resolver: ScanResolver::new(museum, timings, ThreadLatency),
            camera: ArCamera::new(camera_permission, timings, ThreadLatency),
            desk: ContactDesk::new(timings, ThreadLatency),
            event_tx: &event_tx,
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &ctx) {
                error!(error = %e, "Task failed");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        info!("Task worker finished");
    });
}

/// Bundles the simulated devices and the result channel required by task
/// handlers.
struct TaskContext<'a, L: Latency> {
    resolver: ScanResolver<L>,
    camera: ArCamera<L>,
    desk: ContactDesk<L>,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
fn handle_task<L: Latency>(task: AppTask, ctx: &TaskContext<L>) -> Result<()> {
    match task {
        AppTask::Scan {
            generation,
            kind,
            code,
        } => scan(ctx, generation, kind, code),

        AppTask::InitialiseAr { generation } => initialise_ar(ctx, generation),

        AppTask::SubmitContact { generation, form } => submit_contact(ctx, generation, form),
    }
}
