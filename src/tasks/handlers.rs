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

use crate::{
    devices::Latency,
    events::AppEvent,
    model::{ScanKind, contact::ContactForm},
    tasks::TaskContext,
};

pub(super) fn scan<L: Latency>(
    ctx: &TaskContext<L>,
    generation: u64,
    kind: ScanKind,
    code: String,
) -> Result<()> {
    let artwork = ctx.resolver.resolve(kind, &code).map(Box::new);
    ctx.event_tx.send(AppEvent::ScanFinished {
        generation,
        kind,
        code,
        artwork,
    })?;

    Ok(())
}

pub(super) fn initialise_ar<L: Latency>(ctx: &TaskContext<L>, generation: u64) -> Result<()> {
    let result = ctx.camera.initialise();
    ctx.event_tx
        .send(AppEvent::ArFinished { generation, result })?;

    Ok(())
}

pub(super) fn submit_contact<L: Latency>(
    ctx: &TaskContext<L>,
    generation: u64,
    form: ContactForm,
) -> Result<()> {
    let result = ctx.desk.submit(&form);
    ctx.event_tx
        .send(AppEvent::ContactFinished { generation, result })?;

    Ok(())
}
