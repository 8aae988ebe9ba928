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

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_STOP: &str = "\u{23F9}";
pub(crate) const ICON_TIMER: &str = "\u{23F1}";

pub(crate) const ICON_DONE: &str = "\u{2714}";
pub(crate) const ICON_PENDING: &str = "\u{25CB}";
pub(crate) const ICON_LOCATION: &str = "\u{25C9}";

pub(crate) const FAVOURITE: &str = "\u{2764}";
pub(crate) const NOT_FAVOURITE: &str = "\u{2661}";

pub(crate) const ICON_SCAN: &str = "\u{25A3}";
pub(crate) const ICON_AUDIO_ON: &str = "\u{266B}";
pub(crate) const ICON_AUDIO_OFF: &str = "\u{2205}";

pub(crate) const SPINNER: [&str; 10] = [
    "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280F}",
];

pub(crate) fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}
