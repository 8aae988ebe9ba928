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

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) title_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) favourite_fg: Color,
    pub(crate) success_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) selection_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(30, 26, 46),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 40, 70),

            text_fg: Color::Rgb(235, 235, 240),
            muted_fg: Color::Rgb(162, 161, 166),
            title_fg: Color::Rgb(255, 255, 255),
            artist_fg: Color::Rgb(179, 157, 219),
            favourite_fg: Color::Rgb(239, 83, 80),
            success_fg: Color::Rgb(102, 187, 106),
            error_fg: Color::Rgb(239, 83, 80),
            selection_bg: Color::Rgb(70, 55, 95),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background colour.
    ///
    /// Returns `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_for_rgb_only() {
        assert_eq!(
            Theme::to_hex(Theme::default().background_colour).as_deref(),
            Some("#1e1a2e")
        );
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
