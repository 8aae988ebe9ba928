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

/// Formats a number of seconds as `M:SS`.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Formats a progress fraction as a whole percentage.
pub(crate) fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", (fraction.clamp(0.0, 1.0) * 100.0).round())
}

/// Pluralises `noun` for `count`, e.g. "1 artwork", "3 artworks".
pub(crate) fn count_of(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_minutes_and_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(61), "1:01");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn percent_is_clamped_and_rounded() {
        assert_eq!(format_percent(0.125), "13%");
        assert_eq!(format_percent(1.5), "100%");
        assert_eq!(format_percent(-1.0), "0%");
    }

    #[test]
    fn counts_pluralise() {
        assert_eq!(count_of(1, "artwork"), "1 artwork");
        assert_eq!(count_of(0, "stop"), "0 stops");
        assert_eq!(count_of(4, "stop"), "4 stops");
    }
}
