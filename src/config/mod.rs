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

//! Application configuration.
//!
//! This module manages the application configuration file. Missing or
//! unreadable configuration falls back to the defaults, and fields absent
//! from an older file take their default values.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::devices::DeviceTimings;

const CONFIG_NAME: &str = "amuse";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Directory holding the favourites database and the log file. Defaults
    /// to the directory of the configuration file.
    pub data_dir: Option<PathBuf>,

    pub log_level: String,

    pub qr_latency_ms: u64,
    pub nfc_latency_ms: u64,
    pub ar_latency_ms: u64,
    pub contact_latency_ms: u64,

    /// When `false` the simulated camera refuses to start, as if the visitor
    /// had declined camera access.
    pub camera_permission: bool,

    /// How many UI ticks (a quarter second each) a notice stays on screen.
    pub notice_ticks: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_dir: None,
            log_level: "info".to_string(),
            qr_latency_ms: 800,
            nfc_latency_ms: 1000,
            ar_latency_ms: 2000,
            contact_latency_ms: 1500,
            camera_permission: true,
            notice_ticks: 16,
        }
    }
}

impl AppConfig {
    pub fn timings(&self) -> DeviceTimings {
        DeviceTimings {
            qr: Duration::from_millis(self.qr_latency_ms),
            nfc: Duration::from_millis(self.nfc_latency_ms),
            ar: Duration::from_millis(self.ar_latency_ms),
            contact: Duration::from_millis(self.contact_latency_ms),
        }
    }

    /// Resolves the directory for application data files.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                confy::get_configuration_file_path(CONFIG_NAME, None)
                    .ok()
                    .and_then(|path| path.parent().map(PathBuf::from))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_takes_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "qr_latency_ms": 5 }"#).unwrap();
        assert_eq!(config.qr_latency_ms, 5);
        assert_eq!(config.nfc_latency_ms, 1000);
        assert!(config.camera_permission);
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/amuse")),
            ..AppConfig::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/amuse"));
        assert_eq!(config.timings().ar, Duration::from_secs(2));
    }
}
