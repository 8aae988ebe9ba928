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

//! Portfolio records.
//!
//! Static personal, skills, project and experience records shown by the
//! portfolio screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Portfolio {
    pub(crate) personal: Personal,
    pub(crate) about: About,
    pub(crate) skills: Vec<SkillGroup>,
    pub(crate) projects: Vec<Project>,
    pub(crate) experience: Vec<Experience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Personal {
    pub(crate) name: String,
    pub(crate) title: String,
    pub(crate) tagline: String,
    pub(crate) email: String,
    pub(crate) location: String,
    pub(crate) github: String,
    pub(crate) linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct About {
    pub(crate) summary: String,
    pub(crate) highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SkillGroup {
    pub(crate) category: String,
    pub(crate) technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Project {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) status: String,
    pub(crate) features: Vec<String>,
    pub(crate) technologies: Vec<String>,
    pub(crate) github_url: Option<String>,
    pub(crate) live_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Experience {
    pub(crate) id: String,
    pub(crate) position: String,
    pub(crate) company: String,
    pub(crate) duration: String,
    pub(crate) location: String,
    pub(crate) description: String,
    pub(crate) achievements: Vec<String>,
}
