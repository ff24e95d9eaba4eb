//! ---
//! vk_section: "02-persistence"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Local storage abstractions for history and preferences."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::KeyValueStore;
use crate::Result;

/// Storage key the theme preference lives under.
pub const THEME_KEY: &str = "theme";

/// Host surface theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light presentation (default).
    #[default]
    Light,
    /// Dark presentation.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Restore the persisted preference; absent or unrecognized state
    /// degrades to the default.
    pub fn load(store: &dyn KeyValueStore) -> Theme {
        match store.get(THEME_KEY) {
            Some(raw) => raw.trim().trim_matches('"').parse().unwrap_or_else(|()| {
                warn!(stored = raw.as_str(), "unrecognized theme preference, using default");
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    /// Persist the preference.
    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<()> {
        store.put(THEME_KEY, &format!("\"{self}\""))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}
