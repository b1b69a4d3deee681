//! Light/dark preference, persisted under `config::THEME_KEY` and applied as
//! the `light-mode` class on `<body>`.

use crate::config::THEME_KEY;
use crate::storage::{KeyValueStore, StoreError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// Stored preference, dark when absent or unrecognised.
    pub fn load(store: &impl KeyValueStore) -> Self {
        store.get(THEME_KEY).as_deref().and_then(Theme::parse).unwrap_or_default()
    }

    pub fn save(self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.as_str())
    }

    /// Browser only.
    pub fn apply(self) {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let res = match self {
            Theme::Light => body.class_list().add_1("light-mode"),
            Theme::Dark => body.class_list().remove_1("light-mode"),
        };
        if let Err(e) = res {
            log::warn!("could not apply theme {}: {:?}", self.as_str(), e);
        }
    }
}
