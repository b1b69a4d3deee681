//! Key-value persistence for the game record and the theme preference.
//! Reads fall back to defaults; writes are best-effort.

use std::collections::HashMap;
use thiserror::Error;

use crate::config::GAME_STATE_KEY;
use crate::model::GameState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Browser `localStorage`. Missing storage (private mode, sandboxed iframe)
/// reads as empty and rejects writes.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Absent or malformed data yields `GameState::default()`.
pub fn load_game_state(store: &impl KeyValueStore) -> GameState {
    let Some(raw) = store.get(GAME_STATE_KEY) else {
        return GameState::default();
    };
    match serde_json::from_str(&raw) {
        Ok(st) => st,
        Err(e) => {
            log::warn!("ignoring unparseable {}: {}", GAME_STATE_KEY, e);
            GameState::default()
        }
    }
}

pub fn save_game_state(store: &mut impl KeyValueStore, state: &GameState) -> Result<(), StoreError> {
    let raw = serde_json::to_string(state)?;
    store.set(GAME_STATE_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_game_state(&store), GameState { best_reaction_score: 0, total_games_played: 0 });
    }

    #[test]
    fn malformed_records_load_defaults() {
        for raw in ["", "not json", r#"{"bestReactionScore":-4}"#, r#"{"bestReactionScore":"x"}"#, "null"] {
            let store = MemoryStore::new().with_item(GAME_STATE_KEY, raw);
            assert_eq!(load_game_state(&store), GameState::default(), "raw {raw:?}");
        }
    }

    #[test]
    fn saved_state_loads_back() {
        let mut store = MemoryStore::new();
        let st = GameState { best_reaction_score: 27, total_games_played: 3 };
        save_game_state(&mut store, &st).unwrap();
        assert_eq!(store.get(GAME_STATE_KEY).as_deref(), Some(r#"{"bestReactionScore":27,"totalGamesPlayed":3}"#));
        assert_eq!(load_game_state(&store), st);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let store = MemoryStore::new().with_item(GAME_STATE_KEY, r#"{"bestReactionScore":8,"legacy":true}"#);
        assert_eq!(load_game_state(&store).best_reaction_score, 8);
    }
}
