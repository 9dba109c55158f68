use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};

use crate::models::{GameId, GenreId, MoodId};

/// Inferred moods for one game, with the genre list they were derived from
#[derive(Debug, Clone)]
struct CacheEntry {
    genres: Vec<GenreId>,
    moods: BTreeSet<MoodId>,
}

/// Cache of inferred moods keyed by game
///
/// Entries remember the genres they were computed from. A lookup with a
/// different genre list is a miss, so a changed record is never served a
/// stale result. `clear` swaps the whole map under one write lock; readers
/// see either every old entry or none of them.
#[derive(Debug, Default)]
pub struct MoodInferenceCache {
    entries: RwLock<HashMap<GameId, CacheEntry>>,
}

impl MoodInferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached moods for a game if they were computed from `genres`
    pub fn get(&self, game_id: &GameId, genres: &[GenreId]) -> Option<BTreeSet<MoodId>> {
        let entries = self.entries.read();
        entries
            .get(game_id)
            .filter(|entry| entry.genres == genres)
            .map(|entry| entry.moods.clone())
    }

    pub fn insert(&self, game_id: GameId, genres: &[GenreId], moods: BTreeSet<MoodId>) {
        let entry = CacheEntry {
            genres: genres.to_vec(),
            moods,
        };
        self.entries.write().insert(game_id, entry);
    }

    /// Drops the entry for one game
    pub fn invalidate(&self, game_id: &GameId) -> bool {
        self.entries.write().remove(game_id).is_some()
    }

    /// Drops every entry at once, returning how many were held
    pub fn clear(&self) -> usize {
        let old = std::mem::take(&mut *self.entries.write());
        let cleared = old.len();
        tracing::info!(cleared, "Mood inference cache cleared");
        cleared
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
