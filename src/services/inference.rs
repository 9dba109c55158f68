//! Mood inference for games without explicit mood tags

use std::collections::BTreeSet;

use crate::models::{GameRecord, GenreId, MoodId};
use crate::store::MoodInferenceCache;
use crate::tables;

/// Unions the moods suggested by each genre
///
/// No genres yields an empty set, which the scorer treats as neutral.
pub fn infer_moods(genres: &[GenreId]) -> BTreeSet<MoodId> {
    genres
        .iter()
        .flat_map(|genre| tables::inferred_moods(*genre).iter().copied())
        .collect()
}

/// Resolves the mood set used to score a game
///
/// Explicit moods always win. Otherwise moods are inferred from genres,
/// going through the injected cache.
pub struct MoodInference<'a> {
    cache: &'a MoodInferenceCache,
}

impl<'a> MoodInference<'a> {
    pub fn new(cache: &'a MoodInferenceCache) -> Self {
        Self { cache }
    }

    pub fn moods_for(&self, game: &GameRecord) -> BTreeSet<MoodId> {
        if game.has_explicit_moods() {
            return game.moods.clone();
        }

        if let Some(cached) = self.cache.get(&game.id, &game.genres) {
            tracing::debug!(game_id = %game.id, "Mood inference cache hit");
            return cached;
        }

        let inferred = infer_moods(&game.genres);
        tracing::debug!(
            game_id = %game.id,
            genre_count = game.genres.len(),
            mood_count = inferred.len(),
            "Mood inference cache miss"
        );
        self.cache
            .insert(game.id.clone(), &game.genres, inferred.clone());
        inferred
    }
}
