//! Taxonomy normalization
//!
//! Maps raw genre and mood values from library sources onto the canonical
//! vocabulary. Matching is case-insensitive, never fails, and is idempotent:
//! feeding a canonical name back in returns the same id.

use std::collections::BTreeSet;

use crate::models::{GenreId, MasterMood, MoodId, RawGenre};
use crate::tables::{GENRE_ALIAS_TABLE, GENRE_INDEX_TABLE, MOOD_ALIAS_TABLE};

/// Folds a raw name into alias-table key form
///
/// Trims, lowercases, and joins words separated by whitespace or `_`
/// with a single `-`.
pub fn fold_key(raw: &str) -> String {
    raw.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Normalizes a raw genre, either a name or a platform index
pub fn normalize_genre(raw: &RawGenre) -> GenreId {
    match raw {
        RawGenre::Index(index) => genre_from_index(*index),
        RawGenre::Name(name) => normalize_genre_name(name),
        RawGenre::Other(_) => GenreId::Unknown,
    }
}

/// Normalizes a genre name
///
/// Purely numeric names are platform indices that were sent as strings.
pub fn normalize_genre_name(raw: &str) -> GenreId {
    let key = fold_key(raw);
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
        return key
            .parse::<u64>()
            .map(genre_from_index)
            .unwrap_or(GenreId::Unknown);
    }
    lookup(GENRE_ALIAS_TABLE, &key).unwrap_or(GenreId::Unknown)
}

/// Normalizes a raw mood name
pub fn normalize_mood(raw: &str) -> MoodId {
    lookup(MOOD_ALIAS_TABLE, &fold_key(raw)).unwrap_or(MoodId::Unknown)
}

/// Normalizes a genre list, keeping first occurrences in source order
/// and dropping anything unrecognized
pub fn normalize_genres(raw: &[RawGenre]) -> Vec<GenreId> {
    let mut genres = Vec::with_capacity(raw.len());
    for genre in raw.iter().map(normalize_genre) {
        if !genre.is_unknown() && !genres.contains(&genre) {
            genres.push(genre);
        }
    }
    genres
}

/// Splits raw mood tags into canonical moods and master moods
///
/// A tag that names a master mood exactly is kept as that master mood;
/// everything else is normalized as a mood. Unrecognized tags are dropped.
pub fn parse_mood_tags(raw: &[String]) -> (BTreeSet<MoodId>, BTreeSet<MasterMood>) {
    let mut moods = BTreeSet::new();
    let mut masters = BTreeSet::new();

    for tag in raw {
        if let Some(master) = MasterMood::parse(tag) {
            masters.insert(master);
            continue;
        }
        let mood = normalize_mood(tag);
        if !mood.is_unknown() {
            moods.insert(mood);
        }
    }

    (moods, masters)
}

fn genre_from_index(index: u64) -> GenreId {
    GENRE_INDEX_TABLE
        .iter()
        .find(|(i, _)| *i == index)
        .map(|(_, name)| normalize_genre_name(name))
        .unwrap_or(GenreId::Unknown)
}

/// Exact alias match first, then the first token of a compound name that
/// is itself an alias ("Strategy & Simulation" -> strategy)
fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    if key.is_empty() {
        return None;
    }

    let exact = |k: &str| table.iter().find(|(alias, _)| *alias == k).map(|(_, v)| *v);

    exact(key).or_else(|| {
        key.split(['-', '/', '&', ',', '+'])
            .filter(|token| !token.is_empty())
            .find_map(exact)
    })
}
