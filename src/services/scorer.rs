//! Context scoring
//!
//! Four additive, independently bounded factors:
//!
//! | factor            | max | fallback                     |
//! |-------------------|-----|------------------------------|
//! | mood match        | 40  | 25 compatible, 5 otherwise   |
//! | genre fit         | 30  | 10 when no genre is weighted |
//! | time alignment    | 20  | 10 on mismatch or no signal  |
//! | description match | 10  | 0 without keyword hits       |
//!
//! Missing optional fields never fail scoring; they fall back to the
//! factor's baseline.

use std::collections::BTreeSet;

use crate::models::{
    GameRecord, MoodId, RankedGame, RecommendationScore, ScoreBreakdown, SessionBucket,
    UserContext,
};
use crate::tables;

pub const MOOD_MATCH_MAX: u32 = 40;
pub const MOOD_COMPATIBLE_WEIGHT: u32 = 25;
pub const MOOD_BASELINE: u32 = 5;

pub const GENRE_FIT_MAX: u32 = 30;
pub const GENRE_FIT_DEFAULT: u32 = 10;

pub const TIME_ALIGNMENT_MAX: u32 = 20;
pub const TIME_ALIGNMENT_BASELINE: u32 = 10;

pub const DESCRIPTION_MATCH_MAX: u32 = 10;
pub const DESCRIPTION_HIT_WEIGHT: u32 = 4;

/// Highest total any game can reach
pub const MAX_TOTAL_SCORE: u32 =
    MOOD_MATCH_MAX + GENRE_FIT_MAX + TIME_ALIGNMENT_MAX + DESCRIPTION_MATCH_MAX;

/// Scores a game against a context, given the mood set to use for it
///
/// `moods` is the game's explicit moods or the inferred ones; the caller
/// decides which.
pub fn score(game: &GameRecord, moods: &BTreeSet<MoodId>, ctx: &UserContext) -> RecommendationScore {
    let breakdown = ScoreBreakdown {
        mood_match: mood_match(moods, ctx),
        genre_fit: genre_fit(game, ctx),
        time_alignment: time_alignment(game, ctx),
        description_match: description_match(game, ctx),
    };

    tracing::debug!(
        game_id = %game.id,
        mood_match = breakdown.mood_match,
        genre_fit = breakdown.genre_fit,
        time_alignment = breakdown.time_alignment,
        description_match = breakdown.description_match,
        "Scored game"
    );

    RecommendationScore::new(game.id.clone(), breakdown)
}

/// Sorts scored games by descending total
///
/// The sort is stable: games with equal totals keep their input order.
pub fn rank(mut scored: Vec<RankedGame<'_>>) -> Vec<RankedGame<'_>> {
    scored.sort_by(|a, b| b.score.total_score.cmp(&a.score.total_score));
    scored
}

pub fn mood_match(moods: &BTreeSet<MoodId>, ctx: &UserContext) -> u32 {
    let Some(target) = ctx.mood else {
        return MOOD_BASELINE;
    };

    if moods.contains(&target) {
        MOOD_MATCH_MAX
    } else if tables::compatible_moods(target)
        .iter()
        .any(|mood| moods.contains(mood))
    {
        MOOD_COMPATIBLE_WEIGHT
    } else {
        MOOD_BASELINE
    }
}

/// Best single genre weight for the target mood, never a sum
pub fn genre_fit(game: &GameRecord, ctx: &UserContext) -> u32 {
    let weights = ctx.mood.map(tables::genre_weights).unwrap_or_default();

    let table_fit = game
        .genres
        .iter()
        .filter_map(|genre| {
            weights
                .iter()
                .find(|(weighted, _)| weighted == genre)
                .map(|(_, weight)| *weight)
        })
        .max()
        .unwrap_or(GENRE_FIT_DEFAULT);

    let preferred = ctx
        .preferred_genre
        .is_some_and(|genre| game.genres.contains(&genre));

    if preferred {
        GENRE_FIT_MAX
    } else {
        table_fit.clamp(GENRE_FIT_DEFAULT, GENRE_FIT_MAX)
    }
}

pub fn time_alignment(game: &GameRecord, ctx: &UserContext) -> u32 {
    match session_bucket(game) {
        Some(bucket) if bucket == ctx.session => TIME_ALIGNMENT_MAX,
        _ => TIME_ALIGNMENT_BASELINE,
    }
}

/// Session bucket for a game: its own estimate, else the first genre
/// with a typical session length
pub fn session_bucket(game: &GameRecord) -> Option<SessionBucket> {
    game.estimated_session_minutes
        .map(SessionBucket::from_minutes)
        .or_else(|| game.genres.iter().find_map(|genre| tables::typical_session(*genre)))
}

pub fn description_match(game: &GameRecord, ctx: &UserContext) -> u32 {
    let Some(target) = ctx.mood else {
        return 0;
    };

    let haystack = format!(
        "{} {}",
        game.title,
        game.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let hits = tables::keywords(target)
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .count() as u32;

    (hits * DESCRIPTION_HIT_WEIGHT).min(DESCRIPTION_MATCH_MAX)
}
