use std::collections::BTreeSet;
use std::sync::Arc;

use crate::models::{GameId, GameRecord, MoodId, RankedGame, RecommendationScore, UserContext};
use crate::services::{inference::MoodInference, reasoning, scorer};
use crate::store::MoodInferenceCache;
use crate::tables::{self, TableError};

/// Recommendation pipeline: inference, scoring, reasoning and ranking
///
/// Owns no global state. The inference cache is injected so callers can
/// share one cache across engines or observe it in tests.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    cache: Arc<MoodInferenceCache>,
}

impl RecommendationEngine {
    /// Creates an engine after checking the taxonomy tables
    pub fn new(cache: Arc<MoodInferenceCache>) -> Result<Self, TableError> {
        tables::validate()?;
        Ok(Self { cache })
    }

    pub fn cache(&self) -> &Arc<MoodInferenceCache> {
        &self.cache
    }

    /// Moods used to score a game: explicit ones, or inferred from genres
    pub fn moods_for(&self, game: &GameRecord) -> BTreeSet<MoodId> {
        MoodInference::new(&self.cache).moods_for(game)
    }

    /// Scores one game and attaches reasoning
    pub fn score(&self, game: &GameRecord, ctx: &UserContext) -> RecommendationScore {
        let moods = self.moods_for(game);
        let mut score = scorer::score(game, &moods, ctx);
        reasoning::annotate(game, &mut score, ctx);
        score
    }

    /// Ranks the whole library and returns at most `limit` games
    pub fn recommend<'a>(
        &self,
        games: &'a [GameRecord],
        ctx: &UserContext,
        limit: usize,
    ) -> Vec<RankedGame<'a>> {
        let scored = games
            .iter()
            .map(|game| RankedGame {
                game,
                score: self.score(game, ctx),
            })
            .collect();

        let mut ranked = scorer::rank(scored);
        ranked.truncate(limit);

        tracing::info!(
            library_size = games.len(),
            returned = ranked.len(),
            mood = ctx.mood.map(|m| m.as_str()).unwrap_or("neutral"),
            session = ctx.session.as_str(),
            top_score = ?ranked.first().map(|r| r.score.total_score),
            "Computed recommendations"
        );

        ranked
    }

    /// Forgets a game's inferred moods
    pub fn invalidate(&self, id: &GameId) -> bool {
        self.cache.invalidate(id)
    }

    pub fn clear_cache(&self) -> usize {
        self.cache.clear()
    }
}
