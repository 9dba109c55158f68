use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{GameRecord, RecommendationScore, UserContext};
use crate::services::engine::RecommendationEngine;
use crate::store::LibraryStore;

/// One ranked game with its score and reasoning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub game: GameRecord,
    pub score: RecommendationScore,
}

/// Recommends games from the library for a context
///
/// Loads the whole library, scores every game, and returns at most `limit`
/// in rank order. A `limit` of zero is rejected.
pub async fn get_recommendations(
    store: &dyn LibraryStore,
    engine: &RecommendationEngine,
    ctx: &UserContext,
    limit: usize,
) -> AppResult<Vec<Recommendation>> {
    if limit == 0 {
        return Err(AppError::InvalidInput(
            "limit must be at least 1".to_string(),
        ));
    }

    let games = store.list().await?;
    let ranked = engine.recommend(&games, ctx, limit);

    Ok(ranked
        .into_iter()
        .map(|ranked| Recommendation {
            game: ranked.game.clone(),
            score: ranked.score,
        })
        .collect())
}
