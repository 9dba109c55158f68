use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{GameId, GameRecord, RawGameRecord};
use crate::services::engine::RecommendationEngine;
use crate::services::library_filter::{filter_library, LibraryFilter};
use crate::store::LibraryStore;

/// Outcome of importing a batch of raw records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    /// Updated records whose cached inferred moods were dropped
    pub invalidated: usize,
    pub ids: Vec<GameId>,
}

/// Normalizes raw records and stores them
///
/// Every record in a non-empty batch is stored, however sparse. A replaced
/// record whose genres changed loses its inference cache entry.
pub async fn import_games(
    store: &dyn LibraryStore,
    engine: &RecommendationEngine,
    raw: Vec<RawGameRecord>,
) -> AppResult<ImportSummary> {
    if raw.is_empty() {
        return Err(AppError::InvalidInput("No games to import".to_string()));
    }

    let mut summary = ImportSummary::default();

    for record in raw {
        let game = GameRecord::from(record);
        let id = game.id.clone();
        let genres = game.genres.clone();

        match store.upsert(game).await? {
            None => summary.inserted += 1,
            Some(previous) => {
                summary.updated += 1;
                if previous.genres != genres && engine.invalidate(&id) {
                    summary.invalidated += 1;
                }
            }
        }
        summary.ids.push(id);
    }

    tracing::info!(
        inserted = summary.inserted,
        updated = summary.updated,
        invalidated = summary.invalidated,
        "Imported games"
    );

    Ok(summary)
}

pub async fn browse_library(
    store: &dyn LibraryStore,
    filter: &LibraryFilter,
) -> AppResult<Vec<GameRecord>> {
    let games = store.list().await?;
    if filter.is_empty() {
        return Ok(games);
    }

    let matched: Vec<GameRecord> = filter_library(&games, filter).into_iter().cloned().collect();
    tracing::debug!(
        total = games.len(),
        matched = matched.len(),
        "Filtered library"
    );
    Ok(matched)
}

pub async fn get_game(store: &dyn LibraryStore, id: &GameId) -> AppResult<GameRecord> {
    store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {} not in library", id)))
}
