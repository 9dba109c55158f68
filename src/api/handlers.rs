use std::collections::BTreeSet;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::{
    GameId, GameRecord, GenreId, MasterMood, MoodId, RawGameRecord, SessionBucket, UserContext,
};
use crate::services::library::{self, ImportSummary};
use crate::services::{get_recommendations, normalizer, LibraryFilter, Recommendation};
use crate::tables;

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct MasterMoodResponse {
    pub id: MasterMood,
    pub moods: Vec<MoodId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyResponse {
    pub version: u32,
    pub genres: Vec<GenreId>,
    pub moods: Vec<MoodId>,
    pub master_moods: Vec<MasterMoodResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub games: Vec<RawGameRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetailResponse {
    #[serde(flatten)]
    pub game: GameRecord,
    /// Moods the scorer uses for this game
    pub effective_moods: BTreeSet<MoodId>,
    pub moods_inferred: bool,
}

/// Raw mood and genre strings go through the normalizer like library data
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub mood: Option<String>,
    pub session: SessionBucket,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RecommendationRequest {
    fn context(&self) -> UserContext {
        let mood = self.mood.as_deref().map(normalizer::normalize_mood);
        let ctx = UserContext::new(mood, self.session);
        match self.genre.as_deref().map(normalizer::normalize_genre_name) {
            Some(genre) => ctx.with_preferred_genre(genre),
            None => ctx,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub context: UserContext,
    pub recommendations: Vec<Recommendation>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Canonical vocabulary and master-mood expansion
pub async fn taxonomy() -> Json<TaxonomyResponse> {
    let master_moods = MasterMood::ALL
        .into_iter()
        .map(|id| MasterMoodResponse {
            id,
            moods: tables::sub_moods(id).to_vec(),
        })
        .collect();

    Json(TaxonomyResponse {
        version: tables::TAXONOMY_VERSION,
        genres: GenreId::ALL.into_iter().filter(|g| !g.is_unknown()).collect(),
        moods: MoodId::ALL.into_iter().filter(|m| !m.is_unknown()).collect(),
        master_moods,
    })
}

/// Import raw game records into the library
pub async fn import_library(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ImportSummary>)> {
    let Json(request) = payload?;
    let summary =
        library::import_games(state.library.as_ref(), &state.engine, request.games).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// List library games, optionally filtered
pub async fn list_library(
    State(state): State<AppState>,
    query: Result<Query<LibraryFilter>, QueryRejection>,
) -> AppResult<Json<Vec<GameRecord>>> {
    let Query(filter) = query?;
    let games = library::browse_library(state.library.as_ref(), &filter).await?;
    Ok(Json(games))
}

/// Get one game with the moods used to score it
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<GameDetailResponse>> {
    let game = library::get_game(state.library.as_ref(), &GameId::new(id)).await?;
    let effective_moods = state.engine.moods_for(&game);

    Ok(Json(GameDetailResponse {
        moods_inferred: !game.has_explicit_moods(),
        effective_moods,
        game,
    }))
}

/// Rank the library for a context
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload?;
    let context = request.context();
    let limit = state.limits.resolve(request.limit);

    let recommendations =
        get_recommendations(state.library.as_ref(), &state.engine, &context, limit).await?;

    Ok(Json(RecommendationResponse {
        context,
        recommendations,
    }))
}

/// Drop every cached inferred mood set
pub async fn clear_cache(State(state): State<AppState>) -> Json<Value> {
    let cleared = state.engine.clear_cache();
    Json(json!({ "cleared": cleared }))
}
