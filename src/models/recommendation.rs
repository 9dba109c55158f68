use serde::{Deserialize, Serialize};

use super::{GameId, GameRecord};

/// Per-factor contributions to a total score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub mood_match: u32,
    pub genre_fit: u32,
    pub time_alignment: u32,
    pub description_match: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.mood_match + self.genre_fit + self.time_alignment + self.description_match
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

/// Human-readable justification attached to a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reasoning {
    pub primary: String,
    pub secondary: Vec<String>,
    pub confidence: ConfidenceTier,
}

/// Relevance of one game for one context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationScore {
    pub game_id: GameId,
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Reasoning>,
}

impl RecommendationScore {
    pub fn new(game_id: GameId, breakdown: ScoreBreakdown) -> Self {
        Self {
            game_id,
            total_score: breakdown.total(),
            breakdown,
            reasoning: None,
        }
    }
}

/// A scored game in ranked output
#[derive(Debug, Clone, Serialize)]
pub struct RankedGame<'a> {
    pub game: &'a GameRecord,
    pub score: RecommendationScore,
}
