//! Turns a numeric score into a confidence tier and short justification.
//!
//! Text only. Scores and ranking are never changed here.

use crate::models::{
    ConfidenceTier, GameRecord, GenreId, MoodId, Reasoning, RecommendationScore, SessionBucket,
    UserContext,
};

pub const HIGH_CONFIDENCE_MIN: u32 = 75;
pub const MEDIUM_CONFIDENCE_MIN: u32 = 45;

const NEUTRAL_MOOD_PHRASE: &str = "A good fit for whatever you feel like playing";

pub fn confidence_tier(total_score: u32) -> ConfidenceTier {
    if total_score >= HIGH_CONFIDENCE_MIN {
        ConfidenceTier::High
    } else if total_score >= MEDIUM_CONFIDENCE_MIN {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

/// Builds the reasoning for a score
///
/// Secondary phrases come in a fixed order: mood, then session.
pub fn explain(score: &RecommendationScore, ctx: &UserContext) -> Reasoning {
    let confidence = confidence_tier(score.total_score);

    Reasoning {
        primary: primary_phrase(confidence).to_string(),
        secondary: vec![
            mood_phrase(ctx.mood).to_string(),
            session_phrase(ctx.session).to_string(),
        ],
        confidence,
    }
}

/// Like [`explain`], with a trailing phrase when the game carries the
/// context's preferred genre
pub fn explain_game(
    game: &GameRecord,
    score: &RecommendationScore,
    ctx: &UserContext,
) -> Reasoning {
    let mut reasoning = explain(score, ctx);
    if let Some(genre) = ctx.preferred_genre.filter(|g| game.genres.contains(g)) {
        reasoning.secondary.push(genre_phrase(genre));
    }
    reasoning
}

/// Attaches reasoning to a score in place
pub fn annotate(game: &GameRecord, score: &mut RecommendationScore, ctx: &UserContext) {
    score.reasoning = Some(explain_game(game, score, ctx));
}

fn primary_phrase(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::High => "Perfect match for your current vibe",
        ConfidenceTier::Medium => "A solid pick for right now",
        ConfidenceTier::Low => "Worth a try if you want something different",
    }
}

fn mood_phrase(mood: Option<MoodId>) -> &'static str {
    let Some(mood) = mood else {
        return NEUTRAL_MOOD_PHRASE;
    };

    match mood {
        MoodId::Intense => "Keeps the tension high",
        MoodId::Strategic => "Rewards careful planning",
        MoodId::Relaxing => "Lets you unwind at your own pace",
        MoodId::Creative => "Gives you room to build and create",
        MoodId::HighEnergy => "Fast and full of energy",
        MoodId::Atmospheric => "Pulls you into its world",
        MoodId::Challenging => "Puts your skills to the test",
        MoodId::StoryRich => "Carried by a story worth following",
        MoodId::Competitive => "Scratches the competitive itch",
        MoodId::Social => "Better with friends",
        MoodId::Experimental => "Something genuinely different",
        MoodId::Mindful => "Calm focus, one problem at a time",
        MoodId::Nostalgic => "A trip back to classic gaming",
        MoodId::Gritty => "Dark, raw and unforgiving",
        MoodId::Surreal => "Strange in all the right ways",
        MoodId::ActionPacked => "Nonstop action",
        MoodId::Unknown => NEUTRAL_MOOD_PHRASE,
    }
}

fn session_phrase(session: SessionBucket) -> &'static str {
    match session {
        SessionBucket::Short => "Easy to pick up for a quick session",
        SessionBucket::Medium => "Fits an evening of play",
        SessionBucket::Long => "Made for a long session",
    }
}

fn genre_phrase(genre: GenreId) -> String {
    format!("Matches your preference for {} games", genre)
}
