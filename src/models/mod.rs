mod context;
mod game;
mod recommendation;
mod taxonomy;

pub use context::{
    SessionBucket, UserContext, MEDIUM_SESSION_MAX_MINUTES, SHORT_SESSION_MAX_MINUTES,
};
pub use game::{GameId, GameRecord, RawGameId, RawGameRecord, RawGenre};
pub use recommendation::{
    ConfidenceTier, RankedGame, Reasoning, RecommendationScore, ScoreBreakdown,
};
pub use taxonomy::{GenreId, MasterMood, MoodId};
