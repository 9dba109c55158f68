use serde::{Deserialize, Serialize};

use super::{GenreId, MoodId};

/// Upper bound of the short bucket in minutes (inclusive)
pub const SHORT_SESSION_MAX_MINUTES: u32 = 30;
/// Upper bound of the medium bucket in minutes (inclusive)
pub const MEDIUM_SESSION_MAX_MINUTES: u32 = 90;

/// How long the user can play right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBucket {
    Short,
    Medium,
    Long,
}

impl SessionBucket {
    /// Buckets a session length: short ≤ 30, medium 31–90, long > 90
    pub fn from_minutes(minutes: u32) -> Self {
        if minutes <= SHORT_SESSION_MAX_MINUTES {
            SessionBucket::Short
        } else if minutes <= MEDIUM_SESSION_MAX_MINUTES {
            SessionBucket::Medium
        } else {
            SessionBucket::Long
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionBucket::Short => "short",
            SessionBucket::Medium => "medium",
            SessionBucket::Long => "long",
        }
    }
}

/// The momentary context a recommendation is computed for
///
/// Built once per request and never mutated. A `mood` of `None` is the
/// neutral context: no game is favored on mood grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub mood: Option<MoodId>,
    pub session: SessionBucket,
    pub preferred_genre: Option<GenreId>,
}

impl UserContext {
    pub fn new(mood: Option<MoodId>, session: SessionBucket) -> Self {
        Self {
            // Unknown is not a preference
            mood: mood.filter(|m| !m.is_unknown()),
            session,
            preferred_genre: None,
        }
    }

    pub fn neutral(session: SessionBucket) -> Self {
        Self::new(None, session)
    }

    pub fn with_preferred_genre(mut self, genre: GenreId) -> Self {
        self.preferred_genre = Some(genre).filter(|g| !g.is_unknown());
        self
    }
}
