use serde::{de, Deserialize, Deserializer};

use crate::models::{GameRecord, GenreId, MasterMood, SessionBucket};
use crate::services::{normalizer, scorer};
use crate::tables;

/// True when the game's explicit moods intersect the master mood's
/// sub-moods, or the game was tagged with the master mood itself
pub fn matches_master_mood(game: &GameRecord, master: MasterMood) -> bool {
    game.master_moods.contains(&master)
        || tables::sub_moods(master)
            .iter()
            .any(|mood| game.moods.contains(mood))
}

/// Browse criteria; every criterion that is set must hold
///
/// Query values are read like library data: `?genre=RPG` and
/// `?master_mood=Story Time` work. Blank values are ignored, names that
/// resolve to nothing are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LibraryFilter {
    #[serde(default, deserialize_with = "master_mood_param")]
    pub master_mood: Option<MasterMood>,
    #[serde(default, deserialize_with = "genre_param")]
    pub genre: Option<GenreId>,
    #[serde(default, deserialize_with = "session_param")]
    pub session: Option<SessionBucket>,
    /// Case-insensitive substring of the title
    #[serde(default, rename = "q")]
    pub query: Option<String>,
}

impl LibraryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master_mood(mut self, master: MasterMood) -> Self {
        self.master_mood = Some(master);
        self
    }

    pub fn genre(mut self, genre: GenreId) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn session(mut self, session: SessionBucket) -> Self {
        self.session = Some(session);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.master_mood.is_none()
            && self.genre.is_none()
            && self.session.is_none()
            && self.query_key().is_none()
    }

    pub fn matches(&self, game: &GameRecord) -> bool {
        if let Some(master) = self.master_mood {
            if !matches_master_mood(game, master) {
                return false;
            }
        }

        if let Some(genre) = self.genre {
            if !game.genres.contains(&genre) {
                return false;
            }
        }

        if let Some(session) = self.session {
            if scorer::session_bucket(game) != Some(session) {
                return false;
            }
        }

        match self.query_key() {
            Some(query) => game.title.to_lowercase().contains(&query),
            None => true,
        }
    }

    fn query_key(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

fn master_mood_param<'de, D>(deserializer: D) -> Result<Option<MasterMood>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer)?
        .map(|raw| {
            MasterMood::parse(&raw)
                .ok_or_else(|| de::Error::custom(format!("unknown master mood '{}'", raw)))
        })
        .transpose()
}

fn genre_param<'de, D>(deserializer: D) -> Result<Option<GenreId>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer)?
        .map(|raw| match normalizer::normalize_genre_name(&raw) {
            GenreId::Unknown => Err(de::Error::custom(format!("unknown genre '{}'", raw))),
            genre => Ok(genre),
        })
        .transpose()
}

fn session_param<'de, D>(deserializer: D) -> Result<Option<SessionBucket>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer)?
        .map(|raw| {
            let key = normalizer::fold_key(&raw);
            [SessionBucket::Short, SessionBucket::Medium, SessionBucket::Long]
                .into_iter()
                .find(|bucket| bucket.as_str() == key)
                .ok_or_else(|| de::Error::custom(format!("unknown session '{}'", raw)))
        })
        .transpose()
}

/// Games matching the filter, in library order
pub fn filter_library<'a>(games: &'a [GameRecord], filter: &LibraryFilter) -> Vec<&'a GameRecord> {
    games.iter().filter(|game| filter.matches(game)).collect()
}
