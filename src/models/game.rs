use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

use super::{GenreId, MasterMood, MoodId};
use crate::services::normalizer;

/// Stable identifier of a game in the user's library
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A game with canonical metadata
///
/// Produced from a [`RawGameRecord`] at the library boundary. Nothing
/// downstream of the normalizer sees raw genre or mood strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    /// Canonical genres in source order, without duplicates
    #[serde(default)]
    pub genres: Vec<GenreId>,
    /// Explicit mood tags; empty means moods must be inferred
    #[serde(default)]
    pub moods: BTreeSet<MoodId>,
    /// Master moods the game was tagged with directly
    #[serde(default)]
    pub master_moods: BTreeSet<MasterMood>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_session_minutes: Option<u32>,
    #[serde(default)]
    pub release_year: Option<i32>,
}

impl GameRecord {
    /// Creates a record with only an id and title; every other field is empty
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: GameId::new(id),
            title: title.into(),
            genres: Vec::new(),
            moods: BTreeSet::new(),
            master_moods: BTreeSet::new(),
            tags: Vec::new(),
            description: None,
            estimated_session_minutes: None,
            release_year: None,
        }
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = GenreId>) -> Self {
        self.genres = Vec::new();
        for genre in genres {
            if !genre.is_unknown() && !self.genres.contains(&genre) {
                self.genres.push(genre);
            }
        }
        self
    }

    pub fn with_moods(mut self, moods: impl IntoIterator<Item = MoodId>) -> Self {
        self.moods = moods.into_iter().filter(|m| !m.is_unknown()).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_session_minutes(mut self, minutes: u32) -> Self {
        self.estimated_session_minutes = Some(minutes);
        self
    }

    pub fn has_explicit_moods(&self) -> bool {
        !self.moods.is_empty()
    }
}

// ============================================================================
// Raw Library Types
// ============================================================================

/// Game identifier as it arrives from a library source
///
/// Steam app ids are numbers, other stores use strings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawGameId {
    Numeric(u64),
    Text(String),
}

impl From<RawGameId> for GameId {
    fn from(raw: RawGameId) -> Self {
        match raw {
            RawGameId::Numeric(id) => GameId(id.to_string()),
            RawGameId::Text(id) => GameId(id.trim().to_string()),
        }
    }
}

/// Genre as it arrives from a library source: a name or a platform index
///
/// Any other JSON value is kept as `Other` and normalizes to unknown, so one
/// malformed genre never rejects the record carrying it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawGenre {
    Index(u64),
    Name(String),
    Other(serde_json::Value),
}

impl From<&str> for RawGenre {
    fn from(name: &str) -> Self {
        RawGenre::Name(name.to_string())
    }
}

impl From<u64> for RawGenre {
    fn from(index: u64) -> Self {
        RawGenre::Index(index)
    }
}

/// Untyped game record from the external library store
///
/// Only `id` and `title` are strict. Optional fields with an unusable value
/// fall back to empty, and the record is scored with baselines.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGameRecord {
    pub id: RawGameId,
    pub title: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub genres: Vec<RawGenre>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub moods: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::minutes")]
    pub estimated_session_minutes: Option<u32>,
    #[serde(default, deserialize_with = "lenient::year")]
    pub release_year: Option<i32>,
}

/// Field deserializers for [`RawGameRecord`] that never fail on a bad value
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// `null` reads as an empty list
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Keeps string entries; a lone string counts as a one-item list
    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let strings = match Value::deserialize(deserializer)? {
            Value::String(s) => vec![s],
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Ok(strings)
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Any non-negative number, or numeric string, rounded to whole minutes
    pub fn minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = number(Value::deserialize(deserializer)?)
            .filter(|m| *m >= 0.0)
            .map(|m| m.round().min(f64::from(u32::MAX)) as u32);
        Ok(minutes)
    }

    pub fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let year = number(Value::deserialize(deserializer)?)
            .map(f64::round)
            .filter(|y| *y >= f64::from(i32::MIN) && *y <= f64::from(i32::MAX))
            .map(|y| y as i32);
        Ok(year)
    }

    fn number(value: Value) -> Option<f64> {
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|n| n.is_finite())
    }
}

impl From<RawGameRecord> for GameRecord {
    fn from(raw: RawGameRecord) -> Self {
        let genres = normalizer::normalize_genres(&raw.genres);
        let (moods, master_moods) = normalizer::parse_mood_tags(&raw.moods);

        // Blank descriptions carry no signal
        let description = raw.description.filter(|d| !d.trim().is_empty());

        GameRecord {
            id: raw.id.into(),
            title: raw.title,
            genres,
            moods,
            master_moods,
            tags: raw.tags,
            description,
            estimated_session_minutes: raw.estimated_session_minutes,
            release_year: raw.release_year,
        }
    }
}
