use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::services::normalizer::fold_key;

/// Canonical genre vocabulary
///
/// Every genre reaching the scorer is one of these values. Raw platform
/// strings and numeric codes are mapped here by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenreId {
    Action,
    Adventure,
    Rpg,
    Strategy,
    Simulation,
    Sports,
    Racing,
    Indie,
    Casual,
    Shooter,
    Horror,
    Puzzle,
    Platformer,
    Moba,
    Roguelike,
    Multiplayer,
    Unknown,
}

impl GenreId {
    /// All genres in declaration order, `Unknown` last
    pub const ALL: [GenreId; 17] = [
        GenreId::Action,
        GenreId::Adventure,
        GenreId::Rpg,
        GenreId::Strategy,
        GenreId::Simulation,
        GenreId::Sports,
        GenreId::Racing,
        GenreId::Indie,
        GenreId::Casual,
        GenreId::Shooter,
        GenreId::Horror,
        GenreId::Puzzle,
        GenreId::Platformer,
        GenreId::Moba,
        GenreId::Roguelike,
        GenreId::Multiplayer,
        GenreId::Unknown,
    ];

    /// Canonical wire name, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GenreId::Action => "action",
            GenreId::Adventure => "adventure",
            GenreId::Rpg => "rpg",
            GenreId::Strategy => "strategy",
            GenreId::Simulation => "simulation",
            GenreId::Sports => "sports",
            GenreId::Racing => "racing",
            GenreId::Indie => "indie",
            GenreId::Casual => "casual",
            GenreId::Shooter => "shooter",
            GenreId::Horror => "horror",
            GenreId::Puzzle => "puzzle",
            GenreId::Platformer => "platformer",
            GenreId::Moba => "moba",
            GenreId::Roguelike => "roguelike",
            GenreId::Multiplayer => "multiplayer",
            GenreId::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, GenreId::Unknown)
    }
}

impl Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical mood vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodId {
    Intense,
    Strategic,
    Relaxing,
    Creative,
    HighEnergy,
    Atmospheric,
    Challenging,
    StoryRich,
    Competitive,
    Social,
    Experimental,
    Mindful,
    Nostalgic,
    Gritty,
    Surreal,
    ActionPacked,
    Unknown,
}

impl MoodId {
    /// All moods in declaration order, `Unknown` last
    pub const ALL: [MoodId; 17] = [
        MoodId::Intense,
        MoodId::Strategic,
        MoodId::Relaxing,
        MoodId::Creative,
        MoodId::HighEnergy,
        MoodId::Atmospheric,
        MoodId::Challenging,
        MoodId::StoryRich,
        MoodId::Competitive,
        MoodId::Social,
        MoodId::Experimental,
        MoodId::Mindful,
        MoodId::Nostalgic,
        MoodId::Gritty,
        MoodId::Surreal,
        MoodId::ActionPacked,
        MoodId::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodId::Intense => "intense",
            MoodId::Strategic => "strategic",
            MoodId::Relaxing => "relaxing",
            MoodId::Creative => "creative",
            MoodId::HighEnergy => "high-energy",
            MoodId::Atmospheric => "atmospheric",
            MoodId::Challenging => "challenging",
            MoodId::StoryRich => "story-rich",
            MoodId::Competitive => "competitive",
            MoodId::Social => "social",
            MoodId::Experimental => "experimental",
            MoodId::Mindful => "mindful",
            MoodId::Nostalgic => "nostalgic",
            MoodId::Gritty => "gritty",
            MoodId::Surreal => "surreal",
            MoodId::ActionPacked => "action-packed",
            MoodId::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, MoodId::Unknown)
    }
}

impl Display for MoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse, user-facing mood grouping used only for browsing
///
/// Each master mood expands to a set of canonical moods through the
/// master-mood table. It never takes part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MasterMood {
    Adrenaline,
    BrainPower,
    Zen,
    StoryTime,
    Party,
    DarkSide,
    Offbeat,
}

impl MasterMood {
    pub const ALL: [MasterMood; 7] = [
        MasterMood::Adrenaline,
        MasterMood::BrainPower,
        MasterMood::Zen,
        MasterMood::StoryTime,
        MasterMood::Party,
        MasterMood::DarkSide,
        MasterMood::Offbeat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MasterMood::Adrenaline => "adrenaline",
            MasterMood::BrainPower => "brain-power",
            MasterMood::Zen => "zen",
            MasterMood::StoryTime => "story-time",
            MasterMood::Party => "party",
            MasterMood::DarkSide => "dark-side",
            MasterMood::Offbeat => "offbeat",
        }
    }

    /// Looks up a master mood by its wire name, case-insensitively
    pub fn parse(raw: &str) -> Option<Self> {
        let key = fold_key(raw);
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

impl Display for MasterMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_as_str_matches_serde() {
        for genre in GenreId::ALL {
            let json = serde_json::to_string(&genre).unwrap();
            assert_eq!(json, format!("\"{}\"", genre.as_str()));
        }
    }

    #[test]
    fn test_mood_as_str_matches_serde() {
        for mood in MoodId::ALL {
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(json, format!("\"{}\"", mood.as_str()));
        }
    }

    #[test]
    fn test_master_mood_serde_kebab_case() {
        let json = serde_json::to_string(&MasterMood::BrainPower).unwrap();
        assert_eq!(json, "\"brain-power\"");

        let parsed: MasterMood = serde_json::from_str("\"dark-side\"").unwrap();
        assert_eq!(parsed, MasterMood::DarkSide);
    }

    #[test]
    fn test_master_mood_parse() {
        assert_eq!(MasterMood::parse("Zen"), Some(MasterMood::Zen));
        assert_eq!(MasterMood::parse("brain_power"), Some(MasterMood::BrainPower));
        assert_eq!(MasterMood::parse(" story time "), Some(MasterMood::StoryTime));
        assert_eq!(MasterMood::parse("relaxing"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MoodId::StoryRich), "story-rich");
        assert_eq!(format!("{}", GenreId::Roguelike), "roguelike");
    }
}
