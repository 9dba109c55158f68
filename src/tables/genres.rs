//! Genre-keyed tables: platform indices, aliases, inferred moods and
//! typical session lengths.

use crate::models::{GenreId, MoodId, SessionBucket};

/// Steam store genre indices and the names they stand for
///
/// Names go through the alias table like any other raw string, so every
/// name here must resolve to a known genre.
pub const GENRE_INDEX_TABLE: &[(u64, &str)] = &[
    (1, "Action"),
    (2, "Strategy"),
    (3, "RPG"),
    (4, "Casual"),
    (9, "Racing"),
    (18, "Sports"),
    (23, "Indie"),
    (25, "Adventure"),
    (28, "Simulation"),
    (29, "Massively Multiplayer"),
];

/// Folded raw genre names and the canonical genre each one maps to
///
/// Keys are already in folded form: lowercase, words joined with `-`.
/// Every canonical name maps to itself so normalization is idempotent.
pub const GENRE_ALIAS_TABLE: &[(&str, GenreId)] = &[
    ("action", GenreId::Action),
    ("hack-and-slash", GenreId::Action),
    ("beat-em-up", GenreId::Action),
    ("fighting", GenreId::Action),
    ("adventure", GenreId::Adventure),
    ("point-and-click", GenreId::Adventure),
    ("visual-novel", GenreId::Adventure),
    ("open-world", GenreId::Adventure),
    ("exploration", GenreId::Adventure),
    ("rpg", GenreId::Rpg),
    ("role-playing", GenreId::Rpg),
    ("roleplaying", GenreId::Rpg),
    ("role-playing-game", GenreId::Rpg),
    ("jrpg", GenreId::Rpg),
    ("crpg", GenreId::Rpg),
    ("arpg", GenreId::Rpg),
    ("action-rpg", GenreId::Rpg),
    ("mmorpg", GenreId::Rpg),
    ("strategy", GenreId::Strategy),
    ("rts", GenreId::Strategy),
    ("real-time-strategy", GenreId::Strategy),
    ("turn-based-strategy", GenreId::Strategy),
    ("grand-strategy", GenreId::Strategy),
    ("4x", GenreId::Strategy),
    ("tower-defense", GenreId::Strategy),
    ("tactics", GenreId::Strategy),
    ("simulation", GenreId::Simulation),
    ("sim", GenreId::Simulation),
    ("simulator", GenreId::Simulation),
    ("management", GenreId::Simulation),
    ("city-builder", GenreId::Simulation),
    ("life-sim", GenreId::Simulation),
    ("sports", GenreId::Sports),
    ("sport", GenreId::Sports),
    ("football", GenreId::Sports),
    ("soccer", GenreId::Sports),
    ("basketball", GenreId::Sports),
    ("racing", GenreId::Racing),
    ("racer", GenreId::Racing),
    ("driving", GenreId::Racing),
    ("indie", GenreId::Indie),
    ("independent", GenreId::Indie),
    ("casual", GenreId::Casual),
    ("family", GenreId::Casual),
    ("hidden-object", GenreId::Casual),
    ("shooter", GenreId::Shooter),
    ("fps", GenreId::Shooter),
    ("first-person-shooter", GenreId::Shooter),
    ("third-person-shooter", GenreId::Shooter),
    ("tps", GenreId::Shooter),
    ("shoot-em-up", GenreId::Shooter),
    ("shmup", GenreId::Shooter),
    ("bullet-hell", GenreId::Shooter),
    ("horror", GenreId::Horror),
    ("survival-horror", GenreId::Horror),
    ("psychological-horror", GenreId::Horror),
    ("puzzle", GenreId::Puzzle),
    ("puzzler", GenreId::Puzzle),
    ("logic", GenreId::Puzzle),
    ("match-3", GenreId::Puzzle),
    ("platformer", GenreId::Platformer),
    ("platform", GenreId::Platformer),
    ("metroidvania", GenreId::Platformer),
    ("moba", GenreId::Moba),
    ("roguelike", GenreId::Roguelike),
    ("rogue-like", GenreId::Roguelike),
    ("roguelite", GenreId::Roguelike),
    ("rogue-lite", GenreId::Roguelike),
    ("multiplayer", GenreId::Multiplayer),
    ("massively-multiplayer", GenreId::Multiplayer),
    ("mmo", GenreId::Multiplayer),
    ("co-op", GenreId::Multiplayer),
    ("online-co-op", GenreId::Multiplayer),
    ("pvp", GenreId::Multiplayer),
    ("battle-royale", GenreId::Multiplayer),
];

/// Moods a genre suggests when a game has no explicit mood tags
pub fn inferred_moods(genre: GenreId) -> &'static [MoodId] {
    use MoodId::*;

    match genre {
        GenreId::Action => &[Intense, ActionPacked, HighEnergy],
        GenreId::Adventure => &[Atmospheric, StoryRich],
        GenreId::Rpg => &[StoryRich, Strategic, Atmospheric],
        GenreId::Strategy => &[Strategic, Mindful, Challenging],
        GenreId::Simulation => &[Relaxing, Creative, Mindful],
        GenreId::Sports => &[Competitive, HighEnergy, Social],
        GenreId::Racing => &[HighEnergy, Competitive, Intense],
        GenreId::Indie => &[Experimental, Creative],
        GenreId::Casual => &[Relaxing, Social],
        GenreId::Shooter => &[Intense, ActionPacked, Competitive],
        GenreId::Horror => &[Atmospheric, Intense, Gritty],
        GenreId::Puzzle => &[Mindful, Challenging, Strategic],
        GenreId::Platformer => &[Challenging, Nostalgic, HighEnergy],
        GenreId::Moba => &[Competitive, Strategic, Social],
        GenreId::Roguelike => &[Challenging, Intense, Experimental],
        GenreId::Multiplayer => &[Social, Competitive],
        GenreId::Unknown => &[],
    }
}

/// Typical play-session length for a genre, used when a game has no
/// session estimate of its own
pub fn typical_session(genre: GenreId) -> Option<SessionBucket> {
    match genre {
        GenreId::Sports
        | GenreId::Racing
        | GenreId::Casual
        | GenreId::Puzzle
        | GenreId::Roguelike => Some(SessionBucket::Short),
        GenreId::Action
        | GenreId::Shooter
        | GenreId::Horror
        | GenreId::Platformer
        | GenreId::Moba => Some(SessionBucket::Medium),
        GenreId::Adventure | GenreId::Rpg | GenreId::Strategy | GenreId::Simulation => {
            Some(SessionBucket::Long)
        }
        GenreId::Indie | GenreId::Multiplayer | GenreId::Unknown => None,
    }
}
