//! Mood-keyed tables: aliases, compatibility, genre weights and keywords.

use crate::models::{GenreId, MoodId};

/// Folded raw mood names and the canonical mood each one maps to
pub const MOOD_ALIAS_TABLE: &[(&str, MoodId)] = &[
    ("intense", MoodId::Intense),
    ("tense", MoodId::Intense),
    ("thrilling", MoodId::Intense),
    ("heart-pounding", MoodId::Intense),
    ("strategic", MoodId::Strategic),
    ("tactical", MoodId::Strategic),
    ("thoughtful", MoodId::Strategic),
    ("planning", MoodId::Strategic),
    ("relaxing", MoodId::Relaxing),
    ("relaxed", MoodId::Relaxing),
    ("chill", MoodId::Relaxing),
    ("calm", MoodId::Relaxing),
    ("cozy", MoodId::Relaxing),
    ("cosy", MoodId::Relaxing),
    ("peaceful", MoodId::Relaxing),
    ("wholesome", MoodId::Relaxing),
    ("creative", MoodId::Creative),
    ("building", MoodId::Creative),
    ("sandbox", MoodId::Creative),
    ("crafting", MoodId::Creative),
    ("high-energy", MoodId::HighEnergy),
    ("energetic", MoodId::HighEnergy),
    ("fast", MoodId::HighEnergy),
    ("fast-paced", MoodId::HighEnergy),
    ("atmospheric", MoodId::Atmospheric),
    ("immersive", MoodId::Atmospheric),
    ("moody", MoodId::Atmospheric),
    ("eerie", MoodId::Atmospheric),
    ("challenging", MoodId::Challenging),
    ("difficult", MoodId::Challenging),
    ("hard", MoodId::Challenging),
    ("souls-like", MoodId::Challenging),
    ("soulslike", MoodId::Challenging),
    ("punishing", MoodId::Challenging),
    ("story-rich", MoodId::StoryRich),
    ("story", MoodId::StoryRich),
    ("narrative", MoodId::StoryRich),
    ("story-driven", MoodId::StoryRich),
    ("cinematic", MoodId::StoryRich),
    ("emotional", MoodId::StoryRich),
    ("competitive", MoodId::Competitive),
    ("pvp", MoodId::Competitive),
    ("esports", MoodId::Competitive),
    ("ranked", MoodId::Competitive),
    ("social", MoodId::Social),
    ("co-op", MoodId::Social),
    ("coop", MoodId::Social),
    ("cooperative", MoodId::Social),
    ("local-co-op", MoodId::Social),
    ("friends", MoodId::Social),
    ("experimental", MoodId::Experimental),
    ("unique", MoodId::Experimental),
    ("artsy", MoodId::Experimental),
    ("avant-garde", MoodId::Experimental),
    ("mindful", MoodId::Mindful),
    ("meditative", MoodId::Mindful),
    ("contemplative", MoodId::Mindful),
    ("nostalgic", MoodId::Nostalgic),
    ("retro", MoodId::Nostalgic),
    ("classic", MoodId::Nostalgic),
    ("old-school", MoodId::Nostalgic),
    ("gritty", MoodId::Gritty),
    ("dark", MoodId::Gritty),
    ("violent", MoodId::Gritty),
    ("mature", MoodId::Gritty),
    ("grim", MoodId::Gritty),
    ("surreal", MoodId::Surreal),
    ("weird", MoodId::Surreal),
    ("psychedelic", MoodId::Surreal),
    ("dreamlike", MoodId::Surreal),
    ("bizarre", MoodId::Surreal),
    ("action-packed", MoodId::ActionPacked),
    ("explosive", MoodId::ActionPacked),
    ("frantic", MoodId::ActionPacked),
    ("chaotic", MoodId::ActionPacked),
];

/// Moods that partially satisfy a target mood
pub fn compatible_moods(mood: MoodId) -> &'static [MoodId] {
    use MoodId::*;

    match mood {
        Intense => &[ActionPacked, HighEnergy, Challenging],
        Strategic => &[Challenging, Mindful],
        Relaxing => &[Mindful, Creative, Atmospheric],
        Creative => &[Experimental, Relaxing],
        HighEnergy => &[ActionPacked, Intense, Competitive],
        Atmospheric => &[StoryRich, Surreal, Gritty],
        Challenging => &[Intense, Strategic, Competitive],
        StoryRich => &[Atmospheric, Nostalgic],
        Competitive => &[Challenging, Social, HighEnergy],
        Social => &[Competitive, Relaxing],
        Experimental => &[Surreal, Creative],
        Mindful => &[Relaxing, Strategic],
        Nostalgic => &[StoryRich, Relaxing],
        Gritty => &[Intense, Atmospheric],
        Surreal => &[Experimental, Atmospheric],
        ActionPacked => &[Intense, HighEnergy],
        Unknown => &[],
    }
}

/// How well each genre serves a target mood; unlisted genres get the
/// scorer's default
pub fn genre_weights(mood: MoodId) -> &'static [(GenreId, u32)] {
    use GenreId::*;

    match mood {
        MoodId::Intense => &[
            (Shooter, 30),
            (Action, 28),
            (Horror, 26),
            (Roguelike, 24),
            (Racing, 20),
            (Moba, 20),
        ],
        MoodId::Strategic => &[
            (Strategy, 30),
            (Puzzle, 24),
            (Moba, 22),
            (Rpg, 22),
            (Simulation, 18),
        ],
        MoodId::Relaxing => &[
            (Casual, 30),
            (Simulation, 28),
            (Puzzle, 22),
            (Indie, 18),
            (Adventure, 16),
        ],
        MoodId::Creative => &[(Simulation, 30), (Indie, 26), (Casual, 18), (Puzzle, 16)],
        MoodId::HighEnergy => &[
            (Racing, 30),
            (Sports, 28),
            (Action, 26),
            (Shooter, 24),
            (Platformer, 22),
        ],
        MoodId::Atmospheric => &[(Horror, 30), (Adventure, 28), (Rpg, 24), (Indie, 20)],
        MoodId::Challenging => &[
            (Roguelike, 30),
            (Platformer, 26),
            (Strategy, 24),
            (Puzzle, 22),
            (Action, 20),
        ],
        MoodId::StoryRich => &[(Rpg, 30), (Adventure, 30), (Indie, 18), (Horror, 16)],
        MoodId::Competitive => &[
            (Moba, 30),
            (Shooter, 28),
            (Sports, 28),
            (Racing, 26),
            (Multiplayer, 24),
            (Strategy, 20),
        ],
        MoodId::Social => &[(Multiplayer, 30), (Moba, 26), (Casual, 24), (Sports, 22)],
        MoodId::Experimental => &[(Indie, 30), (Puzzle, 22), (Roguelike, 20), (Adventure, 18)],
        MoodId::Mindful => &[(Puzzle, 30), (Simulation, 24), (Casual, 22), (Strategy, 20)],
        MoodId::Nostalgic => &[(Platformer, 30), (Rpg, 22), (Racing, 18), (Indie, 16)],
        MoodId::Gritty => &[(Horror, 30), (Shooter, 26), (Action, 24), (Rpg, 20)],
        MoodId::Surreal => &[(Indie, 30), (Adventure, 24), (Puzzle, 22), (Horror, 18)],
        MoodId::ActionPacked => &[(Action, 30), (Shooter, 30), (Racing, 22), (Platformer, 20)],
        MoodId::Unknown => &[],
    }
}

/// Lowercase keywords that signal a mood in a game's title or description
pub fn keywords(mood: MoodId) -> &'static [&'static str] {
    match mood {
        MoodId::Intense => &["intense", "survive", "battle", "combat", "deadly"],
        MoodId::Strategic => &["strategy", "tactic", "plan", "command", "empire"],
        MoodId::Relaxing => &["relax", "cozy", "peaceful", "calm", "farm"],
        MoodId::Creative => &["build", "create", "craft", "design", "sandbox"],
        MoodId::HighEnergy => &["fast", "speed", "rhythm", "race", "dash"],
        MoodId::Atmospheric => &["atmospher", "mysterious", "haunting", "explore", "world"],
        MoodId::Challenging => &["challeng", "difficult", "master", "precise", "permadeath"],
        MoodId::StoryRich => &["story", "narrative", "character", "journey", "choices"],
        MoodId::Competitive => &["competitive", "ranked", "versus", "tournament", "leaderboard"],
        MoodId::Social => &["co-op", "friends", "together", "multiplayer", "online"],
        MoodId::Experimental => &["experimental", "unique", "unusual", "innovative"],
        MoodId::Mindful => &["puzzle", "meditat", "mindful", "thoughtful", "solve"],
        MoodId::Nostalgic => &["retro", "classic", "pixel", "remaster", "arcade"],
        MoodId::Gritty => &["gritty", "brutal", "dark", "war", "crime"],
        MoodId::Surreal => &["surreal", "dream", "strange", "bizarre", "psychedelic"],
        MoodId::ActionPacked => &["action", "explosive", "shoot", "fight", "chaos"],
        MoodId::Unknown => &[],
    }
}
