use crate::models::{MasterMood, MoodId};

/// Canonical moods a master mood expands to
pub fn sub_moods(master: MasterMood) -> &'static [MoodId] {
    use MoodId::*;

    match master {
        MasterMood::Adrenaline => &[Intense, HighEnergy, ActionPacked, Competitive],
        MasterMood::BrainPower => &[Strategic, Challenging, Mindful],
        MasterMood::Zen => &[Relaxing, Mindful, Creative],
        MasterMood::StoryTime => &[StoryRich, Atmospheric, Nostalgic],
        MasterMood::Party => &[Social, Competitive],
        MasterMood::DarkSide => &[Gritty, Atmospheric, Intense],
        MasterMood::Offbeat => &[Experimental, Surreal, Creative],
    }
}
