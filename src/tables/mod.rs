//! Static taxonomy tables
//!
//! The tables are hand-authored data compiled into the binary. Lookups keyed
//! by canonical ids are exhaustive matches, so a new genre or mood cannot be
//! added without deciding its table entries. String-keyed tables (aliases and
//! platform indices) and value ranges are checked at startup by [`validate`].

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{GenreId, MasterMood, MoodId};
use crate::services::normalizer::{fold_key, normalize_genre_name};
use crate::services::scorer::GENRE_FIT_MAX;

pub mod genres;
pub mod master_moods;
pub mod moods;

pub use genres::{inferred_moods, typical_session, GENRE_ALIAS_TABLE, GENRE_INDEX_TABLE};
pub use master_moods::sub_moods;
pub use moods::{compatible_moods, genre_weights, keywords, MOOD_ALIAS_TABLE};

/// Version of the table set; bump whenever any table changes
pub const TAXONOMY_VERSION: u32 = 3;

/// Taxonomy table integrity violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("genre index {index} names '{name}', which does not resolve to a known genre")]
    UnresolvedIndex { index: u64, name: &'static str },

    #[error("{table} alias '{alias}' is not in folded form")]
    UnfoldedAlias {
        table: &'static str,
        alias: &'static str,
    },

    #[error("{table} alias '{alias}' is defined more than once")]
    DuplicateAlias {
        table: &'static str,
        alias: &'static str,
    },

    #[error("{table} alias '{alias}' maps to unknown")]
    AliasToUnknown {
        table: &'static str,
        alias: &'static str,
    },

    #[error("canonical name '{name}' is missing from the {table} alias table or maps elsewhere")]
    MissingCanonicalAlias {
        table: &'static str,
        name: &'static str,
    },

    #[error("{table} table for '{key}' references unknown")]
    UnknownReference {
        table: &'static str,
        key: &'static str,
    },

    #[error("mood '{mood}' lists itself as compatible")]
    SelfCompatible { mood: &'static str },

    #[error("genre weight {weight} for '{genre}' under mood '{mood}' is outside 1..={max}")]
    WeightOutOfRange {
        mood: &'static str,
        genre: &'static str,
        weight: u32,
        max: u32,
    },

    #[error("genre '{genre}' is weighted more than once under mood '{mood}'")]
    DuplicateWeight {
        mood: &'static str,
        genre: &'static str,
    },

    #[error("mood '{mood}' has no keywords")]
    EmptyKeywords { mood: &'static str },

    #[error("keyword '{keyword}' for mood '{mood}' must be lowercase and trimmed")]
    InvalidKeyword {
        mood: &'static str,
        keyword: &'static str,
    },

    #[error("master mood '{master}' has no sub-moods")]
    EmptyMasterMood { master: &'static str },

    #[error("master mood '{master}' collides with a mood alias")]
    MasterMoodShadowsAlias { master: &'static str },
}

/// Checks every table for integrity violations
///
/// Returns the first violation found. Run once at startup; a failure means
/// the tables are inconsistent and no recommendation can be trusted.
pub fn validate() -> Result<(), TableError> {
    validate_index_table()?;
    validate_aliases(
        "genre",
        GENRE_ALIAS_TABLE.iter().map(|(alias, g)| (*alias, g.is_unknown())),
    )?;
    validate_aliases(
        "mood",
        MOOD_ALIAS_TABLE.iter().map(|(alias, m)| (*alias, m.is_unknown())),
    )?;
    validate_canonical_names()?;
    let moods = || MoodId::ALL.into_iter().filter(|m| !m.is_unknown());
    validate_inference(GenreId::ALL.into_iter().map(|g| (g, inferred_moods(g))))?;
    validate_compatibility(moods().map(|m| (m, compatible_moods(m))))?;
    validate_genre_weights(moods().map(|m| (m, genre_weights(m))))?;
    validate_keywords(moods().map(|m| (m, keywords(m))))?;
    validate_master_moods(
        MasterMood::ALL.into_iter().map(|m| (m, sub_moods(m))),
        MOOD_ALIAS_TABLE,
    )?;

    tracing::info!(
        version = TAXONOMY_VERSION,
        genre_aliases = GENRE_ALIAS_TABLE.len(),
        mood_aliases = MOOD_ALIAS_TABLE.len(),
        "Taxonomy tables validated"
    );

    Ok(())
}

fn validate_index_table() -> Result<(), TableError> {
    for (index, name) in GENRE_INDEX_TABLE {
        if normalize_genre_name(name).is_unknown() {
            return Err(TableError::UnresolvedIndex {
                index: *index,
                name: *name,
            });
        }
    }
    Ok(())
}

fn validate_aliases(
    table: &'static str,
    entries: impl Iterator<Item = (&'static str, bool)>,
) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    for (alias, is_unknown) in entries {
        if fold_key(alias) != alias {
            return Err(TableError::UnfoldedAlias { table, alias });
        }
        if !seen.insert(alias) {
            return Err(TableError::DuplicateAlias { table, alias });
        }
        if is_unknown {
            return Err(TableError::AliasToUnknown { table, alias });
        }
    }
    Ok(())
}

fn validate_canonical_names() -> Result<(), TableError> {
    for genre in GenreId::ALL.into_iter().filter(|g| !g.is_unknown()) {
        let maps_to_self = GENRE_ALIAS_TABLE
            .iter()
            .any(|(alias, target)| *alias == genre.as_str() && *target == genre);
        if !maps_to_self {
            return Err(TableError::MissingCanonicalAlias {
                table: "genre",
                name: genre.as_str(),
            });
        }
    }

    for mood in MoodId::ALL.into_iter().filter(|m| !m.is_unknown()) {
        let maps_to_self = MOOD_ALIAS_TABLE
            .iter()
            .any(|(alias, target)| *alias == mood.as_str() && *target == mood);
        if !maps_to_self {
            return Err(TableError::MissingCanonicalAlias {
                table: "mood",
                name: mood.as_str(),
            });
        }
    }
    Ok(())
}

fn validate_inference(
    entries: impl Iterator<Item = (GenreId, &'static [MoodId])>,
) -> Result<(), TableError> {
    for (genre, moods) in entries {
        if moods.iter().any(MoodId::is_unknown) {
            return Err(TableError::UnknownReference {
                table: "genre inference",
                key: genre.as_str(),
            });
        }
    }
    Ok(())
}

fn validate_compatibility(
    entries: impl Iterator<Item = (MoodId, &'static [MoodId])>,
) -> Result<(), TableError> {
    for (mood, compatible) in entries {
        if compatible.contains(&mood) {
            return Err(TableError::SelfCompatible {
                mood: mood.as_str(),
            });
        }
        if compatible.iter().any(MoodId::is_unknown) {
            return Err(TableError::UnknownReference {
                table: "mood compatibility",
                key: mood.as_str(),
            });
        }
    }
    Ok(())
}

fn validate_genre_weights(
    entries: impl Iterator<Item = (MoodId, &'static [(GenreId, u32)])>,
) -> Result<(), TableError> {
    for (mood, weights) in entries {
        let mut weighted = HashSet::new();
        for (genre, weight) in weights {
            if genre.is_unknown() {
                return Err(TableError::UnknownReference {
                    table: "mood genre weight",
                    key: mood.as_str(),
                });
            }
            if *weight == 0 || *weight > GENRE_FIT_MAX {
                return Err(TableError::WeightOutOfRange {
                    mood: mood.as_str(),
                    genre: genre.as_str(),
                    weight: *weight,
                    max: GENRE_FIT_MAX,
                });
            }
            if !weighted.insert(*genre) {
                return Err(TableError::DuplicateWeight {
                    mood: mood.as_str(),
                    genre: genre.as_str(),
                });
            }
        }
    }
    Ok(())
}

fn validate_keywords(
    entries: impl Iterator<Item = (MoodId, &'static [&'static str])>,
) -> Result<(), TableError> {
    for (mood, words) in entries {
        if words.is_empty() {
            return Err(TableError::EmptyKeywords {
                mood: mood.as_str(),
            });
        }
        for keyword in words {
            if keyword.is_empty() || keyword.trim() != *keyword || keyword.to_lowercase() != *keyword
            {
                return Err(TableError::InvalidKeyword {
                    mood: mood.as_str(),
                    keyword: *keyword,
                });
            }
        }
    }
    Ok(())
}

fn validate_master_moods(
    entries: impl Iterator<Item = (MasterMood, &'static [MoodId])>,
    mood_aliases: &[(&'static str, MoodId)],
) -> Result<(), TableError> {
    for (master, moods) in entries {
        if moods.is_empty() {
            return Err(TableError::EmptyMasterMood {
                master: master.as_str(),
            });
        }
        if moods.iter().any(MoodId::is_unknown) {
            return Err(TableError::UnknownReference {
                table: "master mood",
                key: master.as_str(),
            });
        }
        if mood_aliases
            .iter()
            .any(|(alias, _)| *alias == master.as_str())
        {
            return Err(TableError::MasterMoodShadowsAlias {
                master: master.as_str(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_validate_aliases_rejects_unfolded() {
        let entries = [("Action Games", false)];
        let result = validate_aliases("genre", entries.into_iter());
        assert_eq!(
            result,
            Err(TableError::UnfoldedAlias {
                table: "genre",
                alias: "Action Games"
            })
        );
    }

    #[test]
    fn test_validate_aliases_rejects_duplicates() {
        let entries = [("rpg", false), ("rpg", false)];
        let result = validate_aliases("genre", entries.into_iter());
        assert!(matches!(result, Err(TableError::DuplicateAlias { .. })));
    }

    #[test]
    fn test_validate_aliases_rejects_unknown_target() {
        let entries = [("misc", true)];
        let result = validate_aliases("mood", entries.into_iter());
        assert!(matches!(result, Err(TableError::AliasToUnknown { .. })));
    }

    #[test]
    fn test_table_error_messages() {
        let err = TableError::WeightOutOfRange {
            mood: "intense",
            genre: "shooter",
            weight: 45,
            max: 30,
        };
        assert_eq!(
            err.to_string(),
            "genre weight 45 for 'shooter' under mood 'intense' is outside 1..=30"
        );
    }

    #[test]
    fn test_inference_rejects_unknown_mood() {
        let entries = [(
            GenreId::Rpg,
            &[MoodId::StoryRich, MoodId::Unknown] as &[MoodId],
        )];
        assert_eq!(
            validate_inference(entries.into_iter()),
            Err(TableError::UnknownReference {
                table: "genre inference",
                key: "rpg"
            })
        );
    }

    #[test]
    fn test_compatibility_rejects_self_and_unknown() {
        let entries = [(
            MoodId::Intense,
            &[MoodId::Challenging, MoodId::Intense] as &[MoodId],
        )];
        assert_eq!(
            validate_compatibility(entries.into_iter()),
            Err(TableError::SelfCompatible { mood: "intense" })
        );

        let entries = [(MoodId::Relaxing, &[MoodId::Unknown] as &[MoodId])];
        assert!(matches!(
            validate_compatibility(entries.into_iter()),
            Err(TableError::UnknownReference { key: "relaxing", .. })
        ));
    }

    #[test]
    fn test_genre_weights_reject_bad_entries() {
        let zero = [(MoodId::Intense, &[(GenreId::Shooter, 0u32)] as &[(GenreId, u32)])];
        assert!(matches!(
            validate_genre_weights(zero.into_iter()),
            Err(TableError::WeightOutOfRange { weight: 0, .. })
        ));

        let too_heavy = [(
            MoodId::Intense,
            &[(GenreId::Shooter, 31u32)] as &[(GenreId, u32)],
        )];
        assert!(matches!(
            validate_genre_weights(too_heavy.into_iter()),
            Err(TableError::WeightOutOfRange { genre: "shooter", .. })
        ));

        let twice = [(
            MoodId::Intense,
            &[(GenreId::Shooter, 20u32), (GenreId::Shooter, 25u32)] as &[(GenreId, u32)],
        )];
        assert_eq!(
            validate_genre_weights(twice.into_iter()),
            Err(TableError::DuplicateWeight {
                mood: "intense",
                genre: "shooter"
            })
        );

        let unknown = [(MoodId::Social, &[(GenreId::Unknown, 10u32)] as &[(GenreId, u32)])];
        assert!(matches!(
            validate_genre_weights(unknown.into_iter()),
            Err(TableError::UnknownReference { key: "social", .. })
        ));
    }

    #[test]
    fn test_keywords_reject_empty_and_unnormalized() {
        let empty = [(MoodId::Surreal, &[] as &[&str])];
        assert_eq!(
            validate_keywords(empty.into_iter()),
            Err(TableError::EmptyKeywords { mood: "surreal" })
        );

        let padded = [(MoodId::Surreal, &["dream", " weird"] as &[&str])];
        assert_eq!(
            validate_keywords(padded.into_iter()),
            Err(TableError::InvalidKeyword {
                mood: "surreal",
                keyword: " weird"
            })
        );

        let upper = [(MoodId::Surreal, &["Dream"] as &[&str])];
        assert!(matches!(
            validate_keywords(upper.into_iter()),
            Err(TableError::InvalidKeyword { .. })
        ));
    }

    #[test]
    fn test_master_moods_reject_bad_entries() {
        let empty = [(MasterMood::Party, &[] as &[MoodId])];
        assert_eq!(
            validate_master_moods(empty.into_iter(), MOOD_ALIAS_TABLE),
            Err(TableError::EmptyMasterMood { master: "party" })
        );

        let unknown = [(
            MasterMood::Party,
            &[MoodId::Social, MoodId::Unknown] as &[MoodId],
        )];
        assert!(matches!(
            validate_master_moods(unknown.into_iter(), MOOD_ALIAS_TABLE),
            Err(TableError::UnknownReference { key: "party", .. })
        ));

        let shadowing = [("zen", MoodId::Relaxing)];
        let entries = [(MasterMood::Zen, &[MoodId::Relaxing] as &[MoodId])];
        assert_eq!(
            validate_master_moods(entries.into_iter(), &shadowing),
            Err(TableError::MasterMoodShadowsAlias { master: "zen" })
        );
    }
}
