use std::sync::Arc;

use crate::config::Config;
use crate::services::RecommendationEngine;
use crate::store::{InMemoryLibrary, LibraryStore, MoodInferenceCache};
use crate::tables::TableError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: RecommendationEngine,
    pub library: Arc<dyn LibraryStore>,
    pub limits: Limits,
}

/// Bounds on how many recommendations one request returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub default: usize,
    pub max: usize,
}

impl Limits {
    /// Requested limit, or the default, capped at the maximum
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default).min(self.max)
    }
}

impl From<&Config> for Limits {
    fn from(config: &Config) -> Self {
        Self {
            default: config.default_limit,
            max: config.max_limit,
        }
    }
}

impl AppState {
    /// Creates state with an empty in-memory library and a fresh cache
    pub fn new(config: &Config) -> Result<Self, TableError> {
        Self::with_library(config, Arc::new(InMemoryLibrary::new()))
    }

    pub fn with_library(
        config: &Config,
        library: Arc<dyn LibraryStore>,
    ) -> Result<Self, TableError> {
        let engine = RecommendationEngine::new(Arc::new(MoodInferenceCache::new()))?;
        Ok(Self {
            engine,
            library,
            limits: Limits::from(config),
        })
    }
}
