use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::{GameId, GameRecord};

#[cfg(test)]
use mockall::automock;

/// Source of the user's game library
///
/// Records are already normalized. Listing order is library order, which
/// the ranker uses to break ties.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LibraryStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<GameRecord>>;

    async fn get(&self, id: &GameId) -> AppResult<Option<GameRecord>>;

    /// Inserts or replaces a record, returning the one it replaced
    async fn upsert(&self, game: GameRecord) -> AppResult<Option<GameRecord>>;
}

/// Process-local library; contents are lost on shutdown
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    games: RwLock<Vec<GameRecord>>,
}

impl InMemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LibraryStore for InMemoryLibrary {
    async fn list(&self) -> AppResult<Vec<GameRecord>> {
        Ok(self.games.read().await.clone())
    }

    async fn get(&self, id: &GameId) -> AppResult<Option<GameRecord>> {
        let games = self.games.read().await;
        Ok(games.iter().find(|g| &g.id == id).cloned())
    }

    async fn upsert(&self, game: GameRecord) -> AppResult<Option<GameRecord>> {
        let mut games = self.games.write().await;
        // Replacing in place keeps the record's library position
        match games.iter_mut().find(|g| g.id == game.id) {
            Some(existing) => Ok(Some(std::mem::replace(existing, game))),
            None => {
                games.push(game);
                Ok(None)
            }
        }
    }
}
