//! In-memory repository adapter
//!
//! Stores games in an ordered map behind an async RwLock. The BTreeMap key
//! order (ascending `GameId`, which is creation order for v7 identifiers)
//! gives `get_page` its stable total order without sorting on every call.
//!
//! Used by the test suites and by deployments that do not need durable
//! storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{page, DomainPort, GameId, Page, PageRequest, PortError};

use crate::game::Game;
use crate::ports::GameRepository;

/// In-memory implementation of [`GameRepository`]
#[derive(Debug, Default, Clone)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<BTreeMap<GameId, Game>>>,
}

impl InMemoryGameRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates with games, for tests
    pub async fn with_games(games: Vec<Game>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.games.write().await;
            for game in games {
                map.insert(game.id, game);
            }
        }
        repo
    }

    /// Number of stored games
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// True when no games are stored
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

impl DomainPort for InMemoryGameRepository {}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn get_by_id(&self, id: GameId) -> Result<Option<Game>, PortError> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn get_page(&self, request: PageRequest) -> Result<Page<Game>, PortError> {
        let games = self.games.read().await;
        let ordered: Vec<Game> = games.values().cloned().collect();
        Ok(page::slice_page(&ordered, request))
    }

    async fn create(&self, game: Game) -> Result<Game, PortError> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            return Err(PortError::conflict(format!(
                "game {} already exists",
                game.id
            )));
        }
        games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn update(&self, game: &Game) -> Result<(), PortError> {
        let mut games = self.games.write().await;
        match games.get_mut(&game.id) {
            Some(stored) => {
                *stored = game.clone();
                Ok(())
            }
            None => Err(PortError::not_found("Game", game.id)),
        }
    }

    async fn delete(&self, id: GameId) -> Result<(), PortError> {
        // Tolerant of absence: concurrent deletes must not fail.
        self.games.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameInput;

    fn game(title: &str) -> Game {
        Game::new(&GameInput::titled(title))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryGameRepository::new();
        let created = repo.create(game("Catan")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let repo = InMemoryGameRepository::new();
        assert!(repo.get_by_id(GameId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_identity() {
        let repo = InMemoryGameRepository::new();
        let g = repo.create(game("Catan")).await.unwrap();
        let result = repo.create(g).await;
        assert!(matches!(result, Err(PortError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_page_of_empty_repository() {
        let repo = InMemoryGameRepository::new();
        let page = repo.get_page(PageRequest::new(1, 10)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_pages_are_creation_ordered_and_deterministic() {
        let repo = InMemoryGameRepository::new();
        let mut ids = Vec::new();
        for i in 0..25 {
            let created = repo.create(game(&format!("Game {i}"))).await.unwrap();
            ids.push(created.id);
        }

        let first = repo.get_page(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 25);
        let page_ids: Vec<GameId> = first.items.iter().map(|g| g.id).collect();
        assert_eq!(page_ids, ids[..10]);

        // Same request over an unchanged dataset returns the same page.
        let again = repo.get_page(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(again, first);

        let last = repo.get_page(PageRequest::new(3, 10)).await.unwrap();
        assert_eq!(last.items.len(), 5);

        let beyond = repo.get_page(PageRequest::new(4, 10)).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 25);
    }

    #[tokio::test]
    async fn test_update_overwrites_mutable_fields() {
        let repo = InMemoryGameRepository::new();
        let mut created = repo.create(game("Catan")).await.unwrap();

        GameInput::titled("Catan 2").apply_to(&mut created);
        repo.update(&created).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Catan 2");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_update_vanished_identity_is_not_found() {
        let repo = InMemoryGameRepository::new();
        let created = repo.create(game("Catan")).await.unwrap();
        repo.delete(created.id).await.unwrap();

        let result = repo.update(&created).await;
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryGameRepository::new();
        let created = repo.create(game("Catan")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        // Second delete of the same identity is a no-op, not an error.
        repo.delete(created.id).await.unwrap();
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_creates_all_land() {
        let repo = InMemoryGameRepository::new();
        let mut handles = Vec::new();
        for i in 0..20 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(Game::new(&GameInput::titled(format!("Game {i}"))))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(repo.len().await, 20);
    }
}
