//! Common fixtures for the test suites

use domain_game::{Game, GameInput, InMemoryGameRepository, Principal};

use crate::builders::GameBuilder;

/// An admin principal
pub fn admin() -> Principal {
    Principal::admin("admin-1")
}

/// An authenticated principal with no roles
pub fn reader() -> Principal {
    Principal::reader("reader-1")
}

/// The canonical sample game
pub fn catan() -> Game {
    GameBuilder::new("Catan")
        .genre("Strategy")
        .description("Trade, build, settle.")
        .build()
}

/// A batch of distinct inputs, titled "Game 0" through "Game {count-1}"
pub fn sample_inputs(count: usize) -> Vec<GameInput> {
    (0..count)
        .map(|i| GameInput::titled(format!("Game {i}")))
        .collect()
}

/// An in-memory repository pre-populated with `count` games
pub async fn seeded_repository(count: usize) -> InMemoryGameRepository {
    let games = sample_inputs(count).iter().map(Game::new).collect();
    InMemoryGameRepository::with_games(games).await
}
