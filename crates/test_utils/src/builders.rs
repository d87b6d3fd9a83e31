//! Builders for domain entities

use domain_game::{Game, GameInput};

/// Fluent builder for [`Game`] values
///
/// # Example
///
/// ```rust
/// use test_utils::GameBuilder;
///
/// let game = GameBuilder::new("Catan")
///     .genre("Strategy")
///     .description("Trade, build, settle.")
///     .build();
/// assert_eq!(game.title, "Catan");
/// ```
#[derive(Debug, Clone)]
pub struct GameBuilder {
    input: GameInput,
}

impl GameBuilder {
    /// Starts a builder with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            input: GameInput::titled(title),
        }
    }

    /// Sets the genre
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.input.genre = Some(genre.into());
        self
    }

    /// Sets the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.input.description = Some(description.into());
        self
    }

    /// Returns the accumulated write-side input
    pub fn input(self) -> GameInput {
        self.input
    }

    /// Builds a game with a fresh identity
    pub fn build(self) -> Game {
        Game::new(&self.input)
    }
}
