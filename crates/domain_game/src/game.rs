//! Game entity and write-side input model
//!
//! A [`Game`] is the single resource the catalog manages. Its identity is
//! assigned at creation and never changes; every other domain field is
//! mutable through the [`GameInput`] mapping. Keeping the input model free
//! of an id makes it impossible for a caller to smuggle an identity change
//! through an update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::GameId;

/// Maximum length of a game title after trimming
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a genre label
pub const MAX_GENRE_LEN: usize = 100;

/// Maximum length of a description
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// A game record in the catalog
///
/// `id` and `created_at` are fixed at construction; the remaining fields
/// are replaced wholesale by [`GameInput::apply_to`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identity, assigned at creation and immutable thereafter
    pub id: GameId,
    /// Display title
    pub title: String,
    /// Optional genre label
    pub genre: Option<String>,
    /// Optional free-form description
    pub description: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Creates a new game from validated input, assigning a fresh identity
    pub fn new(input: &GameInput) -> Self {
        let now = Utc::now();
        let mut game = Self {
            id: GameId::new(),
            title: String::new(),
            genre: None,
            description: None,
            created_at: now,
            updated_at: now,
        };
        input.apply_to(&mut game);
        game
    }
}

/// Write-side representation of a game
///
/// Carries only the mutable domain fields, never an id. Used both to
/// construct a new [`Game`] and to refresh an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInput {
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
}

impl GameInput {
    /// Creates an input with just a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Copies the mutable fields onto `game`, leaving `id` and
    /// `created_at` untouched and refreshing `updated_at`
    pub fn apply_to(&self, game: &mut Game) {
        game.title = self.title.trim().to_string();
        game.genre = self
            .genre
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(String::from);
        game.description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);
        game.updated_at = Utc::now();
    }

    /// Validates the structural rules for this input
    ///
    /// Returns every violation, not just the first, so the boundary layer
    /// can report them all in one response.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push("title is required".to_string());
        } else if title.len() > MAX_TITLE_LEN {
            errors.push(format!("title must be at most {MAX_TITLE_LEN} characters"));
        }

        if let Some(genre) = self.genre.as_deref() {
            if genre.trim().len() > MAX_GENRE_LEN {
                errors.push(format!("genre must be at most {MAX_GENRE_LEN} characters"));
            }
        }

        if let Some(description) = self.description.as_deref() {
            if description.trim().len() > MAX_DESCRIPTION_LEN {
                errors.push(format!(
                    "description must be at most {MAX_DESCRIPTION_LEN} characters"
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_carries_input_fields() {
        let input = GameInput {
            title: "Catan".to_string(),
            genre: Some("Strategy".to_string()),
            description: Some("Trade, build, settle.".to_string()),
        };
        let game = Game::new(&input);

        assert_eq!(game.title, "Catan");
        assert_eq!(game.genre.as_deref(), Some("Strategy"));
        assert_eq!(game.created_at, game.updated_at);
    }

    #[test]
    fn test_apply_to_preserves_identity_and_created_at() {
        let game = Game::new(&GameInput::titled("Catan"));
        let id = game.id;
        let created_at = game.created_at;

        let mut updated = game;
        GameInput::titled("Catan 2").apply_to(&mut updated);

        assert_eq!(updated.id, id);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.title, "Catan 2");
    }

    #[test]
    fn test_apply_to_clears_absent_optional_fields() {
        let mut game = Game::new(&GameInput {
            title: "Catan".to_string(),
            genre: Some("Strategy".to_string()),
            description: None,
        });

        GameInput::titled("Catan").apply_to(&mut game);
        assert_eq!(game.genre, None);
    }

    #[test]
    fn test_apply_to_trims_whitespace() {
        let mut game = Game::new(&GameInput::titled("Catan"));
        GameInput {
            title: "  Gloomhaven  ".to_string(),
            genre: Some("   ".to_string()),
            description: None,
        }
        .apply_to(&mut game);

        assert_eq!(game.title, "Gloomhaven");
        assert_eq!(game.genre, None);
    }

    #[test]
    fn test_validate_requires_title() {
        let errors = GameInput::titled("   ").validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("title is required")));
    }

    #[test]
    fn test_validate_rejects_oversized_fields() {
        let input = GameInput {
            title: "a".repeat(MAX_TITLE_LEN + 1),
            genre: Some("g".repeat(MAX_GENRE_LEN + 1)),
            description: Some("d".repeat(MAX_DESCRIPTION_LEN + 1)),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_accepts_minimal_input() {
        assert!(GameInput::titled("Go").validate().is_ok());
    }
}
