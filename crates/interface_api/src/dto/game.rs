//! Game DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_game::{Game, GameInput};

/// Body of create and update requests; never carries an id
#[derive(Debug, Deserialize, Validate)]
pub struct GameRequest {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub genre: Option<String>,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
}

impl From<GameRequest> for GameInput {
    fn from(request: GameRequest) -> Self {
        GameInput {
            title: request.title,
            genre: request.genre,
            description: request.description,
        }
    }
}

/// Pagination query parameters; defaults are page 1, size 10
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id.to_string(),
            title: game.title,
            genre: game.genre,
            description: game.description,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}
