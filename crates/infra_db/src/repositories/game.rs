//! PostgreSQL game repository
//!
//! Implements the `GameRepository` port over a single `games` table (see
//! `migrations/0001_create_games.sql`). Page queries order by `id`, which
//! for v7 identifiers is creation order, matching the in-memory adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{DomainPort, GameId, Page, PageRequest, PortError};
use domain_game::{Game, GameRepository};

use crate::error::{classify_sqlx, DatabaseError};

/// Repository for game records backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Creates a new repository over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_row(&self, id: Uuid) -> Result<Option<GameRow>, DatabaseError> {
        sqlx::query_as::<_, GameRow>(
            r#"
            SELECT id, title, genre, description, created_at, updated_at
            FROM games
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify_sqlx)
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx)?;
        Ok(total as u64)
    }
}

impl DomainPort for PgGameRepository {}

#[async_trait]
impl GameRepository for PgGameRepository {
    async fn get_by_id(&self, id: GameId) -> Result<Option<Game>, PortError> {
        let row = self.fetch_row(*id.as_uuid()).await?;
        Ok(row.map(Game::from))
    }

    async fn get_page(&self, request: PageRequest) -> Result<Page<Game>, PortError> {
        let total = self.count().await?;

        let rows = sqlx::query_as::<_, GameRow>(
            r#"
            SELECT id, title, genre, description, created_at, updated_at
            FROM games
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.size() as i64)
        .bind(request.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(classify_sqlx)
        .map_err(PortError::from)?;

        let items = rows.into_iter().map(Game::from).collect();
        Ok(Page::new(items, request, total))
    }

    async fn create(&self, game: Game) -> Result<Game, PortError> {
        sqlx::query(
            r#"
            INSERT INTO games (id, title, genre, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*game.id.as_uuid())
        .bind(&game.title)
        .bind(&game.genre)
        .bind(&game.description)
        .bind(game.created_at)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(classify_sqlx)
        .map_err(PortError::from)?;

        Ok(game)
    }

    async fn update(&self, game: &Game) -> Result<(), PortError> {
        let result = sqlx::query(
            r#"
            UPDATE games
            SET title = $2, genre = $3, description = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(*game.id.as_uuid())
        .bind(&game.title)
        .bind(&game.genre)
        .bind(&game.description)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(classify_sqlx)
        .map_err(PortError::from)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Game", game.id));
        }
        Ok(())
    }

    async fn delete(&self, id: GameId) -> Result<(), PortError> {
        // Zero rows affected is fine: delete tolerates an absent record.
        sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(classify_sqlx)
            .map_err(PortError::from)?;
        Ok(())
    }
}

/// Database row representation of a game
#[derive(Debug, Clone, sqlx::FromRow)]
struct GameRow {
    id: Uuid,
    title: String,
    genre: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: GameId::from_uuid(row.id),
            title: row.title,
            genre: row.genre,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
