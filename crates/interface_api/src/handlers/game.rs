//! Game handlers
//!
//! Thin translation layer: extract the principal resolved by the auth
//! middleware, hand the request to the domain service, map the outcome.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use validator::Validate;

use core_kernel::{Page, PageRequest, DEFAULT_PAGE_SIZE};
use domain_game::Principal;

use crate::dto::game::{GameRequest, GameResponse, ListParams};
use crate::error::ApiError;
use crate::AppState;

/// Lists one page of games
pub async fn list_games(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<GameResponse>>, ApiError> {
    let request = PageRequest::new(
        params.page.unwrap_or(1),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE as i64),
    );
    let page = state.service.list(&principal, request).await?;
    Ok(Json(page.map(GameResponse::from)))
}

/// Gets a game by ID
pub async fn get_game(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state.service.get(&principal, &id).await?;
    Ok(Json(GameResponse::from(game)))
}

/// Creates a new game
///
/// Responds `201 Created` with a `Location` header built from the
/// assigned identity.
pub async fn create_game(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<GameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let created = state.service.create(&principal, request.into()).await?;
    let location = format!("/api/v1/games/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(GameResponse::from(created)),
    ))
}

/// Updates a game
pub async fn update_game(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(request): Json<GameRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    request.validate()?;

    let updated = state.service.update(&principal, &id, request.into()).await?;
    Ok(Json(GameResponse::from(updated)))
}

/// Deletes a game
pub async fn delete_game(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&principal, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
