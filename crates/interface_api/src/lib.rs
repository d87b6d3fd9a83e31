//! HTTP API Layer
//!
//! This crate provides the REST API for the game catalog using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the game resource and health checks
//! - **Middleware**: Authentication, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! The boundary owns transport concerns only: it resolves the caller
//! principal from the bearer token, hands requests to the domain
//! `GameService`, and maps domain outcomes onto HTTP status codes.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(service, Some(pool), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_game::GameService;
use infra_db::DatabasePool;

use crate::config::ApiConfig;
use crate::handlers::{game, health};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: GameService,
    /// Present when the catalog is backed by PostgreSQL; readiness checks
    /// ping it. Absent for in-memory deployments.
    pub pool: Option<DatabasePool>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - The game resource service
/// * `pool` - Database pool for readiness checks, if one is in use
/// * `config` - API configuration
pub fn create_router(service: GameService, pool: Option<DatabasePool>, config: ApiConfig) -> Router {
    let state = AppState {
        service,
        pool,
        config,
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Game routes
    let game_routes = Router::new()
        .route("/", get(game::list_games).post(game::create_game))
        .route(
            "/:id",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        );

    // Protected API routes
    let api_routes = Router::new()
        .nest("/games", game_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
