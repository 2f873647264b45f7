//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))

        // Movies
        .nest("/api/movies", movie_routes())

        .with_state(state)
}

fn movie_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Reference lists
        .route("/genres", get(handlers::genres))
        .route("/providers", get(handlers::providers))

        // Listings
        .route("/genre/:genreId", get(handlers::by_genre))
        .route("/now-playing", get(handlers::now_playing))
        .route("/upcoming", get(handlers::upcoming))
        .route("/popular", get(handlers::popular))

        // Single movie and search
        .route("/detail/:id", get(handlers::detail))
        .route("/search", get(handlers::search))
}
