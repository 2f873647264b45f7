//! # Marquee API Server
//!
//! REST API over the movie catalog, consumed by the web frontend.
//!
//! ## Endpoints
//!
//! - `GET /api/movies/genres` - Genre list
//! - `GET /api/movies/providers` - Watch providers for the region
//! - `GET /api/movies/genre/:genreId` - Top-rated movies of a genre, paged
//! - `GET /api/movies/now-playing` - Movies in theaters
//! - `GET /api/movies/upcoming` - Upcoming movies
//! - `GET /api/movies/popular` - Top-rated movies, paged
//! - `GET /api/movies/detail/:id` - Movie detail with trailer
//! - `GET /api/movies/search` - Search with genre/provider filters
//! - `GET /api/health` - Liveness and cache size
//!
//! ## Example
//!
//! ```rust,ignore
//! use marquee_api::{ApiServer, ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! let server = ApiServer::new(config)?;
//! server.run(([0, 0, 0, 0], 3001)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;
mod sweep;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};
pub use sweep::spawn_cache_sweeper;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use marquee_core::error::Result;

/// API server for Marquee.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a server backed by the upstream API described in `config`.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self::with_state(Arc::new(AppState::new(config)?)))
    }

    /// Creates a server over prepared state.
    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Shared application state.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    ///
    /// Expired cache entries are swept in the background while serving.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        let cache = self.state.cache().clone();
        let period = cache.config().ttl();
        let sweeper = spawn_cache_sweeper(cache, period);
        info!("Marquee API server listening on {}", addr);

        let served = axum::serve(listener, self.router()).await;
        sweeper.abort();
        served
    }
}
