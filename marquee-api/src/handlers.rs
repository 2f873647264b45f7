//! API route handlers.
//!
//! Each handler forwards to the catalog and answers with the cached JSON
//! payload. Failures other than bad input surface as a fixed message.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::Value;

use marquee_catalog::SearchQuery;
use marquee_core::traits::CacheStore;

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

const GENRES_FAILED: &str = "장르 데이터 로딩 실패";
const PROVIDERS_FAILED: &str = "OTT 제공자 데이터를 불러올 수 없습니다.";
const GENRE_LISTING_FAILED: &str = "영화 데이터를 불러올 수 없습니다.";
const NOW_PLAYING_FAILED: &str = "현재 상영중 영화를 불러올 수 없습니다.";
const UPCOMING_FAILED: &str = "개봉 예정 영화를 불러올 수 없습니다.";
const POPULAR_FAILED: &str = "인기 영화를 불러올 수 없습니다.";
const DETAIL_FAILED: &str = "영화 상세 정보를 불러올 수 없습니다.";
const SEARCH_FAILED: &str = "영화 검색 결과를 불러올 수 없습니다.";

// ═══════════════════════════════════════════════════════════════════════════
// Movie Handlers
// ═══════════════════════════════════════════════════════════════════════════

/// GET /api/movies/genres
pub async fn genres(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    state
        .catalog
        .genres()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, GENRES_FAILED))
}

/// GET /api/movies/providers
pub async fn providers(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    state
        .catalog
        .providers()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, PROVIDERS_FAILED))
}

/// GET /api/movies/genre/:genreId
pub async fn by_genre(
    State(state): State<Arc<AppState>>,
    genre: std::result::Result<Path<String>, PathRejection>,
    params: std::result::Result<Query<GenrePageParams>, QueryRejection>,
) -> Result<Json<Value>> {
    let Path(genre) = genre?;
    let Query(params) = params?;

    state
        .catalog
        .by_genre(&params.into_query(genre))
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, GENRE_LISTING_FAILED))
}

/// GET /api/movies/now-playing
pub async fn now_playing(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    state
        .catalog
        .now_playing()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, NOW_PLAYING_FAILED))
}

/// GET /api/movies/upcoming
pub async fn upcoming(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    state
        .catalog
        .upcoming()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, UPCOMING_FAILED))
}

/// GET /api/movies/popular
pub async fn popular(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(params) = params?;

    state
        .catalog
        .popular(params.page)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, POPULAR_FAILED))
}

/// GET /api/movies/detail/:id
pub async fn detail(
    State(state): State<Arc<AppState>>,
    movie_id: std::result::Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>> {
    let Path(movie_id) = movie_id?;

    state
        .catalog
        .detail(movie_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, DETAIL_FAILED))
}

/// GET /api/movies/search
pub async fn search(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(params) = params?;

    state
        .catalog
        .search(&SearchQuery::from(params))
        .await
        .map(Json)
        .map_err(|e| ApiError::from_movie(e, SEARCH_FAILED))
}

// ═══════════════════════════════════════════════════════════════════════════
// Health
// ═══════════════════════════════════════════════════════════════════════════

/// GET /api/health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.uptime_seconds(),
        cache_entries: state.catalog.cache().entry_count().unwrap_or(0),
    })
}
