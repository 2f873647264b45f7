//! DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

use marquee_catalog::{GenreQuery, SearchQuery};

/// Query string of the genre listing.
#[derive(Debug, Default, Deserialize)]
pub struct GenrePageParams {
    /// Watch provider id filter
    #[serde(rename = "ottId")]
    pub ott_id: Option<String>,
    /// Logical page (defaults to 1)
    pub page: Option<u32>,
}

impl GenrePageParams {
    /// Combines the query string with the genre from the path.
    pub fn into_query(self, genre: String) -> GenreQuery {
        GenreQuery {
            genre,
            provider: self.ott_id,
            page: self.page,
        }
    }
}

/// Query string of the popular listing.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Logical page (defaults to 1)
    pub page: Option<u32>,
}

/// Query string of the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    pub query: Option<String>,
    /// Genre id filter
    #[serde(rename = "genreId")]
    pub genre_id: Option<String>,
    /// Watch provider id filter
    #[serde(rename = "ottId")]
    pub ott_id: Option<String>,
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        SearchQuery {
            query: params.query,
            genre: params.genre_id,
            provider: params.ott_id,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Live cache entries
    pub cache_entries: usize,
}
