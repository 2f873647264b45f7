//! Upstream request descriptors.
//!
//! An [`UpstreamRequest`] names one GET against the metadata API: a path,
//! its own query parameters, and which locale parameters the adapter
//! should append. The API key is never part of the descriptor.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LANGUAGE, DEFAULT_REGION, DISCOVER_MIN_VOTE_COUNT, DISCOVER_SORT_BY,
};

/// Language and region the proxy serves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Response language, e.g. `ko-KR`
    pub language: String,
    /// ISO 3166-1 region, e.g. `KR`
    pub region: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.into(),
            region: DEFAULT_REGION.into(),
        }
    }
}

impl Locale {
    /// Creates a locale.
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: region.into(),
        }
    }
}

/// Which region parameter, if any, a request carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegionScope {
    /// No region parameter.
    #[default]
    None,
    /// `region=<region>` (listing endpoints).
    Region,
    /// `watch_region=<region>` (provider endpoints).
    WatchRegion,
}

/// Filters for the genre discovery listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoverFilter {
    /// Genre id; `None` omits the genre filter
    pub genre: Option<u64>,
    /// Watch provider id; `None` omits the provider filter
    pub provider: Option<u64>,
}

/// A single GET against the upstream API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamRequest {
    /// Path relative to the upstream base URL, starting with `/`
    pub path: String,
    /// Request-specific query parameters
    pub params: Vec<(String, String)>,
    /// Whether to append `language`
    pub localized: bool,
    /// Which region parameter to append
    pub region_scope: RegionScope,
}

impl UpstreamRequest {
    /// Creates a request for `path` with no parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            localized: false,
            region_scope: RegionScope::None,
        }
    }

    /// Adds a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Appends the configured `language`.
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Appends the configured region under the given parameter name.
    pub fn scoped(mut self, scope: RegionScope) -> Self {
        self.region_scope = scope;
        self
    }

    /// Returns the value of a request parameter, if set.
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Full parameter list for `locale`, without the API key.
    pub fn query_pairs(&self, locale: &Locale) -> Vec<(String, String)> {
        let mut pairs = self.params.clone();
        if self.localized {
            pairs.push(("language".into(), locale.language.clone()));
        }
        match self.region_scope {
            RegionScope::None => {}
            RegionScope::Region => pairs.push(("region".into(), locale.region.clone())),
            RegionScope::WatchRegion => {
                pairs.push(("watch_region".into(), locale.region.clone()))
            }
        }
        pairs
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ENDPOINTS
    // ═══════════════════════════════════════════════════════════════════════════

    /// `GET /genre/movie/list`
    pub fn genres() -> Self {
        Self::new("/genre/movie/list").localized()
    }

    /// `GET /watch/providers/movie`
    pub fn watch_providers() -> Self {
        Self::new("/watch/providers/movie")
            .localized()
            .scoped(RegionScope::WatchRegion)
    }

    /// `GET /discover/movie`, sorted by rating with a vote-count floor.
    pub fn discover(filter: &DiscoverFilter, page: u32) -> Self {
        let mut request = Self::new("/discover/movie").localized();
        if let Some(genre) = filter.genre {
            request = request.param("with_genres", genre);
        }
        request = request
            .param("sort_by", DISCOVER_SORT_BY)
            .param("vote_count.gte", DISCOVER_MIN_VOTE_COUNT);
        if let Some(provider) = filter.provider {
            request = request
                .param("with_watch_providers", provider)
                .scoped(RegionScope::WatchRegion);
        }
        request.param("page", page)
    }

    /// `GET /movie/{id}/watch/providers`
    pub fn movie_providers(movie_id: u64) -> Self {
        Self::new(format!("/movie/{}/watch/providers", movie_id))
    }

    /// `GET /movie/now_playing`, first page.
    pub fn now_playing() -> Self {
        Self::new("/movie/now_playing")
            .localized()
            .scoped(RegionScope::Region)
            .param("page", 1)
    }

    /// `GET /movie/upcoming`, first page.
    pub fn upcoming() -> Self {
        Self::new("/movie/upcoming")
            .localized()
            .scoped(RegionScope::Region)
            .param("page", 1)
    }

    /// `GET /movie/top_rated`
    pub fn top_rated(page: u32) -> Self {
        Self::new("/movie/top_rated")
            .localized()
            .scoped(RegionScope::Region)
            .param("page", page)
    }

    /// `GET /movie/{id}`
    pub fn movie(movie_id: u64) -> Self {
        Self::new(format!("/movie/{}", movie_id)).localized()
    }

    /// `GET /movie/{id}/release_dates`
    pub fn release_dates(movie_id: u64) -> Self {
        Self::new(format!("/movie/{}/release_dates", movie_id))
    }

    /// `GET /movie/{id}/videos`
    pub fn videos(movie_id: u64) -> Self {
        Self::new(format!("/movie/{}/videos", movie_id))
    }

    /// `GET /search/movie`, first page.
    pub fn search(query: &str) -> Self {
        Self::new("/search/movie")
            .localized()
            .param("query", query)
            .param("page", 1)
    }
}
