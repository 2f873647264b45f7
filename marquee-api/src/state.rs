//! App state: catalog, cache, config.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use marquee_cache::{CacheConfig, TtlCache};
use marquee_catalog::{Catalog, CatalogConfig};
use marquee_core::constants::DEFAULT_UPSTREAM_BASE_URL;
use marquee_core::error::{MovieError, Result};
use marquee_core::traits::MovieSource;
use marquee_core::types::Locale;
use marquee_tmdb::{TmdbClient, TmdbConfig};

const DEFAULT_PORT: u16 = 3001;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Listening port
    pub port: u16,
    /// Upstream API client settings
    pub tmdb: TmdbConfig,
    /// Response cache settings
    pub cache: CacheConfig,
    /// Aggregation settings
    pub catalog: CatalogConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            tmdb: TmdbConfig::default(),
            cache: CacheConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// `TMDB_API_KEY` is required. Every other variable has a default.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_key = var("TMDB_API_KEY")
            .ok_or_else(|| MovieError::ConfigError("TMDB_API_KEY is not set".into()))?;
        let locale = Locale::new(
            var("MOVIE_LANGUAGE").unwrap_or(defaults.tmdb.locale.language),
            var("MOVIE_REGION").unwrap_or(defaults.tmdb.locale.region),
        );

        let mut tmdb = TmdbConfig::new(
            var("TMDB_BASE_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.into()),
            api_key,
        )
        .with_locale(locale.clone());
        if let Some(seconds) = parse_var(&var, "UPSTREAM_TIMEOUT_SECONDS")? {
            tmdb = tmdb.with_timeout(seconds);
        }

        let catalog = CatalogConfig::default()
            .with_locale(locale)
            .with_genre_page_cap(
                parse_var(&var, "GENRE_PAGE_CAP")?.unwrap_or(defaults.catalog.genre_page_cap),
            )
            .with_enrichment_concurrency(
                parse_var(&var, "ENRICHMENT_CONCURRENCY")?
                    .unwrap_or(defaults.catalog.enrichment_concurrency),
            );

        Ok(Self {
            port: parse_var(&var, "PORT")?.unwrap_or(defaults.port),
            tmdb,
            cache: CacheConfig::with_ttl_seconds(
                parse_var(&var, "CACHE_TTL_SECONDS")?.unwrap_or(defaults.cache.default_ttl_seconds),
            ),
            catalog,
        })
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>> {
    var(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| MovieError::ConfigError(format!("{} is not a valid number: {}", name, raw)))
        })
        .transpose()
}

/// Shared request-handling state.
pub struct AppState {
    /// Server configuration
    pub config: ApiConfig,
    /// Endpoint operations
    pub catalog: Catalog,
    cache: Arc<TtlCache>,
    started_at: Instant,
}

impl AppState {
    /// Creates state backed by the upstream API client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = TmdbClient::with_config(config.tmdb.clone())?;
        Ok(Self::with_source(Arc::new(client), config))
    }

    /// Creates state over any upstream source.
    pub fn with_source(source: Arc<dyn MovieSource>, config: ApiConfig) -> Self {
        let cache = Arc::new(TtlCache::with_config(config.cache.clone()));
        let catalog = Catalog::new(source, cache.clone(), config.catalog.clone());

        Self {
            config,
            catalog,
            cache,
            started_at: Instant::now(),
        }
    }

    /// The response cache shared with the catalog.
    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    /// Seconds since the state was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
