//! Catalog configuration.

use serde::{Deserialize, Serialize};

use marquee_core::constants::{DEFAULT_ENRICHMENT_CONCURRENCY, DEFAULT_GENRE_PAGE_CAP};
use marquee_core::types::Locale;

/// Catalog configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Region used to pick provider availability and release dates
    pub locale: Locale,
    /// Ceiling on `total_pages` for the genre listing
    pub genre_page_cap: u32,
    /// Maximum provider lookups in flight for one request
    pub enrichment_concurrency: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            genre_page_cap: DEFAULT_GENRE_PAGE_CAP,
            enrichment_concurrency: DEFAULT_ENRICHMENT_CONCURRENCY,
        }
    }
}

impl CatalogConfig {
    /// Sets the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the genre listing page cap.
    pub fn with_genre_page_cap(mut self, cap: u32) -> Self {
        self.genre_page_cap = cap;
        self
    }

    /// Sets the enrichment concurrency limit (at least 1).
    pub fn with_enrichment_concurrency(mut self, limit: usize) -> Self {
        self.enrichment_concurrency = limit.max(1);
        self
    }
}
