//! Constants shared across Marquee crates.
//!
//! Page geometry, upstream query defaults and the regional locale the
//! proxy serves.

// ═══════════════════════════════════════════════════════════════════════════════
// PAGE GEOMETRY
// ═══════════════════════════════════════════════════════════════════════════════

/// Number of movies the upstream returns per listing page.
pub const UPSTREAM_PAGE_SIZE: usize = 20;

/// Number of upstream pages merged into one logical page.
pub const PAGES_PER_LOGICAL_PAGE: u32 = 2;

/// Number of movies in one logical page (two upstream pages).
pub const LOGICAL_PAGE_SIZE: usize = UPSTREAM_PAGE_SIZE * PAGES_PER_LOGICAL_PAGE as usize;

/// Default ceiling on `total_pages` for the genre listing.
pub const DEFAULT_GENRE_PAGE_CAP: u32 = 10;

/// Number of provider objects kept by the provider listing.
pub const PROVIDER_LIST_LIMIT: usize = 10;

/// Maximum number of search hits enriched with provider data.
pub const SEARCH_ENRICH_LIMIT: usize = 40;

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM QUERY DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default upstream base URL.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default response language.
pub const DEFAULT_LANGUAGE: &str = "ko-KR";

/// Default region for release dates, listings and streaming providers.
pub const DEFAULT_REGION: &str = "KR";

/// Sort order for the genre discovery listing.
pub const DISCOVER_SORT_BY: &str = "vote_average.desc";

/// Minimum vote count for a movie to appear in the genre listing.
pub const DISCOVER_MIN_VOTE_COUNT: u32 = 1000;

/// Sentinel genre id meaning "no genre filter".
pub const ALL_GENRES: &str = "all";

// ═══════════════════════════════════════════════════════════════════════════════
// RELEASE DATES & VIDEOS
// ═══════════════════════════════════════════════════════════════════════════════

/// Release type code for a theatrical release.
pub const RELEASE_TYPE_THEATRICAL: u8 = 3;

/// Video type preferred for the detail trailer.
pub const VIDEO_TYPE_TRAILER: &str = "Trailer";

/// Video type used when no trailer exists.
pub const VIDEO_TYPE_TEASER: &str = "Teaser";

/// Only videos hosted on this site are selected.
pub const VIDEO_SITE_YOUTUBE: &str = "YouTube";

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// Default time-to-live for cached responses, in seconds.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;

/// Default number of provider lookups in flight per request.
pub const DEFAULT_ENRICHMENT_CONCURRENCY: usize = 20;
