//! Cache keys.
//!
//! A key is the endpoint name plus every parameter that affects the
//! response. Absent filters use the `all` / `none` sentinels so a filtered
//! and an unfiltered request never share an entry.

use std::fmt::Display;

/// Key of the genre list.
pub const GENRES: &str = "genres";

/// Key of the provider list.
pub const PROVIDERS: &str = "providers";

/// Key of the now-playing list.
pub const NOW_PLAYING: &str = "now-playing";

/// Key of the upcoming list.
pub const UPCOMING: &str = "upcoming";

/// `genre-{genre|all}-ott-{provider|none}-page-{page}`
pub fn genre_listing(genre: Option<u64>, provider: Option<u64>, page: u32) -> String {
    format!(
        "genre-{}-ott-{}-page-{}",
        or_sentinel(genre, "all"),
        or_sentinel(provider, "none"),
        page
    )
}

/// `popular-page-{page}`
pub fn popular(page: u32) -> String {
    format!("popular-page-{}", page)
}

/// `detail-{id}`
pub fn detail(movie_id: u64) -> String {
    format!("detail-{}", movie_id)
}

/// `search-{query}-genre-{genre|all}-ott-{provider|none}`
pub fn search(query: &str, genre: Option<u64>, provider: Option<u64>) -> String {
    format!(
        "search-{}-genre-{}-ott-{}",
        query,
        or_sentinel(genre, "all"),
        or_sentinel(provider, "none")
    )
}

fn or_sentinel<T: Display>(value: Option<T>, sentinel: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| sentinel.to_string())
}
