//! Endpoint parameters.

use marquee_core::constants::ALL_GENRES;
use marquee_core::error::{MovieError, Result};

/// Parameters of the genre listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenreQuery {
    /// Genre id, or `"all"` for no genre filter
    pub genre: String,
    /// Watch provider id filter
    pub provider: Option<String>,
    /// Logical page, defaults to 1
    pub page: Option<u32>,
}

impl GenreQuery {
    /// Creates a query for the first page of `genre`.
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            provider: None,
            page: None,
        }
    }

    /// Filters by watch provider.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Selects a logical page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Parameters of the movie search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query; required
    pub query: Option<String>,
    /// Genre id filter applied to the hits
    pub genre: Option<String>,
    /// Watch provider id filter applied to the enriched hits
    pub provider: Option<String>,
}

impl SearchQuery {
    /// Creates a search for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Keeps only hits in `genre`.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Keeps only hits offered by `provider`.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Genre listing parameters after validation.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ValidGenre {
    pub genre: Option<u64>,
    pub provider: Option<u64>,
    pub page: u32,
}

impl GenreQuery {
    /// `"all"` and blank ids mean no filter; anything else must be numeric.
    pub(crate) fn validate(&self) -> Result<ValidGenre> {
        let genre = non_blank(Some(self.genre.as_str()))
            .filter(|g| *g != ALL_GENRES)
            .map(|g| parse_id("genreId", g))
            .transpose()?;
        let provider = non_blank(self.provider.as_deref())
            .map(|p| parse_id("ottId", p))
            .transpose()?;

        Ok(ValidGenre {
            genre,
            provider,
            page: validate_page(self.page)?,
        })
    }
}

/// Search parameters after validation.
#[derive(Debug)]
pub(crate) struct ValidSearch<'a> {
    pub query: &'a str,
    pub genre: Option<u64>,
    pub provider: Option<u64>,
}

impl SearchQuery {
    pub(crate) fn validate(&self) -> Result<ValidSearch<'_>> {
        let query = non_blank(self.query.as_deref()).ok_or(MovieError::MissingParameter("query"))?;
        let genre = non_blank(self.genre.as_deref())
            .filter(|g| *g != ALL_GENRES)
            .map(|g| parse_id("genreId", g))
            .transpose()?;
        let provider = non_blank(self.provider.as_deref())
            .map(|p| parse_id("ottId", p))
            .transpose()?;

        Ok(ValidSearch {
            query,
            genre,
            provider,
        })
    }
}

/// Validates a logical page number.
pub(crate) fn validate_page(page: Option<u32>) -> Result<u32> {
    match page.unwrap_or(1) {
        0 => Err(MovieError::InvalidParameter {
            name: "page",
            reason: "must be at least 1".into(),
        }),
        page => Ok(page),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_id(name: &'static str, value: &str) -> Result<u64> {
    value.parse().map_err(|_| MovieError::InvalidParameter {
        name,
        reason: format!("expected a numeric id, got '{}'", value),
    })
}
