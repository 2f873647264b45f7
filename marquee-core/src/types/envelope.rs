//! Response shapes produced by the aggregation layer.

use serde::{Deserialize, Serialize};

use super::movie::{Movie, Provider, Video};

/// A movie with its regional provider list attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AugmentedMovie {
    /// Upstream movie record, flattened into the response object
    #[serde(flatten)]
    pub movie: Movie,
    /// Subscription providers first, then purchase providers not already listed
    #[serde(rename = "ottProviders", default)]
    pub providers: Vec<Provider>,
}

impl AugmentedMovie {
    /// Attaches a provider list to a movie.
    pub fn new(movie: Movie, providers: Vec<Provider>) -> Self {
        Self { movie, providers }
    }

    /// Returns true if any attached provider has the given id.
    pub fn offered_by(&self, provider_id: u64) -> bool {
        self.providers.iter().any(|p| p.provider_id == provider_id)
    }
}

/// One logical page of a listing (two upstream pages merged).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagedMovies {
    /// Logical page number, starting at 1
    pub page: u32,
    /// Logical page count
    pub total_pages: u32,
    /// Movies of both upstream pages, in order
    pub results: Vec<AugmentedMovie>,
}

/// Search response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Filtered, enriched hits
    pub results: Vec<AugmentedMovie>,
    /// Length of `results` after filtering
    pub total_results: usize,
}

impl SearchResults {
    /// Wraps a result list, deriving the count from it.
    pub fn new(results: Vec<AugmentedMovie>) -> Self {
        let total_results = results.len();
        Self { results, total_results }
    }
}

/// Movie detail with its regional release date and selected trailer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Upstream movie record with the regional release date applied
    #[serde(flatten)]
    pub movie: Movie,
    /// `null` when no YouTube trailer or teaser exists
    pub trailer: Option<Video>,
}
