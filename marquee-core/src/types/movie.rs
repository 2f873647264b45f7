//! Movie, provider and video records.
//!
//! Upstream records are passed through largely unmodified: the fields the
//! aggregation layer reads are typed, everything else rides along in a
//! flattened map and is serialized back verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A movie as returned by the upstream listing, search and detail calls.
///
/// Only `id` is typed. Every other field, including `null` values and the
/// exact number encoding, is kept in `fields` and written back verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Upstream movie id
    pub id: u64,
    /// All other upstream fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Movie {
    /// Creates a bare movie record with only an id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Sets an upstream field.
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Display title, if present.
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// `YYYY-MM-DD` release date, if present.
    pub fn release_date(&self) -> Option<&str> {
        self.fields.get("release_date").and_then(Value::as_str)
    }

    /// Replaces the release date.
    pub fn set_release_date(&mut self, date: impl Into<String>) {
        self.fields
            .insert("release_date".to_string(), Value::String(date.into()));
    }

    /// Returns true if the movie's `genre_ids` list contains `genre_id`.
    ///
    /// Detail records carry `genres` instead and never match.
    pub fn has_genre(&self, genre_id: u64) -> bool {
        self.fields
            .get("genre_ids")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().any(|id| id.as_u64() == Some(genre_id)))
            .unwrap_or(false)
    }
}

/// A streaming or purchase platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Upstream provider id
    pub provider_id: u64,
    /// Display name, used to deduplicate merged lists
    pub provider_name: String,
    /// All other upstream fields (`logo_path`, `display_priority`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Provider {
    /// Creates a provider record.
    pub fn new(provider_id: u64, provider_name: impl Into<String>) -> Self {
        Self {
            provider_id,
            provider_name: provider_name.into(),
            extra: Map::new(),
        }
    }
}

/// Provider availability for one region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionAvailability {
    /// Subscription-included providers
    #[serde(default)]
    pub flatrate: Vec<Provider>,
    /// Purchase providers
    #[serde(default)]
    pub buy: Vec<Provider>,
    /// Rental providers
    #[serde(default)]
    pub rent: Vec<Provider>,
}

/// Body of the per-movie provider lookup, keyed by region code.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieWatchProviders {
    /// Availability per region code
    #[serde(default)]
    pub results: HashMap<String, RegionAvailability>,
}

impl MovieWatchProviders {
    /// Takes the availability for `region`, if the upstream listed it.
    pub fn into_region(mut self, region: &str) -> Option<RegionAvailability> {
        self.results.remove(region)
    }
}

/// Body of the global provider listing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderList {
    /// Providers in upstream display order
    #[serde(default)]
    pub results: Vec<Provider>,
}

/// One page of an upstream movie listing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MoviePage {
    /// Upstream page number
    #[serde(default)]
    pub page: u32,
    /// Upstream page count
    #[serde(default)]
    pub total_pages: u32,
    /// Upstream result count
    #[serde(default)]
    pub total_results: u64,
    /// Movies on this page
    #[serde(default)]
    pub results: Vec<Movie>,
}

/// A single release of a movie in one region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDate {
    /// ISO-8601 timestamp, e.g. `2024-05-01T00:00:00.000Z`
    pub release_date: String,
    /// 1 premiere, 2 limited theatrical, 3 theatrical, 4 digital, 5 physical, 6 TV
    #[serde(rename = "type")]
    pub release_type: u8,
    /// Certification, note and other upstream fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Releases of a movie grouped by country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDateGroup {
    /// Region code, e.g. `KR`
    pub iso_3166_1: String,
    /// Releases in that region
    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

/// Body of the release-date lookup.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReleaseDates {
    /// One group per region
    #[serde(default)]
    pub results: Vec<ReleaseDateGroup>,
}

/// A video attached to a movie (trailer, teaser, clip...).
///
/// Kept as the raw upstream object; the accessors read the few fields
/// trailer selection needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Video {
    /// Upstream fields, verbatim
    pub fields: Map<String, Value>,
}

impl Video {
    fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Video key on the hosting site.
    pub fn key(&self) -> Option<&str> {
        self.text("key")
    }

    /// Hosting site, e.g. `YouTube`.
    pub fn site(&self) -> Option<&str> {
        self.text("site")
    }

    /// Video type, e.g. `Trailer` or `Teaser`.
    pub fn video_type(&self) -> Option<&str> {
        self.text("type")
    }

    /// Returns true if the video has the given type and hosting site.
    pub fn is(&self, video_type: &str, site: &str) -> bool {
        self.video_type() == Some(video_type) && self.site() == Some(site)
    }
}

/// Body of the video lookup.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Videos {
    /// Videos in upstream order
    #[serde(default)]
    pub results: Vec<Video>,
}
