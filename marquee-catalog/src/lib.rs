//! # Marquee Catalog
//!
//! The aggregation and cache layer behind every movie endpoint.
//!
//! For each endpoint, [`Catalog`] builds a cache key from the parameters
//! that affect the result, serves a hit verbatim, and on a miss calls the
//! upstream source (fanning out across half-pages and per-movie provider
//! lookups), merges the results into one response, caches it and returns it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use marquee_catalog::{Catalog, CatalogConfig, GenreQuery};
//!
//! let catalog = Catalog::new(Arc::new(client), Arc::new(cache), CatalogConfig::default());
//! let page = catalog.by_genre(&GenreQuery::new("18").page(2)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod catalog;
mod config;
pub mod detail;
pub mod enrich;
pub mod fanout;
pub mod keys;
mod query;

#[cfg(test)]
mod testing;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use query::{GenreQuery, SearchQuery};
