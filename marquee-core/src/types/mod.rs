//! Domain types for Marquee.
//!
//! - [`Movie`], [`Provider`], [`Video`]: upstream records, passed through verbatim
//! - [`AugmentedMovie`], [`PagedMovies`], [`SearchResults`], [`MovieDetail`]: aggregated responses
//! - [`UpstreamRequest`]: one parameterized GET against the metadata API

mod envelope;
mod movie;
mod request;

pub use envelope::*;
pub use movie::*;
pub use request::*;
