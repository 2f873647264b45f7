//! Upstream client for the movie metadata API.
//!
//! Attaches the API key and locale parameters to every request and
//! turns transport, status and decode failures into `UpstreamError`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;

pub use client::{TmdbClient, TmdbConfig};
