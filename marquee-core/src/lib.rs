//! # Marquee Core
//!
//! Core types, errors, and traits for the Marquee movie aggregation proxy.
//!
//! This crate provides the foundational building blocks used by all other Marquee crates:
//!
//! - **Types**: Movie, provider, video and envelope models, plus upstream request descriptors
//! - **Errors**: Upstream and endpoint error taxonomy
//! - **Constants**: Upstream query constants and page geometry
//! - **Traits**: The upstream source and cache store seams
//!
//! ## Example
//!
//! ```rust
//! use marquee_core::{Movie, UpstreamRequest};
//!
//! let movie: Movie = serde_json::from_str(r#"{"id": 42, "title": "Parasite"}"#).unwrap();
//! assert_eq!(movie.id, 42);
//!
//! let request = UpstreamRequest::movie_providers(movie.id);
//! assert_eq!(request.path, "/movie/42/watch/providers");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{MovieError, Result, UpstreamError};
pub use traits::*;
pub use types::*;
