#![deny(unsafe_code)]

//! Source-data feed for the ICM code catalog.
//!
//! Loads the four bundled subset files into an [`icm_model::Catalog`].
//! Loading is all-or-nothing: a missing file or malformed line aborts the
//! whole load, so callers never observe a partial catalog.

pub mod error;
pub mod loader;
pub mod paths;

#[cfg(feature = "embedded-data")]
pub mod embedded;

pub use error::DataError;
pub use loader::{load_default, load_from_dir, parse_subset_text};
