//! Lookup engine for the ICM code catalog: exact find, edit-distance
//! ranked search, and random sampling.

pub mod distance;
pub mod engine;

pub use distance::levenshtein;
pub use engine::{FoundEntry, LookupEngine, SEARCH_RESULT_LIMIT, SearchHit};
