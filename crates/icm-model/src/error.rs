use thiserror::Error;

use crate::subset::SubsetId;

/// Errors surfaced by lookup operations.
///
/// Absence of a match is never an error: `find` signals it through `None`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("unknown subset: {name:?} (expected one of the four ICM subsets)")]
    UnknownSubset { name: String },

    #[error("sample count {requested} exceeds {subset} size {available}")]
    SampleCountExceeded {
        subset: SubsetId,
        requested: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, LookupError>;
