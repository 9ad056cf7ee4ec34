#![deny(unsafe_code)]

use std::path::PathBuf;

use icm_model::SubsetId;

/// Errors raised while building the catalog from source data.
///
/// Both variants are fatal: there is no partial-catalog operating mode, so
/// callers abort startup instead of proceeding with fewer subsets.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {subset} data from {path}: {source}")]
    SourceUnavailable {
        subset: SubsetId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{subset} line {line} has no code/description delimiter: {content:?}")]
    MalformedLine {
        subset: SubsetId,
        line: usize,
        content: String,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
