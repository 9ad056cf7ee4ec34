//! Data directory path resolution.

use std::path::{Path, PathBuf};

use icm_model::SubsetId;

/// Environment variable for overriding the bundled data directory.
pub const DATA_ENV_VAR: &str = "ICM_DATA_DIR";

/// Get the data root directory.
///
/// Resolution order:
/// 1. `ICM_DATA_DIR` environment variable
/// 2. `data/` directory relative to the workspace root
///
/// # Example
///
/// ```rust,ignore
/// let root = icm_data::paths::data_root();
/// let diagnosis = root.join("icm10-diagnosis.txt");
/// ```
pub fn data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// File name holding one subset's source lines.
pub const fn subset_file_name(subset: SubsetId) -> &'static str {
    match subset {
        SubsetId::Icm9Diagnosis => "icm9-diagnosis.txt",
        SubsetId::Icm10Diagnosis => "icm10-diagnosis.txt",
        SubsetId::Icm9Procedure => "icm9-procedure.txt",
        SubsetId::Icm10Procedure => "icm10-procedure.txt",
    }
}

/// Full path of one subset's source file under `dir`.
pub fn subset_path(dir: &Path, subset: SubsetId) -> PathBuf {
    dir.join(subset_file_name(subset))
}
