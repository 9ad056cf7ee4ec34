//! Catalog loading from delimited subset files.
//!
//! Each non-empty line of a subset file is `<code>,<description>`. The
//! description may be wrapped in double quotes and may itself contain
//! commas, so lines split at the *first* comma only. A line with no comma
//! is a fatal format error, never silently skipped.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use icm_model::{Catalog, CodeEntry, SubsetId};

use crate::error::{DataError, Result};
use crate::paths::{data_root, subset_path};

/// Load the catalog from the default data directory.
///
/// See [`crate::paths::data_root`] for how the directory is resolved.
pub fn load_default() -> Result<Catalog> {
    load_from_dir(&data_root())
}

/// Load all four subsets from `dir`.
///
/// Fails on the first unreadable file ([`DataError::SourceUnavailable`]) or
/// malformed line ([`DataError::MalformedLine`]); a partially-loaded
/// catalog is never returned.
pub fn load_from_dir(dir: &Path) -> Result<Catalog> {
    let mut subsets: [HashSet<CodeEntry>; SubsetId::COUNT] =
        std::array::from_fn(|_| HashSet::new());

    for subset in SubsetId::ALL {
        let path = subset_path(dir, subset);
        let text = std::fs::read_to_string(&path).map_err(|source| {
            DataError::SourceUnavailable {
                subset,
                path: path.clone(),
                source,
            }
        })?;
        let entries = parse_subset_text(subset, &text)?;
        debug!(subset = %subset, entries = entries.len(), "loaded subset");
        subsets[subset.index()] = entries;
    }

    let catalog = Catalog::from_subsets(subsets);
    info!(
        data_dir = %dir.display(),
        entries = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse one subset's raw text into its entry set.
///
/// Blank lines are skipped. The code segment is trimmed of surrounding
/// whitespace; the description segment is trimmed of surrounding
/// whitespace, then of surrounding double quotes. Exact duplicates
/// collapse; input order is not preserved.
pub fn parse_subset_text(subset: SubsetId, text: &str) -> Result<HashSet<CodeEntry>> {
    let mut entries = HashSet::new();
    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let Some((code, description)) = line.split_once(',') else {
            return Err(DataError::MalformedLine {
                subset,
                line: number + 1,
                content: raw.to_string(),
            });
        };
        let description = description.trim().trim_matches('"');
        entries.insert(CodeEntry::new(code.trim(), description));
    }
    Ok(entries)
}
