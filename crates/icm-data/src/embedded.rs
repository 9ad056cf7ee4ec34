//! Catalog construction from data compiled into the binary.
//!
//! Hosts that must not depend on a data directory at runtime can enable
//! the `embedded-data` feature and build the catalog from `include_str!`
//! copies of the four subset files.

use std::collections::HashSet;

use icm_model::{Catalog, CodeEntry, SubsetId};

use crate::error::Result;
use crate::loader::parse_subset_text;

const ICM9_DIAGNOSIS: &str = include_str!("../../../data/icm9-diagnosis.txt");
const ICM10_DIAGNOSIS: &str = include_str!("../../../data/icm10-diagnosis.txt");
const ICM9_PROCEDURE: &str = include_str!("../../../data/icm9-procedure.txt");
const ICM10_PROCEDURE: &str = include_str!("../../../data/icm10-procedure.txt");

/// The embedded copy of one subset's source text.
pub const fn subset_text(subset: SubsetId) -> &'static str {
    match subset {
        SubsetId::Icm9Diagnosis => ICM9_DIAGNOSIS,
        SubsetId::Icm10Diagnosis => ICM10_DIAGNOSIS,
        SubsetId::Icm9Procedure => ICM9_PROCEDURE,
        SubsetId::Icm10Procedure => ICM10_PROCEDURE,
    }
}

/// Build the catalog from the embedded subset files.
pub fn load_embedded() -> Result<Catalog> {
    let mut subsets: [HashSet<CodeEntry>; SubsetId::COUNT] =
        std::array::from_fn(|_| HashSet::new());
    for subset in SubsetId::ALL {
        subsets[subset.index()] = parse_subset_text(subset, subset_text(subset))?;
    }
    Ok(Catalog::from_subsets(subsets))
}
