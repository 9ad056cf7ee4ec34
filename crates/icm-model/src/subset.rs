//! Catalog subset identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// One of the four fixed catalog partitions: two coding revisions crossed
/// with the diagnosis/procedure axis.
///
/// The variant order is the canonical subset order used for deterministic
/// tie-breaking in search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubsetId {
    /// ICM revision 9, diagnosis codes.
    #[serde(rename = "ICM9-Diagnosis")]
    Icm9Diagnosis,
    /// ICM revision 10, diagnosis codes.
    #[serde(rename = "ICM10-Diagnosis")]
    Icm10Diagnosis,
    /// ICM revision 9, procedure codes.
    #[serde(rename = "ICM9-Procedure")]
    Icm9Procedure,
    /// ICM revision 10, procedure codes.
    #[serde(rename = "ICM10-Procedure")]
    Icm10Procedure,
}

impl SubsetId {
    /// Number of subsets in the catalog.
    pub const COUNT: usize = 4;

    /// All subsets in canonical order.
    pub const ALL: [SubsetId; Self::COUNT] = [
        Self::Icm9Diagnosis,
        Self::Icm10Diagnosis,
        Self::Icm9Procedure,
        Self::Icm10Procedure,
    ];

    /// Canonical display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Icm9Diagnosis => "ICM9-Diagnosis",
            Self::Icm10Diagnosis => "ICM10-Diagnosis",
            Self::Icm9Procedure => "ICM9-Procedure",
            Self::Icm10Procedure => "ICM10-Procedure",
        }
    }

    /// Stable index into per-subset storage; matches the order of [`Self::ALL`].
    pub const fn index(&self) -> usize {
        match self {
            Self::Icm9Diagnosis => 0,
            Self::Icm10Diagnosis => 1,
            Self::Icm9Procedure => 2,
            Self::Icm10Procedure => 3,
        }
    }
}

impl fmt::Display for SubsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubsetId {
    type Err = LookupError;

    /// Parse a canonical subset name, case-insensitively.
    ///
    /// Anything outside the four known identifiers is an
    /// [`LookupError::UnknownSubset`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| LookupError::UnknownSubset {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_case_insensitively() {
        assert_eq!(
            "ICM10-Diagnosis".parse::<SubsetId>().unwrap(),
            SubsetId::Icm10Diagnosis
        );
        assert_eq!(
            "icm9-procedure".parse::<SubsetId>().unwrap(),
            SubsetId::Icm9Procedure
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let error = "ICM11-Diagnosis".parse::<SubsetId>().unwrap_err();
        assert!(matches!(error, LookupError::UnknownSubset { name } if name == "ICM11-Diagnosis"));
    }

    #[test]
    fn display_round_trips() {
        for id in SubsetId::ALL {
            assert_eq!(id.to_string().parse::<SubsetId>().unwrap(), id);
        }
    }
}
