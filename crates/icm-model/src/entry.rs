//! Catalog entry model.
//!
//! A [`CodeEntry`] pairs one raw classification code with its description.
//! The matching key is the *normalized* code: ASCII alphanumerics only,
//! uppercased. Normalization is computed once at construction; raw codes in
//! the bundled data may carry dots or other punctuation (`001.0`, `03.31`)
//! while queries may use any punctuation/casing and still match.

use serde::{Deserialize, Serialize};

/// Normalize a raw code into its matching key.
///
/// Strips every non-ASCII-alphanumeric character and uppercases the rest.
/// `"a-0.0.0"` and `"A000"` normalize to the same key.
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// One classification code with its human-readable description.
///
/// Equality and hashing are structural over the raw code and description;
/// two entries with the same raw code but different descriptions are
/// distinct. Near-duplicate *normalized* codes are allowed and expected,
/// since normalization can strip the only distinguishing punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEntry", into = "RawEntry")]
pub struct CodeEntry {
    /// Raw code as it appears in the source data.
    pub code: String,

    /// Human-readable description.
    pub description: String,

    /// Derived matching key; always `normalize_code(&self.code)`.
    normalized: String,
}

impl CodeEntry {
    /// Create an entry, computing its normalized matching key.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        let code = code.into();
        let normalized = normalize_code(&code);
        Self {
            code,
            description: description.into(),
            normalized,
        }
    }

    /// The normalized matching key for this entry.
    pub fn normalized_code(&self) -> &str {
        &self.normalized
    }
}

/// Serde shadow for [`CodeEntry`]: only the raw fields cross the wire, and
/// the normalized key is recomputed on the way in.
#[derive(Clone, Serialize, Deserialize)]
struct RawEntry {
    code: String,
    description: String,
}

impl From<RawEntry> for CodeEntry {
    fn from(raw: RawEntry) -> Self {
        Self::new(raw.code, raw.description)
    }
}

impl From<CodeEntry> for RawEntry {
    fn from(entry: CodeEntry) -> Self {
        Self {
            code: entry.code,
            description: entry.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_punctuation_and_uppercases() {
        assert_eq!(normalize_code("a-0.0.0"), "A000");
        assert_eq!(normalize_code("001.0"), "0010");
        assert_eq!(normalize_code("  "), "");
        assert_eq!(normalize_code("..-"), "");
    }

    #[test]
    fn entry_computes_normalized_key() {
        let entry = CodeEntry::new("A00.0", "Cholera");
        assert_eq!(entry.code, "A00.0");
        assert_eq!(entry.normalized_code(), "A000");
    }

    #[test]
    fn equality_is_structural() {
        let a = CodeEntry::new("A000", "Cholera");
        let b = CodeEntry::new("A000", "Cholera");
        let c = CodeEntry::new("A000", "Something else");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
