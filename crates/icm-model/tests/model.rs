#![allow(missing_docs)]

use std::collections::HashSet;

use icm_model::{Catalog, CodeEntry, SubsetId};

#[test]
fn test_hashset_dedupes_by_structural_equality() {
    let mut set = HashSet::new();
    set.insert(CodeEntry::new("A000", "Cholera"));
    set.insert(CodeEntry::new("A000", "Cholera"));
    set.insert(CodeEntry::new("A000", "A different description"));
    // Same raw code with a different description is a distinct entry.
    assert_eq!(set.len(), 2);
}

#[test]
fn test_near_duplicate_normalized_codes_coexist() {
    let mut set = HashSet::new();
    set.insert(CodeEntry::new("A00.0", "Dotted form"));
    set.insert(CodeEntry::new("A000", "Plain form"));
    assert_eq!(set.len(), 2);
    for entry in &set {
        assert_eq!(entry.normalized_code(), "A000");
    }
}

#[test]
fn test_entry_serializes_raw_fields_only() {
    let entry = CodeEntry::new("A00.0", "Cholera");
    let json = serde_json::to_string(&entry).expect("serialize entry");
    assert_eq!(json, r#"{"code":"A00.0","description":"Cholera"}"#);
}

#[test]
fn test_entry_deserialization_recomputes_normalized_key() {
    let entry: CodeEntry = serde_json::from_str(r#"{"code":"a-0.0.0","description":"Cholera"}"#)
        .expect("deserialize entry");
    assert_eq!(entry.code, "a-0.0.0");
    assert_eq!(entry.normalized_code(), "A000");
}

#[test]
fn test_subset_serializes_as_canonical_name() {
    let json = serde_json::to_string(&SubsetId::Icm10Diagnosis).expect("serialize subset");
    assert_eq!(json, r#""ICM10-Diagnosis""#);
    let round: SubsetId = serde_json::from_str(&json).expect("deserialize subset");
    assert_eq!(round, SubsetId::Icm10Diagnosis);
}

#[test]
fn test_catalog_len_sums_subsets() {
    let mut subsets: [HashSet<CodeEntry>; SubsetId::COUNT] =
        std::array::from_fn(|_| HashSet::new());
    subsets[SubsetId::Icm9Diagnosis.index()].insert(CodeEntry::new("001.0", "Cholera"));
    subsets[SubsetId::Icm10Diagnosis.index()].insert(CodeEntry::new("A000", "Cholera"));
    subsets[SubsetId::Icm10Diagnosis.index()].insert(CodeEntry::new("A001", "Cholera el tor"));
    let catalog = Catalog::from_subsets(subsets);
    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.subset(SubsetId::Icm9Procedure).len(), 0);
}
