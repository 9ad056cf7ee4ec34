//! The in-memory code catalog.

use std::collections::HashSet;

use crate::entry::CodeEntry;
use crate::subset::SubsetId;

/// The full code catalog: one unordered entry set per subset.
///
/// Built once at startup and read-only thereafter, so shared references may
/// be used concurrently without locking. All four subsets are always
/// present by construction; an unloaded subset is simply empty, never
/// absent.
///
/// Backing sets are hash sets with uniqueness by structural equality, so
/// duplicate raw codes with different descriptions coexist and iteration
/// order is arbitrary.
#[derive(Debug, Clone)]
pub struct Catalog {
    subsets: [HashSet<CodeEntry>; SubsetId::COUNT],
}

impl Catalog {
    /// Assemble a catalog from per-subset entry sets, in [`SubsetId::ALL`] order.
    pub fn from_subsets(subsets: [HashSet<CodeEntry>; SubsetId::COUNT]) -> Self {
        Self { subsets }
    }

    /// The entry set for one subset.
    pub fn subset(&self, id: SubsetId) -> &HashSet<CodeEntry> {
        &self.subsets[id.index()]
    }

    /// Iterate the union of all subsets, tagging each entry with its subset.
    pub fn iter(&self) -> impl Iterator<Item = (SubsetId, &CodeEntry)> {
        SubsetId::ALL
            .into_iter()
            .flat_map(move |id| self.subsets[id.index()].iter().map(move |entry| (id, entry)))
    }

    /// Total number of entries across all subsets.
    pub fn len(&self) -> usize {
        self.subsets.iter().map(HashSet::len).sum()
    }

    /// True when every subset is empty.
    pub fn is_empty(&self) -> bool {
        self.subsets.iter().all(HashSet::is_empty)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            subsets: std::array::from_fn(|_| HashSet::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(subset: SubsetId, entries: &[(&str, &str)]) -> Catalog {
        let mut subsets: [HashSet<CodeEntry>; SubsetId::COUNT] =
            std::array::from_fn(|_| HashSet::new());
        subsets[subset.index()] = entries
            .iter()
            .map(|(code, description)| CodeEntry::new(*code, *description))
            .collect();
        Catalog::from_subsets(subsets)
    }

    #[test]
    fn all_subsets_present_when_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        for id in SubsetId::ALL {
            assert!(catalog.subset(id).is_empty());
        }
    }

    #[test]
    fn union_iteration_tags_subset() {
        let catalog = catalog_with(SubsetId::Icm10Diagnosis, &[("A000", "Cholera")]);
        let tagged: Vec<_> = catalog.iter().collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].0, SubsetId::Icm10Diagnosis);
        assert_eq!(tagged[0].1.code, "A000");
    }

    #[test]
    fn duplicate_entries_collapse() {
        let catalog = catalog_with(
            SubsetId::Icm9Diagnosis,
            &[("0010", "Cholera"), ("0010", "Cholera")],
        );
        assert_eq!(catalog.len(), 1);
    }
}
