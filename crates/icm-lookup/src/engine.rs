//! Find, search, and sample operations over a built catalog.

use icm_model::{Catalog, CodeEntry, LookupError, SubsetId, normalize_code};
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::distance::levenshtein;

/// Maximum number of hits returned by [`LookupEngine::search`].
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Read-only query interface over a built [`Catalog`].
///
/// Holds only a shared reference, so engines are cheap to create and safe
/// to use from multiple threads once the catalog is built.
#[derive(Debug, Clone, Copy)]
pub struct LookupEngine<'a> {
    catalog: &'a Catalog,
}

/// An exact match together with the subset it came from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FoundEntry<'a> {
    pub subset: SubsetId,
    pub entry: &'a CodeEntry,
}

/// One ranked hit from [`LookupEngine::search`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchHit<'a> {
    pub subset: SubsetId,
    pub distance: usize,
    pub entry: &'a CodeEntry,
}

impl<'a> LookupEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Exact lookup by normalized code.
    ///
    /// The query is normalized exactly like stored codes, so lookups are
    /// case- and punctuation-insensitive. A query that normalizes to the
    /// empty string is a guaranteed miss (stored keys are never empty for
    /// well-formed data). Absence is `None`, never an error.
    ///
    /// With `subset` given, only that subset is searched; otherwise the
    /// union of all four. When near-duplicate normalized codes exist, the
    /// first match in the backing set's arbitrary iteration order wins.
    pub fn find(&self, query: &str, subset: Option<SubsetId>) -> Option<FoundEntry<'a>> {
        let needle = normalize_code(query);
        if needle.is_empty() {
            return None;
        }
        match subset {
            Some(id) => self
                .catalog
                .subset(id)
                .iter()
                .find(|entry| entry.normalized_code() == needle)
                .map(|entry| FoundEntry { subset: id, entry }),
            None => self
                .catalog
                .iter()
                .find(|(_, entry)| entry.normalized_code() == needle)
                .map(|(subset, entry)| FoundEntry { subset, entry }),
        }
    }

    /// Rank every catalog entry by edit distance to the normalized query
    /// and return the closest [`SEARCH_RESULT_LIMIT`] hits.
    ///
    /// Never errors; an empty catalog yields an empty list. Ties are
    /// broken deterministically by subset, then code, then description.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'a>> {
        let needle = normalize_code(query);
        let mut hits: Vec<SearchHit<'a>> = self
            .catalog
            .iter()
            .map(|(subset, entry)| SearchHit {
                subset,
                distance: levenshtein(&needle, entry.normalized_code()),
                entry,
            })
            .collect();
        hits.sort_by(|left, right| {
            left.distance
                .cmp(&right.distance)
                .then_with(|| left.subset.cmp(&right.subset))
                .then_with(|| left.entry.code.cmp(&right.entry.code))
                .then_with(|| left.entry.description.cmp(&right.entry.description))
        });
        hits.truncate(SEARCH_RESULT_LIMIT);
        hits
    }

    /// Draw `count` distinct entries from `subset`, uniformly at random
    /// and without replacement.
    ///
    /// `count` equal to the subset size returns the whole subset in random
    /// order; zero returns an empty list. A `count` above the subset size
    /// is [`LookupError::SampleCountExceeded`]. No reproducibility or
    /// seeding contract is offered.
    pub fn sample(
        &self,
        subset: SubsetId,
        count: usize,
    ) -> Result<Vec<&'a CodeEntry>, LookupError> {
        let pool = self.catalog.subset(subset);
        if count > pool.len() {
            return Err(LookupError::SampleCountExceeded {
                subset,
                requested: count,
                available: pool.len(),
            });
        }
        let mut drawn: Vec<&CodeEntry> = pool.iter().collect();
        drawn.shuffle(&mut rand::thread_rng());
        drawn.truncate(count);
        Ok(drawn)
    }
}
