//! Name deduplication and opaque-id resolution.
//!
//! Source names are the keys scene items use to reference sources, so every
//! name in a document must be unique. Legacy formats reference sources by
//! opaque ids instead; those are mapped back to the names assigned during
//! translation.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::Fields;

use super::SceneCollection;

/// `candidate` if `is_taken` rejects it, otherwise the first free
/// `"candidate N"` for `N = 0, 1, ...`.
pub fn unique_name(candidate: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(candidate) {
        return candidate.to_string();
    }

    let mut n: u64 = 0;
    loop {
        let name = format!("{candidate} {n}");
        if !is_taken(&name) {
            return name;
        }
        n += 1;
    }
}

/// Source names in use while one file is imported into a collection.
///
/// Seeded with every name already in the collection; each [`claim`] reserves
/// a further name, so sources of the same file never collide with each
/// other or with earlier imports.
///
/// [`claim`]: NameClaims::claim
#[derive(Clone, Debug, Default)]
pub struct NameClaims {
    taken: FxHashSet<String>,
}

impl NameClaims {
    pub fn new(collection: &SceneCollection) -> Self {
        let taken = collection
            .sources()
            .iter()
            .map(|s| s.get_str("name").to_string())
            .collect();
        Self { taken }
    }

    /// Reserve and return [`unique_name`] of `candidate`.
    pub fn claim(&mut self, candidate: &str) -> String {
        let name = unique_name(candidate, |n| self.taken.contains(n));
        self.taken.insert(name.clone());
        name
    }
}

/// Incremental map from opaque source ids to assigned names.
#[derive(Clone, Debug, Default)]
pub struct SourceIndex {
    names: FxHashMap<String, String>,
}

impl SourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id → name`. Empty ids are never recorded; a repeated id keeps
    /// its first name.
    pub fn insert(&mut self, id: &str, name: &str) {
        if id.is_empty() {
            return;
        }
        self.names
            .entry(id.to_string())
            .or_insert_with(|| name.to_string());
    }

    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
