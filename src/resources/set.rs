//! The fixed set of resources a watch session tracks.

use std::collections::HashSet;

use super::ResourceId;

/// Unordered, deduplicated collection of [`ResourceId`]s.
///
/// Supplied once at session start; the collector tracks exactly these
/// resources for the lifetime of the session.
#[derive(Clone, Debug, Default)]
pub struct ResourceIdSet(HashSet<ResourceId>);

impl ResourceIdSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier; returns `false` if it was already present.
    pub fn insert(&mut self, id: ResourceId) -> bool {
        self.0.insert(id)
    }

    /// True if the identifier is tracked.
    pub fn contains(&self, id: &ResourceId) -> bool {
        self.0.contains(id)
    }

    /// Iterates over the tracked identifiers (no particular order).
    pub fn iter(&self) -> impl Iterator<Item = &ResourceId> {
        self.0.iter()
    }

    /// Number of tracked identifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ResourceId> for ResourceIdSet {
    fn from_iter<I: IntoIterator<Item = ResourceId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
