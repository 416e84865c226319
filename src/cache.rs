// Copyright 2025 Cowboy AI, LLC.

//! Memoized preview descriptors
//!
//! Assembly is pure and its inputs are stable for the lifetime of a catalog
//! version, so descriptors can be memoized by `(item id, mode)` and reused
//! across render passes. Invalidation is only needed when catalog content
//! for an id changes.

use std::fmt;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::item::VisualItem;
use crate::mode::PickerMode;
use crate::preview::CompositionPreviewData;

/// An LRU-bounded memo of assembled preview descriptors.
///
/// Single-owner: callers that share one cache across threads wrap it in
/// their own lock. A catalog holds a few hundred items at most, so a
/// capacity covering `items x 3 modes` behaves as unbounded in practice.
pub struct PreviewCache {
    entries: LruCache<(String, PickerMode), CompositionPreviewData>,
}

impl fmt::Debug for PreviewCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewCache")
            .field("len", &self.entries.len())
            .field("cap", &self.entries.cap())
            .finish()
    }
}

impl PreviewCache {
    /// Create a cache bounded to `capacity` descriptors
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Fetch the memoized descriptor for `(item.id, mode)`, assembling and
    /// storing it on a miss
    pub fn get_or_assemble(
        &mut self,
        item: &VisualItem,
        mode: PickerMode,
    ) -> CompositionPreviewData {
        let key = (item.id.clone(), mode);
        if let Some(hit) = self.entries.get(&key) {
            return hit.clone();
        }

        let data = CompositionPreviewData::assemble(item, mode);
        self.entries.put(key, data.clone());
        data
    }

    /// Drop the memoized descriptors for one item, across all modes
    pub fn invalidate(&mut self, id: &str) {
        for mode in PickerMode::ALL {
            self.entries.pop(&(id.to_string(), mode));
        }
    }

    /// Drop every memoized descriptor (catalog version rollover)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of memoized descriptors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cache holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cache() -> PreviewCache {
        PreviewCache::new(NonZeroUsize::new(64).unwrap())
    }

    /// Memoized result matches a fresh assembly
    #[test]
    fn test_hit_equals_fresh_assembly() {
        let mut cache = cache();
        let item = VisualItem::new("x1")
            .with_name("Oferta Flash")
            .with_slug("offer-burst-demo");

        let first = cache.get_or_assemble(&item, PickerMode::Motif);
        let second = cache.get_or_assemble(&item, PickerMode::Motif);
        let fresh = CompositionPreviewData::assemble(&item, PickerMode::Motif);

        assert_eq!(first, second);
        assert_eq!(first, fresh);
        assert_eq!(cache.len(), 1);
    }

    /// Each mode gets its own entry for the same item
    #[test]
    fn test_modes_cached_separately() {
        let mut cache = cache();
        let item = VisualItem::new("x1").with_slug("grid-of-cells");

        for mode in PickerMode::ALL {
            cache.get_or_assemble(&item, mode);
        }
        assert_eq!(cache.len(), 3);
    }

    /// Invalidation drops one item's entries and leaves others intact
    #[test]
    fn test_invalidate_single_item() {
        let mut cache = cache();
        let a = VisualItem::new("a").with_name("Equipo");
        let b = VisualItem::new("b").with_name("Evento");

        cache.get_or_assemble(&a, PickerMode::Motif);
        cache.get_or_assemble(&a, PickerMode::Operator);
        cache.get_or_assemble(&b, PickerMode::Motif);
        assert_eq!(cache.len(), 3);

        cache.invalidate("a");
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    /// Capacity bounds evict the least recently used descriptor
    #[test]
    fn test_capacity_eviction() {
        let mut cache = PreviewCache::new(NonZeroUsize::new(2).unwrap());
        let a = VisualItem::new("a");
        let b = VisualItem::new("b");
        let c = VisualItem::new("c");

        cache.get_or_assemble(&a, PickerMode::Motif);
        cache.get_or_assemble(&b, PickerMode::Motif);
        cache.get_or_assemble(&c, PickerMode::Motif);

        assert_eq!(cache.len(), 2);
    }
}
