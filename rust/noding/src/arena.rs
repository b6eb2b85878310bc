// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for boundary segment maps.
//!
//! The [`SegmentMapArena`] owns one [`BoundarySegmentMap`] per input segment
//! string. Segments in the parity set refer to their map through a stable
//! [`SegmentMapKey`], so the arena may grow while segments are alive, and
//! marking goes through the arena rather than through a stored address.
//! Insertion order is recorded separately so chains come out in input order.

use slotmap::SlotMap;

use crate::boundary_map::BoundarySegmentMap;
use crate::keys::{EdgeRef, SegmentMapKey};

/// Owner of all boundary segment maps of one noding run.
#[derive(Debug, Default)]
pub struct SegmentMapArena {
    maps: SlotMap<SegmentMapKey, BoundarySegmentMap>,
    order: Vec<SegmentMapKey>,
}

impl SegmentMapArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            maps: SlotMap::with_capacity_and_key(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Adds a map and returns its key.
    pub fn insert(&mut self, map: BoundarySegmentMap) -> SegmentMapKey {
        let key = self.maps.insert(map);
        self.order.push(key);
        key
    }

    pub fn get(&self, key: SegmentMapKey) -> Option<&BoundarySegmentMap> {
        self.maps.get(key)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Flags the referenced edge as boundary.
    ///
    /// Returns `false` if the key does not belong to this arena.
    pub fn mark_boundary(&mut self, edge: EdgeRef) -> bool {
        match self.maps.get_mut(edge.map) {
            Some(map) => {
                map.set_boundary_segment(edge.index);
                true
            }
            None => false,
        }
    }

    /// Iterates the maps in insertion order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &BoundarySegmentMap> {
        self.order.iter().filter_map(move |&k| self.maps.get(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut arena = SegmentMapArena::with_capacity(3);
        for source in 0..3 {
            arena.insert(BoundarySegmentMap::new(source, 2));
        }
        let sources: Vec<usize> = arena.iter_ordered().map(|m| m.source()).collect();
        assert_eq!(sources, vec![0, 1, 2]);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn mark_through_key() {
        let mut arena = SegmentMapArena::new();
        let a = arena.insert(BoundarySegmentMap::new(0, 3));
        let b = arena.insert(BoundarySegmentMap::new(1, 3));

        assert!(arena.mark_boundary(EdgeRef::new(b, 1)));

        assert_eq!(arena.get(a).unwrap().boundary_count(), 0);
        let mb = arena.get(b).unwrap();
        assert!(mb.is_boundary(1));
        assert!(!mb.is_boundary(0));
    }

    #[test]
    fn foreign_key_is_rejected() {
        let mut other = SegmentMapArena::new();
        other.insert(BoundarySegmentMap::new(0, 1));
        let foreign = other.insert(BoundarySegmentMap::new(1, 1));

        let mut arena = SegmentMapArena::new();
        arena.insert(BoundarySegmentMap::new(0, 1));
        assert!(!arena.mark_boundary(EdgeRef::new(foreign, 0)));
    }

    #[test]
    fn keys_survive_growth() {
        let mut arena = SegmentMapArena::new();
        let first = arena.insert(BoundarySegmentMap::new(0, 4));
        for source in 1..1000 {
            arena.insert(BoundarySegmentMap::new(source, 1));
        }
        assert!(arena.mark_boundary(EdgeRef::new(first, 3)));
        assert!(arena.get(first).unwrap().is_boundary(3));
    }
}
