// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types for arena-based storage of boundary segment maps.
//!
//! A [`Segment`](crate::segment::Segment) refers back to the map of the
//! segment string it came from. The reference is a generational key created
//! by `slotmap::SlotMap`, not an address: the map storage may grow or move
//! while segments are alive, and a key whose map has been removed simply
//! fails lookup instead of dangling.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a boundary segment map (one per input segment string).
    pub struct SegmentMapKey;
}

/// A non-owning reference to one edge of one segment string: the owning
/// map's key plus the edge index within that segment string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub map: SegmentMapKey,
    pub index: usize,
}

impl EdgeRef {
    pub fn new(map: SegmentMapKey, index: usize) -> Self {
        Self { map, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn stale_key_fails_lookup() {
        let mut maps: SlotMap<SegmentMapKey, u32> = SlotMap::with_key();
        let k = maps.insert(7);
        assert_eq!(maps.get(k), Some(&7));

        maps.remove(k);
        let k2 = maps.insert(8);

        // The slot is reused but the generation differs.
        assert!(maps.get(k).is_none());
        assert_eq!(maps.get(k2), Some(&8));
    }

    #[test]
    fn edge_ref_equality_includes_index() {
        let mut maps: SlotMap<SegmentMapKey, ()> = SlotMap::with_key();
        let k = maps.insert(());
        assert_eq!(EdgeRef::new(k, 3), EdgeRef::new(k, 3));
        assert_ne!(EdgeRef::new(k, 3), EdgeRef::new(k, 4));
    }
}
