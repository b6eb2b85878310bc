// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Undirected segments and the parity (toggle) set used to find boundary
//! edges.
//!
//! A [`Segment`] is identified only by its two endpoints, stored in a fixed
//! lexicographic order so that `(p0, p1)` and `(p1, p0)` are the same key.
//! The [`EdgeRef`] it carries says where the segment came from, but never
//! takes part in equality or hashing.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::coordinate::Coordinate;
use crate::keys::{EdgeRef, SegmentMapKey};

/// An undirected edge with a back-reference to the segment string edge it
/// was built from.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    p0: Coordinate,
    p1: Coordinate,
    origin: EdgeRef,
}

impl Segment {
    /// Creates a segment, ordering the endpoints canonically.
    pub fn new(p0: Coordinate, p1: Coordinate, owner: SegmentMapKey, index: usize) -> Self {
        let (p0, p1) = if p0.compare_2d(&p1).is_le() {
            (p0, p1)
        } else {
            (p1, p0)
        };
        Self {
            p0,
            p1,
            origin: EdgeRef::new(owner, index),
        }
    }

    /// The lesser endpoint.
    pub fn p0(&self) -> &Coordinate {
        &self.p0
    }

    /// The greater endpoint.
    pub fn p1(&self) -> &Coordinate {
        &self.p1
    }

    pub fn origin(&self) -> EdgeRef {
        self.origin
    }

    pub fn owner(&self) -> SegmentMapKey {
        self.origin.map
    }

    pub fn index(&self) -> usize {
        self.origin.index
    }

    /// True for a zero-length edge (repeated vertex).
    pub fn is_degenerate(&self) -> bool {
        self.p0.equals_2d(&self.p1)
    }

    #[inline]
    fn key(&self) -> ((u64, u64), (u64, u64)) {
        (self.p0.key_2d(), self.p1.key_2d())
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// A set where inserting a present segment removes it.
///
/// After toggling every edge of every input, the set holds exactly the
/// segments that occurred an odd number of times. When the same edge is
/// toggled in again, the stored back-reference is the one of the latest
/// odd occurrence.
#[derive(Debug, Default)]
pub struct SegmentSet {
    segments: FxHashSet<Segment>,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Toggles a segment. Returns `true` if it is present afterwards.
    pub fn toggle(&mut self, seg: Segment) -> bool {
        if self.segments.remove(&seg) {
            false
        } else {
            self.segments.insert(seg);
            true
        }
    }

    pub fn contains(&self, seg: &Segment) -> bool {
        self.segments.contains(seg)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

impl IntoIterator for SegmentSet {
    type Item = Segment;
    type IntoIter = std::collections::hash_set::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}
