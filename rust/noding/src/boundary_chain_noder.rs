// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A noder that keeps only the boundary linework of a set of rings.
//!
//! When the inputs are the rings of adjacent polygons, an edge shared by two
//! rings lies inside their union and can be dropped before the expensive
//! intersection stage. This noder counts every undirected edge with a parity
//! set (odd count = boundary), marks the surviving edges on their source
//! segment strings, and cuts each segment string into maximal runs of
//! boundary edges.
//!
//! Three occurrences of an edge count as boundary, four as interior, so
//! self-touching and overlapping inputs are handled by parity rather than by
//! "shared or not".
//!
//! ```
//! use ifc_lite_noding::{BasicSegmentString, BoundaryChainNoder, SegmentString};
//!
//! let a = BasicSegmentString::from_points(
//!     [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
//!     "a",
//! );
//! let b = BasicSegmentString::from_points(
//!     [[10.0, 0.0], [20.0, 0.0], [20.0, 10.0], [10.0, 10.0], [10.0, 0.0]],
//!     "b",
//! );
//!
//! let mut noder = BoundaryChainNoder::new();
//! noder.compute_nodes(&[a, b]).unwrap();
//! // The shared edge (10,0)-(10,10) is gone from both rings; it splits
//! // ring `a` into two chains.
//! let chains = noder.noded_substrings();
//! assert_eq!(chains.len(), 3);
//! assert_eq!(chains.iter().map(|c| c.segment_count()).sum::<usize>(), 6);
//! ```

use crate::arena::SegmentMapArena;
use crate::boundary_map::BoundarySegmentMap;
use crate::error::{Error, Result};
use crate::noder::Noder;
use crate::segment::{Segment, SegmentSet};
use crate::segment_string::{NodedSegmentString, SegmentString};

/// Extracts boundary chains from a set of segment strings.
///
/// Single-use: a second call to [`compute_nodes`](Self::compute_nodes)
/// returns [`Error::AlreadyComputed`] and leaves the first result in place.
#[derive(Debug)]
pub struct BoundaryChainNoder<D> {
    chains: Vec<NodedSegmentString<D>>,
    computed: bool,
}

impl<D> Default for BoundaryChainNoder<D> {
    fn default() -> Self {
        Self {
            chains: Vec::new(),
            computed: false,
        }
    }
}

impl<D: Clone> BoundaryChainNoder<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the boundary chains of `segment_strings`.
    ///
    /// Segment strings with fewer than 2 vertices contribute nothing.
    pub fn compute_nodes<S>(&mut self, segment_strings: &[S]) -> Result<()>
    where
        S: SegmentString<Data = D>,
    {
        if self.computed {
            return Err(Error::AlreadyComputed);
        }
        self.computed = true;
        self.chains = boundary_chains(segment_strings);
        Ok(())
    }

    /// The chains computed so far, in input order and scan order within each
    /// input.
    pub fn noded_substrings(&self) -> &[NodedSegmentString<D>] {
        &self.chains
    }

    pub fn take_noded_substrings(&mut self) -> Vec<NodedSegmentString<D>> {
        std::mem::take(&mut self.chains)
    }

    pub fn into_noded_substrings(self) -> Vec<NodedSegmentString<D>> {
        self.chains
    }
}

impl<S, D> Noder<S> for BoundaryChainNoder<D>
where
    S: SegmentString<Data = D>,
    D: Clone,
{
    fn compute_nodes(&mut self, segment_strings: &[S]) -> Result<()> {
        BoundaryChainNoder::compute_nodes(self, segment_strings)
    }

    fn noded_substrings(&self) -> &[NodedSegmentString<D>] {
        &self.chains
    }

    fn take_noded_substrings(&mut self) -> Vec<NodedSegmentString<D>> {
        BoundaryChainNoder::take_noded_substrings(self)
    }
}

/// Runs a fresh noder over `segment_strings` and returns the chains.
pub fn node<S>(segment_strings: &[S]) -> Vec<NodedSegmentString<S::Data>>
where
    S: SegmentString,
    S::Data: Clone,
{
    boundary_chains(segment_strings)
}

fn boundary_chains<S>(segment_strings: &[S]) -> Vec<NodedSegmentString<S::Data>>
where
    S: SegmentString,
    S::Data: Clone,
{
    let mut seg_set = SegmentSet::new();
    let mut maps = SegmentMapArena::with_capacity(segment_strings.len());
    let edges = add_segments(segment_strings, &mut seg_set, &mut maps);
    let boundary = mark_boundary_segments(seg_set, &mut maps);
    let chains = extract_chains(segment_strings, &maps);

    tracing::debug!(
        segment_strings = segment_strings.len(),
        edges,
        boundary_segments = boundary,
        chains = chains.len(),
        "computed boundary chains"
    );
    chains
}

/// Creates one map per segment string and toggles every edge into
/// `seg_set`. Returns the number of edges seen.
fn add_segments<S: SegmentString>(
    segment_strings: &[S],
    seg_set: &mut SegmentSet,
    maps: &mut SegmentMapArena,
) -> usize {
    let mut edges = 0;
    for (source, ss) in segment_strings.iter().enumerate() {
        let key = maps.insert(BoundarySegmentMap::for_segment_string(source, ss));
        for i in 0..ss.segment_count() {
            seg_set.toggle(Segment::new(*ss.coordinate(i), *ss.coordinate(i + 1), key, i));
        }
        edges += ss.segment_count();
    }
    edges
}

/// Flags every segment left in the set on its owning map. Consumes the set.
fn mark_boundary_segments(seg_set: SegmentSet, maps: &mut SegmentMapArena) -> usize {
    let mut marked = 0;
    for seg in seg_set {
        if maps.mark_boundary(seg.origin()) {
            marked += 1;
        }
    }
    marked
}

fn extract_chains<S>(segment_strings: &[S], maps: &SegmentMapArena) -> Vec<NodedSegmentString<S::Data>>
where
    S: SegmentString,
    S::Data: Clone,
{
    let mut chains = Vec::new();
    for map in maps.iter_ordered() {
        map.create_chains(&segment_strings[map.source()], &mut chains);
    }
    chains
}
