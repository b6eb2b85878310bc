// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-segment-string boundary flags and chain extraction.
//!
//! Each input segment string gets one [`BoundarySegmentMap`] holding a flag
//! per edge. After the parity pass has marked the boundary edges, a single
//! left-to-right scan merges runs of adjacent boundary edges into chains.
//! A chain breaks at the first interior edge or at the end of the string.

use crate::segment_string::{NodedSegmentString, SegmentString};

/// Boundary flags for the edges of one segment string.
#[derive(Debug, Clone)]
pub struct BoundarySegmentMap {
    /// Index of the segment string in the input slice.
    source: usize,
    /// `is_boundary[i]` covers the edge between vertices `i` and `i + 1`.
    is_boundary: Vec<bool>,
}

impl BoundarySegmentMap {
    /// Creates a map with every edge flagged interior.
    pub fn new(source: usize, edge_count: usize) -> Self {
        Self {
            source,
            is_boundary: vec![false; edge_count],
        }
    }

    /// Creates a map sized for `segment_string`.
    pub fn for_segment_string<S: SegmentString + ?Sized>(source: usize, segment_string: &S) -> Self {
        Self::new(source, segment_string.segment_count())
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn edge_count(&self) -> usize {
        self.is_boundary.len()
    }

    pub fn set_boundary_segment(&mut self, index: usize) {
        self.is_boundary[index] = true;
    }

    pub fn is_boundary(&self, index: usize) -> bool {
        self.is_boundary[index]
    }

    pub fn boundary_count(&self) -> usize {
        self.is_boundary.iter().filter(|&&b| b).count()
    }

    /// First index `>= index` whose edge is boundary, or the edge count if
    /// none remain.
    fn find_chain_start(&self, mut index: usize) -> usize {
        while index < self.is_boundary.len() && !self.is_boundary[index] {
            index += 1;
        }
        index
    }

    /// First index `> index` whose edge is interior, or the edge count.
    ///
    /// The result is a vertex index: the last vertex of the chain.
    fn find_chain_end(&self, mut index: usize) -> usize {
        index += 1;
        while index < self.is_boundary.len() && self.is_boundary[index] {
            index += 1;
        }
        index
    }

    /// Inclusive vertex spans `(start, end)` of the chains, in scan order.
    pub fn chain_spans(&self) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut end = 0;
        loop {
            let start = self.find_chain_start(end);
            if start >= self.is_boundary.len() {
                break;
            }
            end = self.find_chain_end(start);
            spans.push((start, end));
        }
        spans
    }

    /// Materializes the chains of `segment_string` and appends them to
    /// `chains`.
    ///
    /// `segment_string` must be the string this map was built for.
    pub fn create_chains<S>(&self, segment_string: &S, chains: &mut Vec<NodedSegmentString<S::Data>>)
    where
        S: SegmentString + ?Sized,
        S::Data: Clone,
    {
        debug_assert_eq!(segment_string.segment_count(), self.edge_count());
        for (start, end) in self.chain_spans() {
            tracing::trace!(source = self.source, start, end, "extracted boundary chain");
            chains.push(create_chain(segment_string, start, end));
        }
    }
}

/// Copies vertices `start..=end` of `segment_string` into a new, owned
/// segment string carrying a clone of the source data.
pub fn create_chain<S>(segment_string: &S, start: usize, end: usize) -> NodedSegmentString<S::Data>
where
    S: SegmentString + ?Sized,
    S::Data: Clone,
{
    let coords = (start..=end).map(|i| *segment_string.coordinate(i)).collect();
    NodedSegmentString::new(coords, segment_string.data().clone())
}
