// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Noding of independent partitions in parallel.
//!
//! Each partition gets its own noder; outputs are concatenated in partition
//! order. Parity is only counted within a partition, so an edge shared by
//! rings in two different partitions is boundary in both.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::boundary_chain_noder::node;
use crate::segment_string::{NodedSegmentString, SegmentString};

/// Runs one boundary chain noder per partition and concatenates the chains.
pub fn node_partitions<P, S>(partitions: &[P]) -> Vec<NodedSegmentString<S::Data>>
where
    P: AsRef<[S]> + Sync,
    S: SegmentString,
    S::Data: Clone + Send,
{
    // On native: one rayon task per partition
    // On WASM: sequential (no threads available)
    #[cfg(not(target_arch = "wasm32"))]
    let per_partition: Vec<Vec<NodedSegmentString<S::Data>>> =
        partitions.par_iter().map(|p| node(p.as_ref())).collect();

    #[cfg(target_arch = "wasm32")]
    let per_partition: Vec<Vec<NodedSegmentString<S::Data>>> =
        partitions.iter().map(|p| node(p.as_ref())).collect();

    let chains: Vec<_> = per_partition.into_iter().flatten().collect();
    tracing::debug!(
        partitions = partitions.len(),
        chains = chains.len(),
        "computed boundary chains for partitions"
    );
    chains
}
