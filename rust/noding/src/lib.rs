// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Lite Noding
//!
//! Boundary chain noding for 2D linework.
//!
//! Given the rings of a set of adjacent polygons (for example the footprints
//! of spaces on one storey), the union's outline is made of the edges that
//! occur an odd number of times. This crate finds those edges with a parity
//! set over undirected segments and re-packages the boundary edges of each
//! input into maximal contiguous chains. The chains are much smaller input
//! for a downstream intersection/noding stage than the full ring set.
//!
//! The moving parts, leaves first:
//!
//! - [`Segment`] / [`SegmentSet`]: canonical undirected edges and the toggle
//!   set that keeps only odd occurrences.
//! - [`BoundarySegmentMap`]: per-input boundary flags and the chain scan,
//!   stored in a [`SegmentMapArena`] and referenced by stable keys.
//! - [`BoundaryChainNoder`]: builds the set, marks the maps, collects chains.
//!
//! Any type implementing [`SegmentString`] can be noded; outputs are
//! [`NodedSegmentString`]s that implement the same trait.

pub mod arena;
pub mod boundary_chain_noder;
pub mod boundary_map;
pub mod coordinate;
pub mod error;
pub mod keys;
pub mod noder;
pub mod partition;
pub mod segment;
pub mod segment_string;
pub mod serialization;

pub use arena::SegmentMapArena;
pub use boundary_chain_noder::{node, BoundaryChainNoder};
pub use boundary_map::{create_chain, BoundarySegmentMap};
pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use keys::{EdgeRef, SegmentMapKey};
pub use noder::Noder;
pub use partition::node_partitions;
pub use segment::{Segment, SegmentSet};
pub use segment_string::{BasicSegmentString, NodedSegmentString, SegmentString};
pub use serialization::NodingSnapshot;
