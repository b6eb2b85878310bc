// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The contract shared by noding strategies.

use crate::error::Result;
use crate::segment_string::{NodedSegmentString, SegmentString};

/// Computes noded substrings from a set of input segment strings.
///
/// Inputs are borrowed and never modified. Every output is a newly owned
/// segment string whose data is a clone of its source's data.
pub trait Noder<S: SegmentString> {
    /// Runs the noding computation over `segment_strings`.
    fn compute_nodes(&mut self, segment_strings: &[S]) -> Result<()>;

    /// The noded substrings computed so far (empty before `compute_nodes`).
    fn noded_substrings(&self) -> &[NodedSegmentString<S::Data>];

    /// Moves the noded substrings out, leaving the noder's list empty.
    fn take_noded_substrings(&mut self) -> Vec<NodedSegmentString<S::Data>>;
}
