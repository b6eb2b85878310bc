// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for segment strings and noding runs.
//!
//! Used for test fixtures and for dumping a failing noding run (inputs plus
//! resulting chains) so it can be replayed elsewhere. The noder itself never
//! touches JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::segment_string::{BasicSegmentString, NodedSegmentString, SegmentString};

/// Serializes a list of segment strings as a JSON array.
pub fn segment_strings_to_json<T: Serialize>(segment_strings: &[T]) -> Result<String> {
    serde_json::to_string(segment_strings).map_err(|e| Error::Serialization(e.to_string()))
}

/// Parses a JSON array of `{ "coords": [...], "data": ... }` objects.
pub fn segment_strings_from_json<D: DeserializeOwned>(json: &str) -> Result<Vec<BasicSegmentString<D>>> {
    serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
}

/// Inputs and output of one noding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodingSnapshot<D> {
    pub inputs: Vec<BasicSegmentString<D>>,
    pub chains: Vec<NodedSegmentString<D>>,
}

impl<D: Clone> NodingSnapshot<D> {
    /// Copies `inputs` (any segment string kind) and `chains` into a snapshot.
    pub fn capture<S>(inputs: &[S], chains: &[NodedSegmentString<D>]) -> Self
    where
        S: SegmentString<Data = D>,
    {
        let inputs = inputs
            .iter()
            .map(|ss| BasicSegmentString::new(ss.coordinates().copied().collect(), ss.data().clone()))
            .collect();
        Self {
            inputs,
            chains: chains.to_vec(),
        }
    }
}

impl<D: Serialize> NodingSnapshot<D> {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl<D: DeserializeOwned> NodingSnapshot<D> {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}
