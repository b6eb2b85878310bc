// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for noding operations.
//!
//! Degenerate segment strings (fewer than 2 vertices) are not errors: they
//! contribute no edges and no chains.

/// Result type alias for noding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during noding operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `compute_nodes` was called on a noder that already holds a result.
    #[error("noder is single-use: compute_nodes has already been called")]
    AlreadyComputed,

    /// A vertex index was outside the segment string.
    #[error("coordinate index {index} out of range for segment string of size {size}")]
    CoordinateOutOfRange { index: usize, size: usize },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
