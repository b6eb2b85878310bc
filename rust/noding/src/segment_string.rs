// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The segment string capability shared by all noders.
//!
//! A segment string is an ordered run of coordinates (one piece of linework)
//! plus opaque context data. Noders only ever need the narrow surface of the
//! [`SegmentString`] trait, so inputs and outputs can be any concrete type
//! implementing it.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

/// Read-only access to a segment string.
pub trait SegmentString {
    /// Opaque context data carried through noding unchanged.
    type Data;

    /// Number of vertices.
    fn size(&self) -> usize;

    /// The vertex at `index`. Panics if `index >= size()`.
    fn coordinate(&self, index: usize) -> &Coordinate;

    /// The context data of this segment string.
    fn data(&self) -> &Self::Data;

    /// Checked variant of [`SegmentString::coordinate`].
    fn try_coordinate(&self, index: usize) -> Result<&Coordinate> {
        if index < self.size() {
            Ok(self.coordinate(index))
        } else {
            Err(Error::CoordinateOutOfRange {
                index,
                size: self.size(),
            })
        }
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of edges, `size() - 1`, or 0 for fewer than 2 vertices.
    fn segment_count(&self) -> usize {
        self.size().saturating_sub(1)
    }

    /// True if there are at least 2 vertices and the first equals the last
    /// in 2D.
    fn is_closed(&self) -> bool {
        let n = self.size();
        n >= 2 && self.coordinate(0).equals_2d(self.coordinate(n - 1))
    }

    /// Iterates the vertices in order.
    fn coordinates(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        (0..self.size()).map(move |i| self.coordinate(i))
    }
}

impl<T: SegmentString + ?Sized> SegmentString for &T {
    type Data = T::Data;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn coordinate(&self, index: usize) -> &Coordinate {
        (**self).coordinate(index)
    }

    fn data(&self) -> &Self::Data {
        (**self).data()
    }
}

/// A plain segment string: coordinates plus context data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicSegmentString<D> {
    coords: Vec<Coordinate>,
    data: D,
}

impl<D> BasicSegmentString<D> {
    pub fn new(coords: Vec<Coordinate>, data: D) -> Self {
        Self { coords, data }
    }

    /// Builds a segment string from anything convertible to coordinates,
    /// e.g. `[f64; 2]` pairs.
    pub fn from_points<P: Into<Coordinate>>(points: impl IntoIterator<Item = P>, data: D) -> Self {
        Self::new(points.into_iter().map(Into::into).collect(), data)
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coords
    }
}

impl<D> SegmentString for BasicSegmentString<D> {
    type Data = D;

    fn size(&self) -> usize {
        self.coords.len()
    }

    fn coordinate(&self, index: usize) -> &Coordinate {
        &self.coords[index]
    }

    fn data(&self) -> &D {
        &self.data
    }
}

/// A segment string produced by a noder.
///
/// Owns its coordinates outright; `data` is a clone of the data of the
/// segment string it was cut from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodedSegmentString<D> {
    coords: Vec<Coordinate>,
    data: D,
}

impl<D> NodedSegmentString<D> {
    pub fn new(coords: Vec<Coordinate>, data: D) -> Self {
        Self { coords, data }
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Consumes the segment string, returning its coordinates and data.
    pub fn into_parts(self) -> (Vec<Coordinate>, D) {
        (self.coords, self.data)
    }
}

impl<D> SegmentString for NodedSegmentString<D> {
    type Data = D;

    fn size(&self) -> usize {
        self.coords.len()
    }

    fn coordinate(&self, index: usize) -> &Coordinate {
        &self.coords[index]
    }

    fn data(&self) -> &D {
        &self.data
    }
}
