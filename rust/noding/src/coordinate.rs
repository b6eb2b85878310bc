// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar coordinates with an optional Z ordinate.
//!
//! Noding works in the XY plane. The Z ordinate, when present, is carried
//! through to output chains unchanged and never takes part in comparisons.

use std::cmp::Ordering;

use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// A vertex of a segment string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Coordinate {
    /// Creates a 2D coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a coordinate carrying a Z ordinate.
    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Bit pattern of the XY ordinates with `-0.0` folded into `0.0`.
    ///
    /// Two coordinates have the same key iff they are equal in 2D, so the key
    /// is safe to hash.
    #[inline]
    pub(crate) fn key_2d(&self) -> (u64, u64) {
        (fold_zero(self.x).to_bits(), fold_zero(self.y).to_bits())
    }

    /// Planar equality. Z is ignored and `-0.0` equals `0.0`.
    #[inline]
    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.key_2d() == other.key_2d()
    }

    /// Lexicographic XY order (x first, then y).
    ///
    /// Total over all `f64` values, consistent with [`Coordinate::equals_2d`].
    #[inline]
    pub fn compare_2d(&self, other: &Coordinate) -> Ordering {
        fold_zero(self.x)
            .total_cmp(&fold_zero(other.x))
            .then_with(|| fold_zero(self.y).total_cmp(&fold_zero(other.y)))
    }

    /// Returns the XY part as a nalgebra point.
    pub fn to_point2(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Returns a nalgebra 3D point, with a missing Z mapped to `0.0`.
    pub fn to_point3(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z.unwrap_or(0.0))
    }
}

#[inline]
fn fold_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl From<Point2<f64>> for Coordinate {
    fn from(p: Point2<f64>) -> Self {
        Coordinate::new(p.x, p.y)
    }
}

impl From<Point3<f64>> for Coordinate {
    fn from(p: Point3<f64>) -> Self {
        Coordinate::new_z(p.x, p.y, p.z)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(c: [f64; 2]) -> Self {
        Coordinate::new(c[0], c[1])
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from(c: [f64; 3]) -> Self {
        Coordinate::new_z(c[0], c[1], c[2])
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}
