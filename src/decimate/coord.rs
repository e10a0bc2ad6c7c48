//! Read access to the planar components of a coordinate.
//!
//! The reducers only ever look at `x` and `y`; anything else a coordinate
//! carries (a GeoJSON altitude, for instance) rides along untouched.

use geo_types::Coord;

pub trait XY {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// GeoJSON position. Missing ordinates read as NaN.
impl XY for Vec<f64> {
    fn x(&self) -> f64 {
        self.get(0).copied().unwrap_or(f64::NAN)
    }

    fn y(&self) -> f64 {
        self.get(1).copied().unwrap_or(f64::NAN)
    }
}

impl XY for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl XY for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl XY for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// Coordinate-equality on the planar components only.
pub fn same_xy<A: XY, B: XY>(a: &A, b: &B) -> bool {
    a.x() == b.x() && a.y() == b.y()
}
