//! Point-count reduction for GeoJSON-style line geometries.
//!
//! Each coordinate sequence gets a radial-distance pass followed by a
//! Douglas-Peucker pass with the same tolerance.

pub mod decimate;

pub use crate::decimate::coord::XY;
pub use crate::decimate::dispatch::{decimate, Decimate};
pub use crate::decimate::distance::{line_distance, point_distance};
pub use crate::decimate::douglas_peucker::decimate_douglas_peucker;
pub use crate::decimate::error::Error;
pub use crate::decimate::radial::decimate_radial_distance;
pub use crate::decimate::tag::parse_geojson;
