use crate::decimate::coord::XY;
use crate::decimate::dispatch::Decimate;
use crate::decimate::douglas_peucker::decimate_douglas_peucker;
use crate::decimate::error::Error;
use crate::decimate::radial::decimate_radial_distance;
use geo_types::{Geometry, LineString, Polygon};

/// Both passes over one coordinate sequence: radial distance first, then
/// Douglas-Peucker, with the same tolerance.
pub fn decimate_coords<T: XY + Clone>(points: &[T], tolerance: f64) -> Vec<T> {
    let radial = decimate_radial_distance(points, tolerance);
    decimate_douglas_peucker(&radial, tolerance)
}

fn decimate_line_string(line: &mut LineString<f64>, tolerance: f64) {
    line.0 = decimate_coords(&line.0, tolerance);
}

fn decimate_polygon(poly: &mut Polygon<f64>, tolerance: f64) {
    poly.exterior_mut(|ext| decimate_line_string(ext, tolerance));
    poly.interiors_mut(|rings| {
        for ring in rings.iter_mut() {
            decimate_line_string(ring, tolerance);
        }
    });
}

impl Decimate for Geometry<f64> {
    fn decimate_in_place(&mut self, tolerance: f64) -> Result<(), Error> {
        match *self {
            Geometry::LineString(ref mut g) => decimate_line_string(g, tolerance),
            Geometry::Polygon(ref mut g) => decimate_polygon(g, tolerance),
            Geometry::MultiLineString(ref mut g) => g
                .0
                .iter_mut()
                .for_each(|l| decimate_line_string(l, tolerance)),
            Geometry::MultiPolygon(ref mut g) => {
                g.0.iter_mut().for_each(|p| decimate_polygon(p, tolerance))
            }
            Geometry::GeometryCollection(ref mut gc) => {
                for geom in gc.0.iter_mut() {
                    geom.decimate_in_place(tolerance)?;
                }
            }
            Geometry::Point(_) => return unsupported("Point"),
            Geometry::MultiPoint(_) => return unsupported("MultiPoint"),
            Geometry::Line(_) => return unsupported("Line"),
            Geometry::Rect(_) => return unsupported("Rect"),
            Geometry::Triangle(_) => return unsupported("Triangle"),
        }
        Ok(())
    }
}

fn unsupported(name: &str) -> Result<(), Error> {
    Err(Error::UnsupportedGeometryType(name.to_string()))
}
