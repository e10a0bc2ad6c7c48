//! Routes every coordinate sequence owned by a GeoJSON object through
//! [`decimate_coords`], writing each result back where it came from.

use crate::decimate::error::Error;
use crate::decimate::simplify::decimate_coords;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

/// Something that owns coordinate sequences which can be decimated in place.
pub trait Decimate {
    fn decimate_in_place(&mut self, tolerance: f64) -> Result<(), Error>;
}

/// Decimate `geom` in place and hand it back.
///
/// Fails with [`Error::UnsupportedGeometryType`] when any part of it is a
/// geometry kind without line work (points). Nothing is rolled back on
/// failure; treat the input as spoiled.
pub fn decimate<G: Decimate + ?Sized>(geom: &mut G, tolerance: f64) -> Result<&mut G, Error> {
    geom.decimate_in_place(tolerance)?;
    Ok(geom)
}

impl Decimate for Value {
    fn decimate_in_place(&mut self, tolerance: f64) -> Result<(), Error> {
        match *self {
            Value::LineString(ref mut line) => {
                *line = decimate_coords(line, tolerance);
            }
            Value::MultiLineString(ref mut lines) | Value::Polygon(ref mut lines) => {
                for line in lines.iter_mut() {
                    *line = decimate_coords(line, tolerance);
                }
            }
            Value::MultiPolygon(ref mut polys) => {
                for rings in polys.iter_mut() {
                    for ring in rings.iter_mut() {
                        *ring = decimate_coords(ring, tolerance);
                    }
                }
            }
            Value::GeometryCollection(ref mut geoms) => {
                for geom in geoms.iter_mut() {
                    geom.decimate_in_place(tolerance)?;
                }
            }
            Value::Point(_) => return Err(Error::UnsupportedGeometryType("Point".to_string())),
            Value::MultiPoint(_) => {
                return Err(Error::UnsupportedGeometryType("MultiPoint".to_string()))
            }
        }
        Ok(())
    }
}

impl Decimate for Geometry {
    fn decimate_in_place(&mut self, tolerance: f64) -> Result<(), Error> {
        self.value.decimate_in_place(tolerance)
    }
}

impl Decimate for Feature {
    fn decimate_in_place(&mut self, tolerance: f64) -> Result<(), Error> {
        match self.geometry {
            Some(ref mut geom) => geom.decimate_in_place(tolerance),
            None => Ok(()),
        }
    }
}

impl Decimate for FeatureCollection {
    fn decimate_in_place(&mut self, tolerance: f64) -> Result<(), Error> {
        for feature in self.features.iter_mut() {
            feature.decimate_in_place(tolerance)?;
        }
        Ok(())
    }
}

impl Decimate for GeoJson {
    fn decimate_in_place(&mut self, tolerance: f64) -> Result<(), Error> {
        match *self {
            GeoJson::Geometry(ref mut g) => g.decimate_in_place(tolerance),
            GeoJson::Feature(ref mut f) => f.decimate_in_place(tolerance),
            GeoJson::FeatureCollection(ref mut fc) => fc.decimate_in_place(tolerance),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::decimate::dispatch::decimate;
    use crate::decimate::error::Error;
    use crate::decimate::tag::parse_geojson;
    use geojson::GeoJson;
    use serde_json::json;

    const LINE: &str = "[[0,0],[0.3,0.3],[0.5,0.5],[1,1],[1.2,1],[2,1],[2,2]]";
    const RING: &str =
        "[[0,0],[0.3,0.3],[0.5,0.5],[1,1],[1.2,1],[2,1],[4,5],[2,5],[1.9,4.5],[1,3],[0,0]]";

    fn simplified(raw: &str, tolerance: f64) -> serde_json::Value {
        let mut gj = parse_geojson(raw).expect("valid geojson");
        decimate(&mut gj, tolerance).expect("decimated");
        serde_json::to_value(&gj).unwrap()
    }

    fn expect_unsupported(raw: &str, exp: &str) {
        let mut gj = parse_geojson(raw).expect("valid geojson");
        match decimate(&mut gj, 1.0) {
            Err(Error::UnsupportedGeometryType(t)) => assert_eq!(exp, t),
            other => panic!("expected unsupported type, got {:?}", other),
        }
    }

    #[test]
    fn test_line_string() {
        let raw = format!(r#"{{"type":"LineString","coordinates":{}}}"#, LINE);
        let gj = simplified(&raw, 1.0);
        assert_eq!(json!([[0.0, 0.0], [2.0, 2.0]]), gj["coordinates"]);
    }

    #[test]
    fn test_lowercase_tag() {
        let raw = format!(r#"{{"type":"linestring","coordinates":{}}}"#, LINE);
        let gj = simplified(&raw, 1.0);
        assert_eq!("LineString", gj["type"]);
        assert_eq!(json!([[0.0, 0.0], [2.0, 2.0]]), gj["coordinates"]);
    }

    #[test]
    fn test_polygon() {
        let raw = format!(r#"{{"type":"Polygon","coordinates":[{}, {}]}}"#, RING, LINE);
        let gj = simplified(&raw, 1.0);
        assert_eq!(
            json!([
                [[0.0, 0.0], [4.0, 5.0], [2.0, 5.0], [0.0, 0.0]],
                [[0.0, 0.0], [2.0, 2.0]]
            ]),
            gj["coordinates"]
        );
    }

    #[test]
    fn test_multi_line_string_keeps_order() {
        let raw = format!(
            r#"{{"type":"MultiLineString","coordinates":[{}, [[5,5],[6,6]]]}}"#,
            LINE
        );
        let gj = simplified(&raw, 1.0);
        assert_eq!(
            json!([[[0.0, 0.0], [2.0, 2.0]], [[5.0, 5.0], [6.0, 6.0]]]),
            gj["coordinates"]
        );
    }

    #[test]
    fn test_multi_polygon() {
        let raw = format!(
            r#"{{"type":"MultiPolygon","coordinates":[[{}], [{}]]}}"#,
            RING, LINE
        );
        let gj = simplified(&raw, 1.0);
        assert_eq!(
            json!([
                [[[0.0, 0.0], [4.0, 5.0], [2.0, 5.0], [0.0, 0.0]]],
                [[[0.0, 0.0], [2.0, 2.0]]]
            ]),
            gj["coordinates"]
        );
    }

    #[test]
    fn test_geometry_collection_threads_tolerance() {
        let raw = format!(
            r#"{{"type":"GeometryCollection","geometries":[
                {{"type":"LineString","coordinates":{}}},
                {{"type":"GeometryCollection","geometries":[{{"type":"LineString","coordinates":{}}}]}}
            ]}}"#,
            LINE, LINE
        );
        let gj = simplified(&raw, 1.0);
        let exp = json!([[0.0, 0.0], [2.0, 2.0]]);
        assert_eq!(exp, gj["geometries"][0]["coordinates"]);
        assert_eq!(exp, gj["geometries"][1]["geometries"][0]["coordinates"]);
    }

    #[test]
    fn test_feature_keeps_properties_and_id() {
        let raw = format!(
            r#"{{"type":"Feature","id":"road-1","properties":{{"name":"a"}},"geometry":{{"type":"LineString","coordinates":{}}}}}"#,
            LINE
        );
        let gj = simplified(&raw, 1.0);
        assert_eq!("road-1", gj["id"]);
        assert_eq!(json!({"name": "a"}), gj["properties"]);
        assert_eq!(json!([[0.0, 0.0], [2.0, 2.0]]), gj["geometry"]["coordinates"]);
    }

    #[test]
    fn test_feature_without_geometry() {
        let gj = simplified(r#"{"type":"Feature","properties":{},"geometry":null}"#, 1.0);
        assert!(gj["geometry"].is_null());
    }

    #[test]
    fn test_feature_collection() {
        let raw = format!(
            r#"{{"type":"FeatureCollection","features":[
                {{"type":"Feature","properties":{{}},"geometry":{{"type":"LineString","coordinates":{}}}}},
                {{"type":"Feature","properties":{{}},"geometry":{{"type":"LineString","coordinates":[[5,5],[5.1,5.1],[6,6]]}}}}
            ]}}"#,
            LINE
        );
        let gj = simplified(&raw, 1.0);
        assert_eq!(
            json!([[0.0, 0.0], [2.0, 2.0]]),
            gj["features"][0]["geometry"]["coordinates"]
        );
        assert_eq!(
            json!([[5.0, 5.0], [6.0, 6.0]]),
            gj["features"][1]["geometry"]["coordinates"]
        );
    }

    #[test]
    fn test_extra_ordinates_are_carried() {
        let raw = r#"{"type":"LineString","coordinates":[[0,0,10],[0.1,0.1,11],[3,3,12]]}"#;
        let gj = simplified(raw, 1.0);
        assert_eq!(json!([[0.0, 0.0, 10.0], [3.0, 3.0, 12.0]]), gj["coordinates"]);
    }

    #[test]
    fn test_returns_same_object() {
        let raw = format!(r#"{{"type":"LineString","coordinates":{}}}"#, LINE);
        let mut gj = parse_geojson(&raw).unwrap();
        let ptr: *const GeoJson = &gj;
        let returned = decimate(&mut gj, 1.0).unwrap();
        assert!(std::ptr::eq(ptr, returned));
    }

    #[test]
    fn test_point_is_unsupported() {
        expect_unsupported(r#"{"type":"Point","coordinates":[0,0]}"#, "Point");
        expect_unsupported(r#"{"type":"MultiPoint","coordinates":[[0,0]]}"#, "MultiPoint");
    }

    #[test]
    fn test_point_inside_collection_aborts() {
        let raw = format!(
            r#"{{"type":"FeatureCollection","features":[
                {{"type":"Feature","properties":{{}},"geometry":{{"type":"LineString","coordinates":{}}}}},
                {{"type":"Feature","properties":{{}},"geometry":{{"type":"Point","coordinates":[1,1]}}}}
            ]}}"#,
            LINE
        );
        expect_unsupported(&raw, "Point");
    }
}
