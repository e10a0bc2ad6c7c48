use geo::algorithm::coords_iter::CoordsIter;
use geo_types::{Geometry, Polygon};
use geojson::{GeoJson, Value};

fn poly_coord_count(poly: &Polygon<f64>) -> usize {
    poly.exterior().coords_count()
        + poly
            .interiors()
            .iter()
            .map(|ring| ring.coords_count())
            .sum::<usize>()
}

pub fn coord_count(geom: &Geometry<f64>) -> usize {
    match *geom {
        Geometry::Point(_) => 1,
        Geometry::Line(_) => 2,
        Geometry::Triangle(_) => 3,
        Geometry::Rect(_) => 4,
        Geometry::LineString(ref g) => g.coords_count(),
        Geometry::Polygon(ref g) => poly_coord_count(g),
        Geometry::MultiPoint(ref g) => g.0.len(),
        Geometry::MultiLineString(ref g) => g.0.iter().map(|l| l.coords_count()).sum(),
        Geometry::MultiPolygon(ref g) => g.0.iter().map(|p| poly_coord_count(p)).sum(),
        Geometry::GeometryCollection(ref gc) => gc.0.iter().map(|g| coord_count(g)).sum(),
    }
}

pub fn value_coord_count(value: &Value) -> usize {
    match *value {
        Value::Point(_) => 1,
        Value::MultiPoint(ref points) => points.len(),
        Value::LineString(ref line) => line.len(),
        Value::MultiLineString(ref lines) | Value::Polygon(ref lines) => {
            lines.iter().map(|l| l.len()).sum()
        }
        Value::MultiPolygon(ref polys) => polys
            .iter()
            .flat_map(|rings| rings.iter())
            .map(|ring| ring.len())
            .sum(),
        Value::GeometryCollection(ref geoms) => {
            geoms.iter().map(|g| value_coord_count(&g.value)).sum()
        }
    }
}

fn feature_coord_count(feature: &geojson::Feature) -> usize {
    feature
        .geometry
        .as_ref()
        .map(|g| value_coord_count(&g.value))
        .unwrap_or(0)
}

pub fn geojson_coord_count(gj: &GeoJson) -> usize {
    match *gj {
        GeoJson::Geometry(ref g) => value_coord_count(&g.value),
        GeoJson::Feature(ref f) => feature_coord_count(f),
        GeoJson::FeatureCollection(ref fc) => fc.features.iter().map(feature_coord_count).sum(),
    }
}
