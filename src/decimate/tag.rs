use crate::decimate::error::Error;
use geojson::GeoJson;
use serde_json::Value as JValue;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
}

const ALL_TYPES: [GeometryType; 9] = [
    GeometryType::Point,
    GeometryType::MultiPoint,
    GeometryType::LineString,
    GeometryType::MultiLineString,
    GeometryType::Polygon,
    GeometryType::MultiPolygon,
    GeometryType::GeometryCollection,
    GeometryType::Feature,
    GeometryType::FeatureCollection,
];

impl GeometryType {
    pub fn name(&self) -> &'static str {
        match *self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::Feature => "Feature",
            GeometryType::FeatureCollection => "FeatureCollection",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GeometryType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ALL_TYPES
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(raw))
            .copied()
            .ok_or_else(|| Error::UnsupportedGeometryType(raw.to_string()))
    }
}

fn canonical_tag(object: &mut serde_json::Map<String, JValue>) -> Result<GeometryType, Error> {
    let raw = match object.get("type") {
        Some(JValue::String(s)) => s.clone(),
        Some(other) => return Err(Error::UnsupportedGeometryType(other.to_string())),
        None => return Err(Error::InvalidGeoJSON("missing \"type\" member".to_string())),
    };
    let gtype: GeometryType = raw.parse()?;
    object.insert("type".to_string(), JValue::String(gtype.to_string()));
    Ok(gtype)
}

/// Rewrites every `type` member of a GeoJSON tree to its canonical spelling,
/// so `"linestring"` and `"LINESTRING"` read as `"LineString"`.
///
/// Only members GeoJSON itself nests objects under are followed
/// (`geometry`, `features`, `geometries`); properties are left alone.
pub fn canonicalize(value: &mut JValue) -> Result<(), Error> {
    let object = match value {
        JValue::Object(o) => o,
        _ => return Err(Error::InvalidGeoJSON("expected a JSON object".to_string())),
    };

    match canonical_tag(object)? {
        GeometryType::Feature => match object.get_mut("geometry") {
            Some(JValue::Null) | None => Ok(()),
            Some(geometry) => canonicalize(geometry),
        },
        GeometryType::FeatureCollection => children(object, "features"),
        GeometryType::GeometryCollection => children(object, "geometries"),
        _ => Ok(()),
    }
}

fn children(object: &mut serde_json::Map<String, JValue>, key: &str) -> Result<(), Error> {
    if let Some(JValue::Array(members)) = object.get_mut(key) {
        for member in members.iter_mut() {
            canonicalize(member)?;
        }
    }
    Ok(())
}

/// Parse GeoJSON text, accepting type tags in any letter case.
pub fn parse_geojson(raw: &str) -> Result<GeoJson, Error> {
    let mut value: JValue = serde_json::from_str(raw)?;
    canonicalize(&mut value)?;
    Ok(GeoJson::from_json_value(value)?)
}
