use crate::decimate::{coord_count, dispatch, error::Error, input::Input, tag};
use geojson::GeoJson;
use std::convert::TryInto;
use wkt::ToWkt;

/// One parsed input record. GeoJSON records are kept whole (a
/// FeatureCollection stays one entity) so they can be written back in the
/// shape they arrived in.
#[derive(Clone, Debug)]
pub enum Entity {
    Wkt(String, geo_types::Geometry<f64>),
    GeoJson(String, GeoJson),
}

fn wkt_entities(raw: &str) -> Result<Vec<Entity>, Error> {
    let wkts = wkt::Wkt::<f64>::from_str(raw.trim())
        .map_err(|e| Error::InvalidWkt(e.to_string()))?;
    let mut entities = Vec::new();
    for wkt_geom in wkts.items {
        let wkt_raw = wkt_geom.to_string();
        let geom: geo_types::Geometry<f64> = wkt_geom
            .try_into()
            .map_err(|e| Error::InvalidWkt(format!("{:?}", e)))?;
        entities.push(Entity::Wkt(wkt_raw, geom));
    }
    Ok(entities)
}

fn geojson_entities(raw: String) -> Result<Vec<Entity>, Error> {
    let gj = tag::parse_geojson(&raw)?;
    Ok(vec![Entity::GeoJson(raw, gj)])
}

impl Entity {
    pub fn decimate(&mut self, tolerance: f64) -> Result<(), Error> {
        match *self {
            Entity::Wkt(_, ref mut geom) => dispatch::decimate(geom, tolerance).map(|_| ()),
            Entity::GeoJson(_, ref mut gj) => dispatch::decimate(gj, tolerance).map(|_| ()),
        }
    }

    pub fn coord_count(&self) -> usize {
        match *self {
            Entity::Wkt(_, ref geom) => coord_count::coord_count(geom),
            Entity::GeoJson(_, ref gj) => coord_count::geojson_coord_count(gj),
        }
    }

    /// Serialize in the same format the entity was read from.
    pub fn output(&self) -> String {
        match *self {
            Entity::Wkt(ref raw, ref geom) => geom
                .to_wkt()
                .items
                .pop()
                .map(|g| g.to_string())
                .unwrap_or_else(|| raw.clone()),
            Entity::GeoJson(_, ref gj) => gj.to_string(),
        }
    }

    pub fn raw(&self) -> &str {
        match *self {
            Entity::Wkt(ref raw, _) => raw,
            Entity::GeoJson(ref raw, _) => raw,
        }
    }
}

pub fn from_input(i: Input) -> Result<Vec<Entity>, Error> {
    match i {
        Input::WKT(raw) => wkt_entities(&raw),
        Input::GeoJSON(raw) => geojson_entities(raw),
        Input::Unknown(raw) => Err(Error::UnknownInputFormat(raw)),
    }
}
