use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported geojson type: {0}")]
    UnsupportedGeometryType(String),
    #[error("Unknown command")]
    UnknownCommand,
    #[error("Invalid tolerance: {0:?} - must be a non-negative number, e.g. 0.001")]
    InvalidTolerance(String),
    #[error("Unknown input format: {0}")]
    UnknownInputFormat(String),
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJSON(String),
    #[error("Invalid WKT: {0}")]
    InvalidWkt(String),
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    JSONParseError(#[from] serde_json::Error),
}

impl From<geojson::Error> for Error {
    fn from(e: geojson::Error) -> Self {
        Error::InvalidGeoJSON(e.to_string())
    }
}
