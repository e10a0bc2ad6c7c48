use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static JSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\{").unwrap());
static WKT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(point|linestring|polygon|multipoint|multilinestring|multipolygon|geometrycollection)\b",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    GeoJSON(String),
    WKT(String),
    Unknown(String),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Input::GeoJSON(ref raw) => write!(f, "GeoJSON({})", raw),
            Input::WKT(ref raw) => write!(f, "WKT({})", raw),
            Input::Unknown(ref raw) => write!(f, "Unknown({})", raw),
        }
    }
}

pub fn read_line(line: String) -> Input {
    if JSON.is_match(&line) {
        Input::GeoJSON(line)
    } else if WKT.is_match(&line) {
        Input::WKT(line)
    } else {
        Input::Unknown(line)
    }
}
