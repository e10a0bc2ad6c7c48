use crate::decimate::{error::Error, reader};
use clap::ArgMatches;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

pub fn parse_tolerance(arg: &str) -> Result<f64, Error> {
    match f64::from_str(arg.trim()) {
        Ok(t) if t.is_finite() && t >= 0.0 => Ok(t),
        _ => Err(Error::InvalidTolerance(arg.to_string())),
    }
}

fn simplify(input: Option<&Path>, tolerance: f64) -> Result<(), Error> {
    let mut entities = 0;
    let mut coords_in = 0;
    let mut coords_out = 0;
    reader::for_entity(input, |mut e| {
        let before = e.coord_count();
        e.decimate(tolerance)?;
        let after = e.coord_count();
        debug!(before, after, "decimated {}", e.raw());

        entities += 1;
        coords_in += before;
        coords_out += after;
        println!("{}", e.output());
        Ok(())
    })?;
    info!(entities, coords_in, coords_out, tolerance, "simplify finished");
    Ok(())
}

pub fn run(matches: &ArgMatches, input: Option<&Path>) -> Result<(), Error> {
    let tolerance = parse_tolerance(matches.value_of("tolerance").unwrap_or(""))?;
    simplify(input, tolerance)
}
