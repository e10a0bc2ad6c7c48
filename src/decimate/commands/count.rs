use crate::decimate::{error::Error, reader};
use std::path::Path;

pub fn run(input: Option<&Path>) -> Result<(), Error> {
    reader::for_entity(input, |e| {
        println!("{}", e.coord_count());
        Ok(())
    })
}
