use crate::decimate::entity::{self, Entity};
use crate::decimate::error::Error;
use crate::decimate::input::{self, Input};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub struct Reader<'a> {
    reader: &'a mut dyn BufRead,
}

impl<'a> Reader<'a> {
    pub fn new(reader: &'a mut dyn BufRead) -> Reader<'a> {
        Reader { reader }
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Result<Input, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut buf = String::new();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = buf.trim_end_matches(|c| c == '\n' || c == '\r');
                    if !line.trim().is_empty() {
                        return Some(Ok(input::read_line(line.to_string())));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Run `handler` on every entity read from `path`, or from STDIN when no
/// path is given. Stops at the first error.
pub fn for_entity<F>(path: Option<&Path>, mut handler: F) -> Result<(), Error>
where
    F: FnMut(Entity) -> Result<(), Error>,
{
    match path {
        Some(p) => {
            let mut file = BufReader::new(File::open(p)?);
            each_entity(&mut file, &mut handler)
        }
        None => {
            let stdin = io::stdin();
            let mut stdin_reader = stdin.lock();
            each_entity(&mut stdin_reader, &mut handler)
        }
    }
}

fn each_entity<F>(buf_read: &mut dyn BufRead, handler: &mut F) -> Result<(), Error>
where
    F: FnMut(Entity) -> Result<(), Error>,
{
    for i in Reader::new(buf_read) {
        for e in entity::from_input(i?)? {
            handler(e)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::decimate::input::Input;
    use crate::decimate::reader::Reader;

    #[test]
    fn test_reading_empty_string() {
        let mut pointer = "".as_bytes();
        let reader = Reader::new(&mut pointer);
        assert_eq!(0, reader.count());
    }

    #[test]
    fn test_skips_blank_lines() {
        let mut pointer = "\nLINESTRING (0 0, 1 1)\n\n  \r\n{\"type\":\"Point\",\"coordinates\":[1,2]}\r\n".as_bytes();
        let inputs: Vec<Input> = Reader::new(&mut pointer).map(|i| i.unwrap()).collect();
        assert_eq!(
            vec![
                Input::WKT("LINESTRING (0 0, 1 1)".to_string()),
                Input::GeoJSON("{\"type\":\"Point\",\"coordinates\":[1,2]}".to_string()),
            ],
            inputs
        );
    }
}
