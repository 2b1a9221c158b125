#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};
use quick_xml::Reader;

pub mod area;
pub mod border;
pub mod error;
pub mod geo;
pub mod output;

pub use area::{Area, Bullseye, PolarPoint};
pub use error::{Error, Result};
pub use geo::{bearing_and_range, LatLon};
pub use output::Document;

/// Where [`run_transform`] publishes its result.
pub const DEFAULT_OUTPUT: &str = "result.json";

/// Reads border XML and converts it into an output document. Nothing is
/// written.
pub fn transform<B: BufRead>(reader: &mut Reader<B>, bullseye: &Bullseye) -> Result<Document> {
    info!("Processing border XML...");
    let borders = border::parse::get_border_info(reader)?;

    info!("Converting {} borders...", borders.len());
    let document = Document::new(area::build_areas(&borders, bullseye)?);
    debug!("Areas: {}", document.areas().iter().map(|a| &a.name).join(", "));

    Ok(document)
}

/// Runs the whole pipeline and publishes the result at [`DEFAULT_OUTPUT`].
pub fn run_transform<P: AsRef<Path>>(
    input: P,
    bullseye_lat: &str,
    bullseye_lon: &str,
    magnetic_variation: f64,
) -> Result<()> {
    run_transform_to(input, DEFAULT_OUTPUT, bullseye_lat, bullseye_lon, magnetic_variation)
}

/// Same as [`run_transform`] with an explicit destination. Either the whole
/// document lands at `output` or nothing does.
pub fn run_transform_to<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    bullseye_lat: &str,
    bullseye_lon: &str,
    magnetic_variation: f64,
) -> Result<()> {
    let bullseye = Bullseye::from_fields(bullseye_lat, bullseye_lon, magnetic_variation)?;

    let mut reader = Reader::from_reader(BufReader::new(File::open(input)?));
    let document = transform(&mut reader, &bullseye)?;
    let json = document.to_json()?;

    info!("Outputting {}...", output.as_ref().display());
    output::write_atomic(output, &json)
}
