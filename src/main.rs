#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;

use bullseye_tool::area::parse_numeric;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(about = "Converts border XML into bearing/range areas around a bullseye")]
struct Args {
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    /// Bullseye latitude, decimal degrees (south negative)
    #[structopt(long = "lat", allow_hyphen_values = true)]
    bullseye_lat: String,
    /// Bullseye longitude, decimal degrees (west negative)
    #[structopt(long = "lon", allow_hyphen_values = true)]
    bullseye_lon: String,
    #[structopt(
        short = "m",
        long = "mag-var",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    mag_var: String,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        default_value = "./result.json"
    )]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::from_args();
    let mag_var = parse_numeric("magnetic variation", &args.mag_var)?;

    bullseye_tool::run_transform_to(
        &args.input,
        &args.output,
        &args.bullseye_lat,
        &args.bullseye_lon,
        mag_var,
    )?;
    Ok(())
}
