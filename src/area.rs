use crate::border::{Border, Vertex};
use crate::error::{Error, Result};
use crate::geo::{parse_degrees, LatLon};
use itertools::Itertools;
use log::debug;
use serde::Serialize;

/// The reference point of a run and the variation applied to every bearing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullseye {
    pub latlon: LatLon,
    pub magnetic_variation: f64,
}

impl Bullseye {
    pub fn new(latlon: LatLon, magnetic_variation: f64) -> Self {
        Bullseye { latlon, magnetic_variation }
    }

    /// Builds a bullseye from user-entered text. Blank fields are reported
    /// before any number is parsed.
    pub fn from_fields(lat: &str, lon: &str, magnetic_variation: f64) -> Result<Self> {
        if lat.trim().is_empty() {
            return Err(Error::MissingBullseyeCoordinate { field: "latitude" });
        }
        if lon.trim().is_empty() {
            return Err(Error::MissingBullseyeCoordinate { field: "longitude" });
        }

        let lat = parse_numeric("bullseye latitude", lat)?;
        let lon = parse_numeric("bullseye longitude", lon)?;
        if !magnetic_variation.is_finite() {
            return Err(Error::InvalidNumericInput {
                field: "magnetic variation",
                value: magnetic_variation.to_string(),
            });
        }
        Ok(Bullseye::new(LatLon::new(lat, lon), magnetic_variation))
    }
}

pub fn parse_numeric(field: &'static str, value: &str) -> Result<f64> {
    parse_degrees(value).ok_or_else(|| Error::InvalidNumericInput {
        field,
        value: value.to_owned(),
    })
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PolarPoint {
    pub name: String,
    pub azimuth: f64,
    pub distance: f64,
}

impl PolarPoint {
    pub fn from_vertex(vertex: &Vertex, bullseye: &Bullseye) -> Self {
        let result = bullseye
            .latlon
            .bearing_and_range(vertex.latlon, bullseye.magnetic_variation);
        PolarPoint {
            name: vertex.label(),
            azimuth: result.bearing,
            distance: result.range,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Area {
    pub name: String,
    pub fill: String,
    pub points: Vec<PolarPoint>,
}

/// Converts each border into an area of polar points around the bullseye.
///
/// Every border must carry exactly one color; this is checked for all borders
/// before any point is converted. Order is kept at both levels.
pub fn build_areas(borders: &[Border], bullseye: &Bullseye) -> Result<Vec<Area>> {
    if let Some((boundary, _)) = borders.iter().find_position(|b| b.color().is_none()) {
        return Err(Error::AreaColorCountMismatch {
            boundaries: borders.len(),
            colors: borders.iter().map(|b| b.colors.len()).sum(),
            boundary,
        });
    }

    let areas = borders
        .iter()
        .map(|border| {
            // Every border was checked for exactly one color above
            let fill = border.color().unwrap_or_default();
            let points: Vec<_> = border
                .vertices
                .iter()
                .map(|v| PolarPoint::from_vertex(v, bullseye))
                .collect();
            debug!("Area {}: {} points, fill {}", border.index, points.len(), fill);
            Area {
                name: format!("Area {}", border.index),
                fill: fill.to_owned(),
                points,
            }
        })
        .collect();

    Ok(areas)
}
