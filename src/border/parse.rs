use super::*;
use crate::error::{Error, Result};
use crate::geo::{parse_degrees, LatLon};
use log::warn;
use quick_xml::events::*;
use quick_xml::Reader;
use std::io::BufRead;

// ~70% opacity
const ALPHA_SUFFIX: &str = "B3";

const POINT: &[&[u8]] = &[b"Point"];
const POSITION: &[&[u8]] = &[b"Point", b"Position"];

fn at(path: &[Vec<u8>], expected: &[&[u8]]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a.as_slice() == *b)
}

/// Turns a raw `Color` token into a fill color: alpha appended, upper-cased.
pub fn get_color(raw: &str, boundary: usize) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::MissingColor { boundary });
    }
    Ok(format!("{}{}", raw, ALPHA_SUFFIX).to_uppercase())
}

fn get_vertex(lat: Option<String>, lon: Option<String>, boundary: usize, point: usize) -> Result<Vertex> {
    let malformed = |field: &'static str| Error::MalformedGeometry { boundary, point, field };

    let lat = lat.ok_or_else(|| malformed("Latitude"))?;
    let lon = lon.ok_or_else(|| malformed("Longitude"))?;
    let lat_dd = parse_degrees(&lat).ok_or_else(|| malformed("Latitude"))?;
    let lon_dd = parse_degrees(&lon).ok_or_else(|| malformed("Longitude"))?;

    Ok(Vertex {
        latlon: LatLon::new(lat_dd, lon_dd),
        raw: (lat.trim().to_owned(), lon.trim().to_owned()),
    })
}

fn get_border<B: BufRead>(reader: &mut Reader<B>, buf: &mut Vec<u8>, index: usize) -> Result<Border> {
    let mut border = BorderBuilder::default();
    border.index(index);

    let mut vertices = Vec::new();
    let mut colors = Vec::new();
    // Open elements below the Border
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut lat = None;
    let mut lon = None;

    loop {
        match reader.read_event(buf)? {
            Event::Start(ref event) => {
                let name = event.name().to_vec();
                if path.is_empty() && name == b"Color" {
                    let raw = reader.read_text(b"Color", buf)?;
                    colors.push(get_color(&raw, index)?);
                } else if at(&path, POSITION) && name == b"Latitude" {
                    let raw = reader.read_text(b"Latitude", buf)?;
                    if lat.is_none() {
                        lat = Some(raw);
                    }
                } else if at(&path, POSITION) && name == b"Longitude" {
                    let raw = reader.read_text(b"Longitude", buf)?;
                    if lon.is_none() {
                        lon = Some(raw);
                    }
                } else {
                    if at(&path, POINT) && name == b"Position" {
                        lat = None;
                        lon = None;
                    }
                    path.push(name);
                }
            }
            Event::Empty(ref event) => {
                let name = event.name();
                if path.is_empty() && name == b"Color" {
                    return Err(Error::MissingColor { boundary: index });
                } else if at(&path, POSITION) && name == b"Latitude" {
                    if lat.is_none() {
                        lat = Some(String::new());
                    }
                } else if at(&path, POSITION) && name == b"Longitude" {
                    if lon.is_none() {
                        lon = Some(String::new());
                    }
                } else if at(&path, POINT) && name == b"Position" {
                    return Err(Error::MalformedGeometry {
                        boundary: index,
                        point: vertices.len(),
                        field: "Latitude",
                    });
                }
            }
            Event::End(_) => {
                // Closing tag of the Border itself
                if path.is_empty() {
                    break;
                }
                if at(&path, POSITION) {
                    let point = vertices.len();
                    vertices.push(get_vertex(lat.take(), lon.take(), index, point)?);
                }
                path.pop();
            }
            Event::Eof => return Err(quick_xml::Error::UnexpectedEof("Border".to_owned()).into()),
            _ => (),
        }
        buf.clear();
    }

    if vertices.is_empty() {
        warn!("Border {} has no points", index);
    }

    border.vertices(vertices).colors(colors);
    border.build().map_err(|_| Error::NotYielded)
}

/// Reads every `Border` directly under the root element, in document order.
///
/// This is a single pass: geometry and color are taken from the same element,
/// so each record carries its own color tokens.
pub fn get_border_info<B: BufRead>(reader: &mut Reader<B>) -> Result<Vec<Border>> {
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut borders = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event(&mut buf)? {
            Event::Start(ref event) if depth == 1 && event.name() == b"Border" => {
                let border = get_border(reader, &mut Vec::new(), borders.len())?;
                borders.push(border);
            }
            Event::Start(_) => depth += 1,
            Event::Empty(ref event) if depth == 1 && event.name() == b"Border" => {
                warn!("Border {} has no points", borders.len());
                let border = BorderBuilder::default()
                    .index(borders.len())
                    .build()
                    .map_err(|_| Error::NotYielded)?;
                borders.push(border);
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    Ok(borders)
}
