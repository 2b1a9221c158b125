use crate::geo::LatLon;
use derive_builder::Builder;

pub mod parse;

/// One vertex of a border outline, with the coordinate text it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub latlon: LatLon,
    pub raw: (String, String),
}

impl Vertex {
    pub fn label(&self) -> String {
        format!("Point ({}, {})", self.raw.0, self.raw.1)
    }
}

/// A `Border` element: its vertices in document order and every color token
/// found on it (alpha already applied).
#[derive(Clone, Debug, Builder)]
#[builder(private)]
pub struct Border {
    pub index: usize,
    #[builder(default)]
    pub vertices: Vec<Vertex>,
    #[builder(default)]
    pub colors: Vec<String>,
}

impl Border {
    /// The color this border is paired with, if it carries exactly one.
    pub fn color(&self) -> Option<&str> {
        match self.colors.as_slice() {
            [color] => Some(color.as_str()),
            _ => None,
        }
    }
}
