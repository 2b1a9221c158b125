use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    NotYielded = "No item was yielded",
    XML{quick_xml: quick_xml::Error} = "XML error",
    Json{source: serde_json::Error} = "JSON serialization error",
    MalformedGeometry{boundary: usize, point: usize, field: &'static str}
        = "Border {boundary}, point {point}: missing or non-numeric {field}",
    MissingColor{boundary: usize} = "Border {boundary} has no color",
    AreaColorCountMismatch{boundaries: usize, colors: usize, boundary: usize}
        = "Found {boundaries} borders but {colors} colors (first unpaired border: {boundary})",
    MissingBullseyeCoordinate{field: &'static str} = "Bullseye {field} cannot be blank",
    InvalidNumericInput{field: &'static str, value: String} = "Invalid {field}: '{value}' is not a number",
    OutputWrite{path: String, source: std::io::Error} = "Unable to write {path}"
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Error {
        Error::XML { quick_xml: e }
    }
}
