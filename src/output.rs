use crate::area::Area;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = "result.json";

/// The output file. Consumers expect the area list two levels deep:
/// `{"areas": {"areas": [...]}}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Document {
    areas: AreaList,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct AreaList {
    areas: Vec<Area>,
}

impl Document {
    pub fn new(areas: Vec<Area>) -> Self {
        Document {
            areas: AreaList { areas },
        }
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas.areas
    }

    /// Pretty JSON, 4-space indent, fields in declaration order.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new(DEFAULT_FILE_NAME)));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `bytes` to `path` so that `path` either keeps its old contents or
/// holds all of `bytes`. A staging file is written next to it and renamed
/// into place.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let staging = staging_path(path);

    let result = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&staging, path));

    result.map_err(|source| {
        let _ = fs::remove_file(&staging);
        Error::OutputWrite {
            path: path.display().to_string(),
            source,
        }
    })
}
