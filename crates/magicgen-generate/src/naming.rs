use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Suffix strategy for output file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePrefix {
    /// `{base}_{index}`, without an extension.
    #[default]
    Count,
    /// `{base}_{1000..=9999}.json`.
    Random,
    /// `{base}_{uuid}.json`.
    Uuid,
    /// `{base}_{index}.json`.
    #[serde(rename = "default")]
    Indexed,
}

impl FilePrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePrefix::Count => "count",
            FilePrefix::Random => "random",
            FilePrefix::Uuid => "uuid",
            FilePrefix::Indexed => "default",
        }
    }
}

impl fmt::Display for FilePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilePrefix {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "count" => Ok(FilePrefix::Count),
            "random" => Ok(FilePrefix::Random),
            "uuid" => Ok(FilePrefix::Uuid),
            "default" => Ok(FilePrefix::Indexed),
            other => Err(format!(
                "unknown file prefix '{other}' (expected count, random, uuid or default)"
            )),
        }
    }
}

/// Name of the file at 1-based `index` out of `total_files`.
///
/// `count` names carry no `.json` extension when more than one file is
/// generated; existing consumers rely on that shape.
pub fn name_file<R: RandomSource + ?Sized>(
    base: &str,
    prefix: FilePrefix,
    total_files: u64,
    index: u64,
    rng: &mut R,
) -> String {
    if total_files == 1 {
        return format!("{base}.json");
    }

    match prefix {
        FilePrefix::Count => format!("{base}_{index}"),
        FilePrefix::Random => format!("{base}_{}.json", rng.int_in_range(1000, 9999)),
        FilePrefix::Uuid => format!("{base}_{}.json", rng.uuid_v4()),
        FilePrefix::Indexed => format!("{base}_{index}.json"),
    }
}
