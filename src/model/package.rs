use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{is_false, nullable};

const FILENAME_KEY: &str = "packageFilename";
const FILENAME_SCHEMA_KEY: &str = "packageFileName";

/// One software component described by the document.
///
/// `name`, `SPDXID`, `versionInfo` and `downloadLocation` are always written.
/// Everything else is skipped while empty (or `false`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Package {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "SPDXID", deserialize_with = "nullable")]
    pub spdx_id: String,
    #[serde(deserialize_with = "nullable")]
    pub version_info: String,
    #[serde(deserialize_with = "nullable")]
    pub download_location: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_false")]
    pub files_analyzed: bool,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub license_concluded: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub license_declared: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub copyright_text: String,
    /// Also accepted as `packageFileName`, the spelling used by the SPDX 2.2 JSON schema.
    #[serde(
        alias = "packageFileName",
        deserialize_with = "nullable",
        skip_serializing_if = "String::is_empty"
    )]
    pub package_filename: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<Checksum>,
}

/// Digest of a package artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Checksum {
    /// Algorithm name as SPDX spells it, e.g. `"SHA256"`.
    #[serde(deserialize_with = "nullable")]
    pub algorithm: String,
    /// Hex-encoded digest.
    #[serde(deserialize_with = "nullable")]
    pub checksum_value: String,
}

impl Checksum {
    pub fn new(algorithm: impl Into<String>, checksum_value: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            checksum_value: checksum_value.into(),
        }
    }
}

/// Keep only the later of the two filename spellings in a package object.
///
/// Relies on the map iterating in insertion order.
pub(crate) fn collapse_filename_keys(package: &mut Map<String, Value>) {
    if !(package.contains_key(FILENAME_KEY) && package.contains_key(FILENAME_SCHEMA_KEY)) {
        return;
    }
    let earlier = package
        .keys()
        .find(|k| *k == FILENAME_KEY || *k == FILENAME_SCHEMA_KEY)
        .cloned();
    if let Some(key) = earlier {
        package.remove(&key);
    }
}
