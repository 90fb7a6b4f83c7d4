//! JSON encoding and decoding of [`SpdxPredicate`].
//!
//! Decoding is all-or-nothing: malformed JSON or a mistyped member fails the
//! whole document with [`PredicateError::Decode`]. Unknown members are ignored.
//! Encoding writes members in declaration order and never fails for a
//! well-formed value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PredicateError, Result};
use crate::model::package::collapse_filename_keys;
use crate::model::SpdxPredicate;

/// Layout of encoded output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeFormat {
    /// Canonical form: no insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indented, for humans.
    Pretty,
}

impl EncodeFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compact" | "minified" => Some(Self::Compact),
            "pretty" | "indented" => Some(Self::Pretty),
            _ => None,
        }
    }
}

impl std::fmt::Display for EncodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

/// Decode a predicate from JSON bytes.
///
/// A key repeated within one object takes its last value.
pub fn decode(bytes: &[u8]) -> Result<SpdxPredicate> {
    tracing::debug!(input_bytes = bytes.len(), "decoding SPDX predicate");
    let value: Value = serde_json::from_slice(bytes).map_err(PredicateError::Decode)?;
    decode_value(value)
}

/// Decode a predicate from a JSON string.
pub fn decode_str(s: &str) -> Result<SpdxPredicate> {
    decode(s.as_bytes())
}

/// Decode a predicate already parsed into a JSON value, e.g. the
/// `predicate` member of an attestation statement.
pub fn decode_value(mut value: Value) -> Result<SpdxPredicate> {
    if let Some(packages) = value.get_mut("packages").and_then(Value::as_array_mut) {
        for package in packages.iter_mut().filter_map(Value::as_object_mut) {
            collapse_filename_keys(package);
        }
    }
    let predicate: SpdxPredicate =
        serde_json::from_value(value).map_err(PredicateError::Decode)?;

    tracing::debug!(
        spdx_version = %predicate.spdx_version,
        packages = predicate.packages.len(),
        relationships = predicate.relationships.len(),
        "decoded SPDX predicate"
    );
    Ok(predicate)
}

/// Encode a predicate in the canonical compact form.
pub fn encode(predicate: &SpdxPredicate) -> Result<Vec<u8>> {
    encode_with(predicate, EncodeFormat::Compact)
}

/// Encode a predicate using the given layout.
pub fn encode_with(predicate: &SpdxPredicate, format: EncodeFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        EncodeFormat::Compact => serde_json::to_vec(predicate),
        EncodeFormat::Pretty => serde_json::to_vec_pretty(predicate),
    }
    .map_err(PredicateError::Encode)?;

    tracing::debug!(
        format = %format,
        bytes = bytes.len(),
        packages = predicate.packages.len(),
        "encoded SPDX predicate"
    );
    Ok(bytes)
}

/// Convert a predicate into a JSON value for embedding in a larger document.
pub fn to_value(predicate: &SpdxPredicate) -> Result<Value> {
    serde_json::to_value(predicate).map_err(PredicateError::Encode)
}
