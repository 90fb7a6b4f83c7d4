//! Typed SPDX 2.2 document model.
//!
//! `SpdxPredicate` is the root record. Every nested record follows the same
//! key conventions: camelCase JSON keys, `SPDXID` spelled in upper case, and
//! optional members skipped on encode when they hold their empty value.
//!
//! Decoding is permissive: unknown keys are ignored, absent keys and JSON
//! `null` both leave the member at its default. No cross-reference or schema
//! validation happens here.

pub mod creation_info;
pub mod licensing;
pub mod package;
pub mod relationship;

use serde::{Deserialize, Deserializer, Serialize};

pub use creation_info::CreationInfo;
pub use licensing::ExtractedLicensingInfo;
pub use package::{Checksum, Package};
pub use relationship::Relationship;

/// Predicate type URI identifying an SPDX document inside an attestation.
///
/// SPDX mandates the `spdxVersion` member, so the type carries no version.
pub const PREDICATE_SPDX: &str = "https://spdx.dev/Document";

/// Conventional element id of the document itself.
pub const SPDX_REF_DOCUMENT: &str = "SPDXRef-DOCUMENT";

/// Schema version string for SPDX 2.2 documents.
pub const SPDX_VERSION_2_2: &str = "SPDX-2.2";

/// One SPDX document, used as an attestation predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpdxPredicate {
    /// Document element id, conventionally [`SPDX_REF_DOCUMENT`].
    #[serde(rename = "SPDXID", deserialize_with = "nullable")]
    pub spdx_id: String,
    /// Schema version, e.g. [`SPDX_VERSION_2_2`].
    #[serde(deserialize_with = "nullable")]
    pub spdx_version: String,
    #[serde(deserialize_with = "nullable")]
    pub creation_info: CreationInfo,
    /// Human-readable document name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub data_license: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// Unique namespace URI of the document.
    #[serde(deserialize_with = "nullable")]
    pub document_namespace: String,
    /// Element ids of the top-level elements this document describes.
    #[serde(deserialize_with = "nullable")]
    pub document_describes: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub packages: Vec<Package>,
    #[serde(deserialize_with = "nullable")]
    pub relationships: Vec<Relationship>,
    #[serde(deserialize_with = "nullable")]
    pub has_extracted_licensing_infos: Vec<ExtractedLicensingInfo>,
}

impl SpdxPredicate {
    /// Predicate type string for statements carrying this payload.
    pub const PREDICATE_TYPE: &'static str = PREDICATE_SPDX;
}

/// Treat JSON `null` like an absent key.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
