use serde::{Deserialize, Serialize};

use super::nullable;

/// A non-standard license, referenced elsewhere by its `LicenseRef-` id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractedLicensingInfo {
    #[serde(deserialize_with = "nullable")]
    pub extracted_text: String,
    #[serde(deserialize_with = "nullable")]
    pub license_id: String,
}

impl ExtractedLicensingInfo {
    pub fn new(license_id: impl Into<String>, extracted_text: impl Into<String>) -> Self {
        Self {
            extracted_text: extracted_text.into(),
            license_id: license_id.into(),
        }
    }
}
