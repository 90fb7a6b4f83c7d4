use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// Provenance of the document itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreationInfo {
    /// Creation instant, RFC 3339 on the wire. Omitted entirely when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Tool or person identifiers, e.g. `"Tool: tern-2.9.0"`.
    #[serde(deserialize_with = "nullable")]
    pub creators: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub license_list_version: String,
}
