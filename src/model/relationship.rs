use serde::{Deserialize, Serialize};

use super::nullable;

/// Directed, labeled edge between two document elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Relationship {
    #[serde(deserialize_with = "nullable")]
    pub spdx_element_id: String,
    #[serde(deserialize_with = "nullable")]
    pub related_spdx_element: String,
    #[serde(deserialize_with = "nullable")]
    pub relationship_type: String,
}

impl Relationship {
    pub const DESCRIBES: &'static str = "DESCRIBES";

    pub fn new(
        spdx_element_id: impl Into<String>,
        relationship_type: impl Into<String>,
        related_spdx_element: impl Into<String>,
    ) -> Self {
        Self {
            spdx_element_id: spdx_element_id.into(),
            related_spdx_element: related_spdx_element.into(),
            relationship_type: relationship_type.into(),
        }
    }
}
