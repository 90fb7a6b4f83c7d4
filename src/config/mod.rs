use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::EncodeFormat;
use crate::error::{PredicateError, Result};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".spdx-predicate.toml";

/// Top-level configuration from `.spdx-predicate.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub encode: EncodeConfig,
}

/// Encoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Output layout name; see [`EncodeFormat::from_str_lenient`].
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolved encode layout. Unknown names fall back to compact.
    pub fn encode_format(&self) -> EncodeFormat {
        match self.encode.format.as_deref() {
            None => EncodeFormat::default(),
            Some(name) => EncodeFormat::from_str_lenient(name).unwrap_or_else(|| {
                tracing::warn!(format = name, "unknown encode format, using compact");
                EncodeFormat::default()
            }),
        }
    }

    /// Like [`Config::encode_format`], but rejects unknown names.
    pub fn encode_format_strict(&self) -> Result<EncodeFormat> {
        match self.encode.format.as_deref() {
            None => Ok(EncodeFormat::default()),
            Some(name) => EncodeFormat::from_str_lenient(name)
                .ok_or_else(|| PredicateError::Config(format!("unknown encode format '{name}'"))),
        }
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# spdx-predicate configuration

[encode]
# Output layout: "compact" (canonical) or "pretty".
format = "compact"
"#
    }
}
