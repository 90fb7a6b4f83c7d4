use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredicateError>;

#[derive(Error, Debug)]
pub enum PredicateError {
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PredicateError {
    /// Whether the error came from malformed or mistyped input.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
