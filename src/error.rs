use thiserror::Error;

/// Errors that can occur during recipe extraction
///
/// Heuristic non-matches (no descriptor found, no time phrase, no tool
/// recognized) are normal outcomes and never surface here; only contract
/// violations on the input side do.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input was not valid JSON
    #[error("Invalid JSON metadata: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Input metadata did not have the required shape
    #[error("Invalid input shape: {0}")]
    InvalidShape(String),

    /// No recipe entity was found in the supplied metadata
    #[error("No recipe entity found in the metadata")]
    NoRecipeFound,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
