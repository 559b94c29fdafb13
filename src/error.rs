//! Error types for symbol feature generation.
//!
//! All fallible operations in this crate return [`FeatureError`] through the
//! crate-wide [`Result`] alias. Violated preconditions surface immediately
//! instead of producing a partial feature set.

use thiserror::Error;

/// Main error type for feature generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// API name with more than one module separator
    #[error("Malformed API name {name:?}: expected at most one '.', found {separators}")]
    MalformedApiName { name: String, separators: usize },

    /// Two's-complement width outside 1..=64
    #[error("Invalid bit width: {bits} (expected 1..=64)")]
    InvalidBitWidth { bits: u32 },

    /// Value has bits set at or above the requested width
    #[error("Value {value:#x} does not fit in {bits} bits")]
    ValueOutOfRange { value: u64, bits: u32 },

    /// Resource limit exceeded
    #[error("Budget exceeded: {resource} ({used}/{limit})")]
    BudgetExceeded {
        resource: String,
        used: usize,
        limit: usize,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FeatureError {
    pub fn malformed_api_name<S: Into<String>>(name: S, separators: usize) -> Self {
        Self::MalformedApiName {
            name: name.into(),
            separators,
        }
    }
}

impl From<serde_json::Error> for FeatureError {
    fn from(err: serde_json::Error) -> Self {
        FeatureError::Serialization(err.to_string())
    }
}

/// Result type alias for feature generation
pub type Result<T> = std::result::Result<T, FeatureError>;
