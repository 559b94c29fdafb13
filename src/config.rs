//! Configuration for batch feature extraction.
//!
//! Every field has a default, so `ExtractionConfig::default()` is a complete
//! configuration; embedders that load settings from disk deserialize it with
//! serde and override only what they need.

use serde::{Deserialize, Serialize};

use crate::bytes::MIN_STACKSTRING_LEN;

/// Master configuration for batch extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Input caps applied before generation.
    pub caps: BudgetCaps,
    /// What to do with API names that have more than one `.`.
    pub malformed: MalformedPolicy,
    /// Inputs at or above this length are expanded on the rayon pool.
    pub parallel_threshold: usize,
    /// Shortest stackstring the string-recovery stage should report.
    pub min_stackstring_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            caps: BudgetCaps::default(),
            malformed: MalformedPolicy::default(),
            parallel_threshold: 128,
            min_stackstring_len: MIN_STACKSTRING_LEN,
        }
    }
}

/// Budget caps for extraction inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetCaps {
    pub max_imports: usize,
    pub max_api_calls: usize,
}

impl Default for BudgetCaps {
    fn default() -> Self {
        BudgetCaps {
            max_imports: 5000,
            max_api_calls: 100_000,
        }
    }
}

/// Handling of API names with more than one module separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the batch with the first malformed name.
    #[default]
    Fail,
    /// Log and drop the call site, then continue.
    Skip,
}
