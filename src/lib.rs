//! Symbol feature generation for capability matching.
//!
//! Import-table entries and call-site API references are normalized into
//! `Feature`s that a rule engine compares against signature patterns.

pub mod bytes;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;

pub use bytes::{all_zeros, twos_complement, xor_bytes, MIN_STACKSTRING_LEN};
pub use config::{BudgetCaps, ExtractionConfig, MalformedPolicy};
pub use error::{FeatureError, Result};
pub use features::{
    extract_features, generate_api_features, generate_import_features, is_aw_variant,
    CallSite, Feature, FeatureSet, ImportEntry,
};
