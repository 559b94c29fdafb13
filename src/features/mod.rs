//! # Features Module
//!
//! Turns symbol names observed in a binary into the features capability
//! rules match against. Generation deliberately over-produces spellings
//! (module-qualified and bare, with and without the ANSI/Wide suffix) so a
//! rule written against any of them still matches.

pub mod api;
pub mod extract;
pub mod import;
pub mod naming;
pub mod types;

// Re-export core types
pub use api::generate_api_features;
pub use extract::{
    extract_api_features, extract_features, extract_import_features, Extraction, ExtractionReport,
};
pub use import::generate_import_features;
pub use naming::{is_aw_variant, is_ordinal, strip_aw_suffix};
pub use types::{CallSite, Feature, FeatureSet, ImportEntry};
