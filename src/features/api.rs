//! API feature generation for call-site references.

use super::naming::strip_aw_suffix;
use super::types::Feature;
use crate::error::{FeatureError, Result};

/// Expand a call-site API name into every spelling a rule may use.
///
/// For `kernel32.CreateFileA` this yields:
///   - `kernel32.CreateFileA`
///   - `kernel32.CreateFile`
///   - `CreateFileA`
///   - `CreateFile`
///
/// Names with more than one `.` are rejected before anything is generated.
/// Output is not deduplicated.
pub fn generate_api_features(apiname: &str, va: u64) -> Result<Vec<(Feature, u64)>> {
    let separators = apiname.matches('.').count();
    if separators > 1 {
        return Err(FeatureError::malformed_api_name(apiname, separators));
    }

    let mut out = Vec::with_capacity(4);
    out.push((Feature::api(apiname), va));

    if let Some(base) = strip_aw_suffix(apiname) {
        out.push((Feature::api(base), va));
    }

    // Strip the module so rules that name only the import still match.
    if let Some((_module, symbol)) = apiname.split_once('.') {
        out.push((Feature::api(symbol), va));

        if let Some(base) = strip_aw_suffix(symbol) {
            out.push((Feature::api(base), va));
        }
    }

    Ok(out)
}
