//! Import feature generation for import-table entries.

use super::naming::{is_ordinal, strip_aw_suffix};
use super::types::Feature;

/// Expand a `(dll, symbol)` import into every spelling a rule may use.
///
/// For `kernel32` / `CreateFileA` this yields:
///   - `kernel32.CreateFileA`
///   - `CreateFileA`
///   - `kernel32.CreateFile`
///   - `CreateFile`
///
/// Ordinal imports (`#12`) only appear module-qualified, since a bare ordinal
/// says nothing about which function was imported.
pub fn generate_import_features(dll: &str, symbol: &str, va: u64) -> Vec<(Feature, u64)> {
    let ordinal = is_ordinal(symbol);
    let mut out = Vec::with_capacity(4);

    out.push((Feature::import(format!("{dll}.{symbol}")), va));
    if !ordinal {
        out.push((Feature::import(symbol), va));
    }

    if let Some(base) = strip_aw_suffix(symbol) {
        out.push((Feature::import(format!("{dll}.{base}")), va));
        if !ordinal {
            out.push((Feature::import(base), va));
        }
    }

    out
}
