//! Batch extraction over loader-supplied call sites and import entries.
//!
//! Inputs are capped by [`BudgetCaps`], expanded through the generators
//! (on the rayon pool for large inputs), and folded into a [`FeatureSet`].
//! Folding happens in input order, so the result does not depend on which
//! path ran.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::api::generate_api_features;
use super::import::generate_import_features;
use super::types::{CallSite, Feature, FeatureSet, ImportEntry};
use crate::config::{ExtractionConfig, MalformedPolicy};
use crate::error::{FeatureError, Result};

/// Bookkeeping for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub api_calls_total: usize,
    pub api_calls_examined: usize,
    pub imports_total: usize,
    pub imports_examined: usize,
    /// API names dropped under [`MalformedPolicy::Skip`], in input order.
    pub skipped_malformed: Vec<String>,
}

impl ExtractionReport {
    pub fn hit_api_limit(&self) -> bool {
        self.api_calls_examined < self.api_calls_total
    }

    pub fn hit_import_limit(&self) -> bool {
        self.imports_examined < self.imports_total
    }

    /// Budget overruns as errors, for callers that surface them.
    pub fn budget_errors(&self) -> Vec<FeatureError> {
        let mut out = Vec::new();
        if self.hit_api_limit() {
            out.push(FeatureError::BudgetExceeded {
                resource: "api_calls".to_string(),
                used: self.api_calls_total,
                limit: self.api_calls_examined,
            });
        }
        if self.hit_import_limit() {
            out.push(FeatureError::BudgetExceeded {
                resource: "imports".to_string(),
                used: self.imports_total,
                limit: self.imports_examined,
            });
        }
        out
    }

    fn absorb(&mut self, other: ExtractionReport) {
        self.api_calls_total += other.api_calls_total;
        self.api_calls_examined += other.api_calls_examined;
        self.imports_total += other.imports_total;
        self.imports_examined += other.imports_examined;
        self.skipped_malformed.extend(other.skipped_malformed);
    }
}

/// Features plus the report describing how they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub features: FeatureSet,
    pub report: ExtractionReport,
}

/// Expand call-site references into API features.
pub fn extract_api_features(calls: &[CallSite], cfg: &ExtractionConfig) -> Result<Extraction> {
    let limit = calls.len().min(cfg.caps.max_api_calls);
    let batch = &calls[..limit];
    if limit < calls.len() {
        warn!(
            total = calls.len(),
            limit,
            "API call budget exhausted; truncating input"
        );
    }

    let expanded: Vec<Result<Vec<(Feature, u64)>>> = if batch.len() >= cfg.parallel_threshold {
        batch
            .par_iter()
            .map(|c| generate_api_features(&c.api, c.va))
            .collect()
    } else {
        batch
            .iter()
            .map(|c| generate_api_features(&c.api, c.va))
            .collect()
    };

    let mut out = Extraction::default();
    for (call, result) in batch.iter().zip(expanded) {
        match result {
            Ok(pairs) => out.features.extend(pairs),
            Err(err) => match cfg.malformed {
                MalformedPolicy::Fail => return Err(crate::log_error!(err, "extract_api_features")),
                MalformedPolicy::Skip => {
                    warn!(api = %call.api, va = call.va, error = %err, "Skipping malformed API name");
                    out.report.skipped_malformed.push(call.api.clone());
                }
            },
        }
    }

    out.report.api_calls_total = calls.len();
    out.report.api_calls_examined = limit;
    debug!(
        calls = limit,
        features = out.features.len(),
        skipped = out.report.skipped_malformed.len(),
        "API features extracted"
    );
    Ok(out)
}

/// Expand import-table entries into import features.
pub fn extract_import_features(imports: &[ImportEntry], cfg: &ExtractionConfig) -> Extraction {
    let limit = imports.len().min(cfg.caps.max_imports);
    let batch = &imports[..limit];
    if limit < imports.len() {
        warn!(
            total = imports.len(),
            limit,
            "Import budget exhausted; truncating input"
        );
    }

    let expanded: Vec<Vec<(Feature, u64)>> = if batch.len() >= cfg.parallel_threshold {
        batch
            .par_iter()
            .map(|e| generate_import_features(&e.dll, &e.symbol, e.va))
            .collect()
    } else {
        batch
            .iter()
            .map(|e| generate_import_features(&e.dll, &e.symbol, e.va))
            .collect()
    };

    let mut out = Extraction::default();
    out.features.extend(expanded.into_iter().flatten());
    out.report.imports_total = imports.len();
    out.report.imports_examined = limit;
    debug!(
        imports = limit,
        features = out.features.len(),
        "Import features extracted"
    );
    out
}

/// Extract API and import features from one binary's symbol data.
pub fn extract_features(
    calls: &[CallSite],
    imports: &[ImportEntry],
    cfg: &ExtractionConfig,
) -> Result<Extraction> {
    let span = crate::span_trace!(
        "extract_features",
        calls = calls.len(),
        imports = imports.len()
    );
    let _guard = span.enter();

    let mut out = extract_import_features(imports, cfg);
    let api = extract_api_features(calls, cfg)?;
    out.features.merge(api.features);
    out.report.absorb(api.report);
    Ok(out)
}
