//! Feature types and the set-semantics collector used by rule matching.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::Result;

/// A symbolic feature observed in a binary.
///
/// Identity is the (kind, name) pair; the address a feature was seen at is
/// carried next to it and never part of equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Feature {
    /// Function referenced at a call site
    Api(String),
    /// Import-table entry, either `module.symbol` or bare `symbol`
    Import(String),
}

impl Feature {
    pub fn api<S: Into<String>>(name: S) -> Self {
        Feature::Api(name.into())
    }

    pub fn import<S: Into<String>>(name: S) -> Self {
        Feature::Import(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Feature::Api(name) | Feature::Import(name) => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Feature::Api(_) => "api",
            Feature::Import(_) => "import",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.name())
    }
}

/// Call-site reference supplied by the disassembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub api: String,
    pub va: u64,
}

impl CallSite {
    pub fn new<S: Into<String>>(api: S, va: u64) -> Self {
        Self { api: api.into(), va }
    }
}

/// Import-table entry supplied by the binary loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEntry {
    pub dll: String,
    pub symbol: String,
    pub va: u64,
}

impl ImportEntry {
    pub fn new<D: Into<String>, S: Into<String>>(dll: D, symbol: S, va: u64) -> Self {
        Self {
            dll: dll.into(),
            symbol: symbol.into(),
            va,
        }
    }
}

/// Features mapped to every address they were observed at.
///
/// Duplicate `(Feature, va)` pairs collapse on insert. Ordered maps keep
/// iteration and JSON output stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<FeatureEntry>", from = "Vec<FeatureEntry>")]
pub struct FeatureSet {
    features: BTreeMap<Feature, BTreeSet<u64>>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. Returns false when the pair was already present.
    pub fn insert(&mut self, feature: Feature, va: u64) -> bool {
        self.features.entry(feature).or_default().insert(va)
    }

    pub fn contains(&self, feature: &Feature) -> bool {
        self.features.contains_key(feature)
    }

    pub fn contains_at(&self, feature: &Feature, va: u64) -> bool {
        self.features
            .get(feature)
            .is_some_and(|vas| vas.contains(&va))
    }

    pub fn addresses(&self, feature: &Feature) -> Option<&BTreeSet<u64>> {
        self.features.get(feature)
    }

    /// Number of distinct features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of distinct `(Feature, va)` pairs.
    pub fn pair_count(&self) -> usize {
        self.features.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Feature, &BTreeSet<u64>)> {
        self.features.iter()
    }

    /// Fold another set into this one.
    pub fn merge(&mut self, other: FeatureSet) {
        for (feature, vas) in other.features {
            self.features.entry(feature).or_default().extend(vas);
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Serialized form of one feature. JSON object keys must be strings, so the
/// set is written as a list of entries.
#[derive(Serialize, Deserialize)]
struct FeatureEntry {
    feature: Feature,
    addresses: Vec<u64>,
}

impl From<FeatureSet> for Vec<FeatureEntry> {
    fn from(set: FeatureSet) -> Self {
        set.features
            .into_iter()
            .map(|(feature, vas)| FeatureEntry {
                feature,
                addresses: vas.into_iter().collect(),
            })
            .collect()
    }
}

impl From<Vec<FeatureEntry>> for FeatureSet {
    fn from(entries: Vec<FeatureEntry>) -> Self {
        let mut set = FeatureSet::new();
        for entry in entries {
            set.features
                .entry(entry.feature)
                .or_default()
                .extend(entry.addresses);
        }
        set
    }
}

impl Extend<(Feature, u64)> for FeatureSet {
    fn extend<I: IntoIterator<Item = (Feature, u64)>>(&mut self, iter: I) {
        for (feature, va) in iter {
            self.insert(feature, va);
        }
    }
}

impl FromIterator<(Feature, u64)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (Feature, u64)>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        set.extend(iter);
        set
    }
}
