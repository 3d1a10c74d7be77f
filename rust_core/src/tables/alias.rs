//! Player alias table for informal name resolution.
//!
//! Flattens `{ "Canonical": ["variant", ...] }` into variant -> canonical,
//! with every canonical name also mapped to itself.

use super::{open_file, DataResult};
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::io::{BufReader, Read};
use std::path::Path;

/// Variant -> canonical name table.
///
/// Variants are case-folded on insertion. Re-inserting a variant overwrites
/// its canonical name but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    /// (variant, canonical) in insertion order
    entries: Vec<(String, String)>,
    /// variant -> position in `entries`
    index: FxHashMap<String, usize>,
}

impl AliasTable {
    /// Create a new empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from canonical -> variants pairs, in the order given.
    pub fn from_variations<I, S, V>(variations: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        let mut table = Self::new();
        for (canonical, variants) in variations {
            let canonical = canonical.as_ref();
            for variant in variants {
                table.insert(variant.as_ref(), canonical);
            }
            table.insert(canonical, canonical);
        }
        table
    }

    /// Parse the alias JSON object from a reader.
    ///
    /// Canonical names are applied in file order (serde_json `preserve_order`),
    /// so on a variant collision the group later in the file wins.
    pub fn from_json_reader<R: Read>(reader: R) -> DataResult<Self> {
        let data: Map<String, Value> = serde_json::from_reader(reader)?;
        let mut groups: Vec<(String, Vec<String>)> = Vec::with_capacity(data.len());
        for (canonical, variants) in data {
            groups.push((canonical, serde_json::from_value(variants)?));
        }
        Ok(Self::from_variations(groups))
    }

    /// Load from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let file = open_file(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Insert a mapping. The variant is case-folded.
    pub fn insert(&mut self, variant: &str, canonical: &str) {
        let key = variant.to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = canonical.to_string(),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, canonical.to_string()));
            }
        }
    }

    /// Canonical name for a variant (case-insensitive).
    pub fn resolve(&self, variant: &str) -> Option<&str> {
        self.index
            .get(&variant.to_lowercase())
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Canonical name if known, otherwise the input unchanged.
    pub fn normalize(&self, name: &str) -> String {
        self.resolve(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.to_string())
    }

    /// All variant keys, in insertion order.
    pub fn variants(&self) -> Vec<&str> {
        self.entries.iter().map(|(v, _)| v.as_str()).collect()
    }

    /// Iterate (variant, canonical) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, c)| (v.as_str(), c.as_str()))
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
