//! Import collection for generated files.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted.
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_order() {
        let mut imports = ImportCollector::new();
        imports.add("serde", "Serialize");
        imports.add("chrono", "NaiveDateTime");
        imports.add("serde", "Deserialize");
        imports.add("serde", "Serialize");

        let collected: Vec<(&str, Vec<&str>)> = imports
            .iter()
            .map(|(m, s)| (m, s.iter().map(String::as_str).collect()))
            .collect();
        assert_eq!(
            collected,
            vec![
                ("serde", vec!["Deserialize", "Serialize"]),
                ("chrono", vec!["NaiveDateTime"]),
            ]
        );
        assert!(imports.has_symbol("chrono", "NaiveDateTime"));
        assert!(!imports.has_symbol("chrono", "NaiveDate"));
    }

    #[test]
    fn test_empty() {
        assert!(ImportCollector::new().is_empty());
    }
}
