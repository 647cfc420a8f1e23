use serde::Serialize;
use std::collections::BTreeMap;

/// One reflected parameter with at least one character passing through unfiltered.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Finding {
    pub url: String,         // normalized input URL
    pub parameter: String,
    pub characters: Vec<char>, // probe order
}

/// Findings grouped by URL, then parameter.
///
/// Produced once by `Reporter::finish` and never mutated afterwards.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ScanReport {
    results: BTreeMap<String, BTreeMap<String, Vec<char>>>,
}

impl ScanReport {
    pub(crate) fn new(results: BTreeMap<String, BTreeMap<String, Vec<char>>>) -> Self {
        Self { results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn url_count(&self) -> usize {
        self.results.len()
    }

    pub fn parameter_count(&self) -> usize {
        self.results.values().map(BTreeMap::len).sum()
    }

    pub fn urls(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, Vec<char>>)> {
        self.results.iter().map(|(url, params)| (url.as_str(), params))
    }

    #[cfg(test)]
    pub fn characters(&self, url: &str, parameter: &str) -> Option<&[char]> {
        self.results
            .get(url)
            .and_then(|params| params.get(parameter))
            .map(Vec::as_slice)
    }
}
