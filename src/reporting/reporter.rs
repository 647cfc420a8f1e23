use crate::reporting::model::{Finding, ScanReport};
use crate::xss::probe_rank;
use std::collections::BTreeMap;

/// Folds findings into a report. Owned by a single task; workers never touch it.
#[derive(Default)]
pub struct Reporter {
    results: BTreeMap<String, BTreeMap<String, Vec<char>>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        if finding.characters.is_empty() {
            return;
        }

        let chars = self
            .results
            .entry(finding.url)
            .or_default()
            .entry(finding.parameter)
            .or_default();

        for c in finding.characters {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        chars.sort_by_key(|&c| probe_rank(c));
    }

    pub fn finish(self) -> ScanReport {
        ScanReport::new(self.results)
    }
}
