//! Run-scoped unique column labels.

use std::collections::BTreeSet;

/// Hands out column labels that are unique within one generation run.
///
/// A fresh allocator (or one that has been [`reset`](Self::reset)) must be
/// used for every run.
#[derive(Debug, Clone, Default)]
pub struct LabelAllocator {
    seen: BTreeSet<String>,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a label for instance `index` of `total` repetitions of `base`.
    ///
    /// With `total == 1` the base text is used unchanged; otherwise every
    /// instance is numbered as `base#index`. A label that is already taken
    /// gets `#2`, `#3`, ... appended until it is free. The counter only
    /// grows and the seen set is finite, so this always terminates.
    pub fn allocate(&mut self, base: &str, index: u32, total: u32) -> String {
        let candidate = if total > 1 {
            format!("{base}#{index}")
        } else {
            base.to_string()
        };

        let mut label = candidate.clone();
        let mut counter = 2u64;
        while self.seen.contains(&label) {
            label = format!("{candidate}#{counter}");
            counter += 1;
        }
        self.seen.insert(label.clone());
        label
    }

    /// Number of labels handed out since the last reset.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }
}
