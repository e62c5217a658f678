use std::collections::HashMap;

use regex::Regex;

use crate::outcome::SearchOutcome;

/// Memoizes the most recent definitive search outcome per delimiter pattern.
///
/// Entries are valid only while the window content is unchanged, so callers
/// clear the whole map whenever the cursor advances or new data is appended.
/// Finer-grained invalidation is possible but not worth the bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct MatchCache {
    entries: HashMap<String, SearchOutcome>,
}

impl MatchCache {
    pub(crate) fn lookup(&self, pattern: &Regex) -> Option<SearchOutcome> {
        self.entries.get(pattern.as_str()).copied()
    }

    pub(crate) fn record(&mut self, pattern: &Regex, outcome: SearchOutcome) {
        self.entries.insert(pattern.as_str().to_owned(), outcome);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
