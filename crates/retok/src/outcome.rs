/// Result of searching the unconsumed window for a pattern.
///
/// Offsets are byte positions relative to the window start. Asking a
/// [`NotFound`](SearchOutcome::NotFound) outcome for its bounds is an internal
/// contract violation and panics; there is no sentinel value to misread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    Found { start: usize, end: usize },
    NotFound,
}

impl SearchOutcome {
    pub(crate) fn found(start: usize, end: usize) -> Self {
        assert!(start <= end, "match bounds require start <= end");
        Self::Found { start, end }
    }

    pub(crate) fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub(crate) fn start(self) -> usize {
        match self {
            Self::Found { start, .. } => start,
            Self::NotFound => panic!("start() queried on a NotFound outcome"),
        }
    }

    pub(crate) fn end(self) -> usize {
        match self {
            Self::Found { end, .. } => end,
            Self::NotFound => panic!("end() queried on a NotFound outcome"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchOutcome;

    #[test]
    fn found_reports_bounds() {
        let outcome = SearchOutcome::found(2, 5);
        assert!(outcome.is_found());
        assert_eq!(outcome.start(), 2);
        assert_eq!(outcome.end(), 5);
    }

    #[test]
    #[should_panic(expected = "NotFound")]
    fn not_found_start_is_a_contract_violation() {
        let _ = SearchOutcome::NotFound.start();
    }

    #[test]
    #[should_panic(expected = "NotFound")]
    fn not_found_end_is_a_contract_violation() {
        let _ = SearchOutcome::NotFound.end();
    }

    #[test]
    #[should_panic(expected = "start <= end")]
    fn inverted_bounds_are_rejected() {
        let _ = SearchOutcome::found(3, 1);
    }
}
