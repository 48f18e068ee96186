//! Count elision.
//!
//! When the fetched window is short, the total is already implied by the window and the
//! count query can be skipped.

/// How the total for a page is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalStrategy {
    /// The total is implied by the window.
    Known(u64),
    /// A separate count query is required.
    NeedsQuery,
}

/// Decides the total strategy for a window of `window` rows fetched at `offset` with
/// `limit`.
///
/// | offset | window              | result                 |
/// |--------|---------------------|------------------------|
/// | 0      | `< limit`           | `Known(window)`        |
/// | `> 0`  | `1 ..< limit`       | `Known(offset+window)` |
/// | any    | otherwise           | `NeedsQuery`           |
///
/// An empty window past the first row needs the count: the offset may lie beyond the
/// last record.
pub fn total_strategy(offset: u64, limit: u64, window: u64) -> TotalStrategy {
    if window >= limit {
        return TotalStrategy::NeedsQuery;
    }
    if offset == 0 {
        return TotalStrategy::Known(window);
    }
    if window > 0 {
        return TotalStrategy::Known(offset + window);
    }
    TotalStrategy::NeedsQuery
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        let cases = [
            // (offset, limit, window, expected)
            (0, 3, 0, TotalStrategy::Known(0)),
            (0, 3, 2, TotalStrategy::Known(2)),
            (0, 3, 3, TotalStrategy::NeedsQuery),
            (3, 3, 1, TotalStrategy::Known(4)),
            (3, 3, 3, TotalStrategy::NeedsQuery),
            (3, 3, 0, TotalStrategy::NeedsQuery),
            (100, 10, 0, TotalStrategy::NeedsQuery),
        ];
        for (offset, limit, window, expected) in cases {
            assert_eq!(
                total_strategy(offset, limit, window),
                expected,
                "offset={} limit={} window={}",
                offset,
                limit,
                window
            );
        }
    }
}
