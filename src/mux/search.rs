//! Boundary search over cumulative weights.
//!
//! Source `i` owns the half-open draw interval
//! `[cumulative[i - 1], cumulative[i])`, with `cumulative[-1] = 0`. A draw
//! equal to a cumulative weight therefore belongs to the *next* source:
//!
//! ```text
//! index:       0   1   2   3   4   5
//! cumulative:  7  14  23  40  86  91
//!
//! draw 0..=6   -> 0
//! draw 7       -> 1
//! draw 22      -> 2
//! draw 23      -> 3
//! draw 90      -> 5
//! ```

/// Returns the index of the source that owns `draw`.
///
/// This is the smallest `i` with `cumulative[i] > draw`. `cumulative` must
/// be non-decreasing and `draw` must be below its last element.
///
/// # Panics
/// Panics if `cumulative` is empty.
///
/// # Complexity
/// O(log n)
///
/// # Examples
///
/// ```
/// use weighted_mux::mux::find_index;
///
/// let cumulative = [7, 14, 23, 40, 86, 91];
/// assert_eq!(find_index(&cumulative, 6), 0);
/// assert_eq!(find_index(&cumulative, 7), 1);
/// assert_eq!(find_index(&cumulative, 90), 5);
/// ```
pub fn find_index(cumulative: &[u64], draw: u64) -> usize {
    assert!(!cumulative.is_empty(), "cannot search empty cumulative weights");
    debug_assert!(draw < cumulative[cumulative.len() - 1]);

    // The first value owned by segment i is cumulative[i - 1], so the
    // owner of `draw` is the first segment whose bound reaches draw + 1.
    search_range(0, cumulative.len() - 1, draw + 1, cumulative)
}

/// Narrows `[start, end]` to the first index whose value is `>= target`.
fn search_range(mut start: usize, mut end: usize, target: u64, cumulative: &[u64]) -> usize {
    while end - start > 1 {
        let middle = start + (end - start) / 2;

        // An exact hit is the answer only if it starts a run of equal bounds.
        if cumulative[middle] == target && cumulative[middle - 1] < target {
            return middle;
        }

        if cumulative[middle] < target {
            start = middle;
        } else {
            end = middle;
        }
    }

    if cumulative[start] >= target {
        start
    } else {
        end
    }
}
