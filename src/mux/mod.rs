//! Weighted multiplexing.
//!
//! [`WeightedMultiplexer`] owns a set of [`SubSource`](crate::source::SubSource)s
//! and a parallel vector of cumulative weights. Each pick draws a uniform
//! integer in `[0, total_weight)`, locates its owner with [`find_index`],
//! and emits that source's next value. Exhausted sources are evicted by
//! swap-remove followed by a full rebuild of the cumulative weights.
//!
//! # Complexity
//!
//! - Pick: O(log n)
//! - Eviction: O(n), at most once per source over a full drain

mod multiplexer;
mod search;

pub use multiplexer::WeightedMultiplexer;
pub use search::find_index;
