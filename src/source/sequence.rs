//! Sub-source backed by a fixed in-memory sequence.

use super::types::SubSource;

/// A weighted cursor over an owned sequence of values.
///
/// The sequence is never mutated; only the read offset advances.
///
/// # Examples
///
/// ```
/// use weighted_mux::source::{SequenceSource, SubSource};
///
/// let mut src = SequenceSource::new(3, vec![10, 20]);
/// assert_eq!(src.take_next(), 10);
/// assert_eq!(src.take_next(), 20);
/// assert!(!src.has_more());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    sequence: Vec<i64>,
    offset: usize,
    weight: u64,
}

impl SequenceSource {
    pub fn new(weight: u64, sequence: Vec<i64>) -> Self {
        Self {
            sequence,
            offset: 0,
            weight,
        }
    }

    /// Index of the next element to be read.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The full underlying sequence, including already-read elements.
    pub fn sequence(&self) -> &[i64] {
        &self.sequence
    }
}

impl SubSource for SequenceSource {
    fn has_more(&self) -> bool {
        self.offset < self.sequence.len()
    }

    /// # Panics
    /// Panics if the sequence is exhausted.
    fn take_next(&mut self) -> i64 {
        assert!(self.has_more(), "take_next called on an exhausted source");
        let value = self.sequence[self.offset];
        self.offset += 1;
        value
    }

    fn weight(&self) -> u64 {
        self.weight
    }

    fn remaining(&self) -> usize {
        self.sequence.len() - self.offset
    }
}
