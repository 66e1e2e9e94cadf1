//! Capability trait for weighted sub-sources.

/// One weighted, finite, ordered stream of values.
///
/// The multiplexer depends only on this trait. A source is consulted for
/// its weight whenever cumulative weights are rebuilt, and is evicted the
/// moment [`has_more`](Self::has_more) turns false.
///
/// # Contract
///
/// - [`weight`](Self::weight) is fixed for the lifetime of the source and
///   must be at least 1.
/// - [`take_next`](Self::take_next) is only called while `has_more()` is
///   true. Implementations may panic otherwise.
/// - [`remaining`](Self::remaining) is zero exactly when `has_more()` is
///   false.
pub trait SubSource {
    /// Returns true while unread elements remain.
    fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Returns the next element and advances the read cursor.
    fn take_next(&mut self) -> i64;

    /// Selection weight of this source.
    fn weight(&self) -> u64;

    /// Number of unread elements.
    fn remaining(&self) -> usize;
}

impl<S: SubSource + ?Sized> SubSource for Box<S> {
    fn has_more(&self) -> bool {
        (**self).has_more()
    }

    fn take_next(&mut self) -> i64 {
        (**self).take_next()
    }

    fn weight(&self) -> u64 {
        (**self).weight()
    }

    fn remaining(&self) -> usize {
        (**self).remaining()
    }
}
