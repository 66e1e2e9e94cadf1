//! Weighted multiplexer over exhaustible sub-sources.

use super::search::find_index;
use crate::config::MuxConfig;
use crate::error::{Error, Result};
use crate::random::{DrawSource, RngDraws};
use crate::source::{SequenceSource, SubSource};
use rand::rngs::StdRng;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Emits values from a set of weighted sources, picking a source at random
/// for every value with probability proportional to its weight.
///
/// Values from the same source come out in their original order. A source
/// is evicted as soon as its last value is emitted, so the remaining
/// sources share the draw range from then on. Once every source is
/// exhausted the multiplexer is drained for good.
///
/// `sources` and `cumulative` are index-aligned. Their order carries no
/// meaning and changes on eviction.
///
/// # Thread safety
///
/// There is no internal locking. Every pick mutates the multiplexer, so
/// shared use needs an external mutex held across each
/// `has_next`/`try_next` pair.
///
/// # Examples
///
/// ```
/// use weighted_mux::mux::WeightedMultiplexer;
/// use weighted_mux::random::{create_rng, RngDraws};
/// use weighted_mux::source::SequenceSource;
///
/// let sources = vec![
///     SequenceSource::new(1, vec![1, 2]),
///     SequenceSource::new(1, vec![3]),
/// ];
/// let mux = WeightedMultiplexer::new(sources, RngDraws::new(create_rng(42))).unwrap();
///
/// let mut out: Vec<i64> = mux.collect();
/// out.sort();
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedMultiplexer<S = SequenceSource, D = RngDraws<StdRng>> {
    sources: Vec<S>,
    /// `cumulative[i]` = sum of weights of `sources[0..=i]`.
    cumulative: Vec<u64>,
    total_weight: u64,
    remaining: usize,
    draws: D,
}

impl WeightedMultiplexer {
    /// Builds a multiplexer from a configuration.
    ///
    /// The configuration is validated first. Sources keep their configured
    /// order, and the generator is seeded from `config.seed` (a random seed
    /// when `None`).
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_mux::config::MuxConfig;
    /// use weighted_mux::mux::WeightedMultiplexer;
    ///
    /// let config = MuxConfig::new()
    ///     .with_source(9, vec![1, 1, 1])
    ///     .with_source(1, vec![2])
    ///     .with_seed(7);
    /// let mux = WeightedMultiplexer::from_config(&config).unwrap();
    /// assert_eq!(mux.len(), 4);
    /// ```
    pub fn from_config(config: &MuxConfig) -> Result<Self> {
        config.validate()?;
        let sources = config
            .sources
            .iter()
            .map(|s| SequenceSource::new(s.weight, s.sequence.clone()))
            .collect();
        Self::new(sources, RngDraws::from_seed(config.seed))
    }
}

impl<S: SubSource, D: DrawSource> WeightedMultiplexer<S, D> {
    /// Builds a multiplexer over `sources`, in the given order.
    ///
    /// Every source must have a weight of at least 1 and at least one
    /// element, and the total weight must fit in a `u64`.
    pub fn new(sources: Vec<S>, draws: D) -> Result<Self> {
        let mut cumulative = Vec::with_capacity(sources.len());
        let mut total_weight = 0u64;
        let mut remaining = 0usize;

        for (index, source) in sources.iter().enumerate() {
            if source.weight() == 0 {
                return Err(Error::InvalidWeight { index });
            }
            if !source.has_more() {
                return Err(Error::EmptySequence { index });
            }
            total_weight = total_weight
                .checked_add(source.weight())
                .ok_or(Error::WeightOverflow)?;
            cumulative.push(total_weight);
            remaining += source.remaining();
        }

        debug!(
            sources = sources.len(),
            total_weight, remaining, "built weighted multiplexer"
        );

        Ok(Self {
            sources,
            cumulative,
            total_weight,
            remaining,
            draws,
        })
    }

    /// Returns true while at least one live source remains.
    pub fn has_next(&self) -> bool {
        !self.sources.is_empty() && self.total_weight > 0
    }

    /// Emits the next value.
    ///
    /// Returns [`Error::Drained`] if called after the last value has been
    /// emitted. That is a caller bug, not a transient condition.
    ///
    /// # Complexity
    /// O(log n) per pick, plus an O(n) rebuild when a source is evicted.
    pub fn try_next(&mut self) -> Result<i64> {
        if !self.has_next() {
            return Err(Error::Drained);
        }

        let draw = self.draws.draw(self.total_weight);
        let index = find_index(&self.cumulative, draw);
        trace!(draw, index, "picked source");

        let source = &mut self.sources[index];
        let value = source.take_next();
        debug_assert!(self.remaining > 0, "source under-reported remaining()");
        self.remaining -= 1;

        if !source.has_more() {
            self.evict(index);
        }

        Ok(value)
    }

    /// Sum of the weights of all live sources.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of live (non-exhausted) sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Cumulative weights, index-aligned with the live sources.
    pub fn cumulative_weights(&self) -> &[u64] {
        &self.cumulative
    }

    /// Total number of values not yet emitted.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Removes the exhausted source at `index` and rebuilds the
    /// cumulative weights.
    fn evict(&mut self, index: usize) {
        if self.sources.len() == 1 {
            self.sources.clear();
            self.cumulative.clear();
            self.total_weight = 0;
            debug!("last source exhausted, multiplexer drained");
            return;
        }

        // Order is irrelevant: the rebuild below re-derives every bound.
        self.sources.swap_remove(index);
        self.cumulative.pop();
        self.recalculate();

        debug!(
            index,
            live = self.sources.len(),
            total_weight = self.total_weight,
            "evicted exhausted source"
        );
    }

    fn recalculate(&mut self) {
        self.total_weight = 0;
        for (bound, source) in self.cumulative.iter_mut().zip(&self.sources) {
            self.total_weight += source.weight();
            *bound = self.total_weight;
        }
    }
}

impl<S: SubSource, D: DrawSource> Iterator for WeightedMultiplexer<S, D> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: SubSource, D: DrawSource> ExactSizeIterator for WeightedMultiplexer<S, D> {}

impl<S: SubSource, D: DrawSource> FusedIterator for WeightedMultiplexer<S, D> {}
