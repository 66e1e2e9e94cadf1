//! Weighted, order-preserving multiplexer over finite integer sequences.
//!
//! Each sub-source carries a positive weight and a finite sequence of
//! values. The multiplexer repeatedly picks a live sub-source at random,
//! with probability proportional to its weight, and emits that source's
//! next value. A source drops out as soon as its sequence is exhausted;
//! the multiplexer is drained once every source has dropped out.
//!
//! - **Sources** ([`source`]): the [`SubSource`](source::SubSource)
//!   capability trait and the in-memory [`SequenceSource`](source::SequenceSource).
//! - **Multiplexer** ([`mux`]): cumulative-weight selection with a
//!   boundary-aware binary search and swap-remove eviction.
//! - **Randomness** ([`random`]): injectable draw sources, seeded or scripted.
//! - **Configuration** ([`config`]): serde schema, validation, YAML loading.
//!
//! # Example
//!
//! ```
//! use weighted_mux::config::MuxConfig;
//! use weighted_mux::mux::WeightedMultiplexer;
//!
//! let config = MuxConfig::new()
//!     .with_source(9, vec![1, 2, 3])
//!     .with_source(1, vec![4, 5])
//!     .with_seed(42);
//!
//! let mut mux = WeightedMultiplexer::from_config(&config)?;
//! let mut out = Vec::new();
//! while mux.has_next() {
//!     out.push(mux.try_next()?);
//! }
//! out.sort();
//! assert_eq!(out, vec![1, 2, 3, 4, 5]);
//! # Ok::<(), weighted_mux::Error>(())
//! ```
//!
//! # Concurrency
//!
//! Single-threaded by design. Every pick mutates the multiplexer and there
//! is no internal locking; wrap it in a mutex for shared use.

pub mod config;
pub mod error;
pub mod mux;
pub mod random;
pub mod source;

pub use error::{Error, Result};
