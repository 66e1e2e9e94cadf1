//! Weighted sub-sources.
//!
//! A sub-source is one finite, ordered stream of values with a fixed
//! selection weight. The multiplexer talks to sources only through the
//! [`SubSource`] trait, so new kinds can be added without touching the
//! selection logic.
//!
//! # Key Types
//!
//! - [`SubSource`]: Capability trait (`has_more`, `take_next`, `weight`)
//! - [`SequenceSource`]: Cursor over an in-memory `Vec<i64>`

mod sequence;
mod types;

pub use sequence::SequenceSource;
pub use types::SubSource;
