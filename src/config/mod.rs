//! Multiplexer configuration.
//!
//! [`MuxConfig`] lists the weighted sources and an optional seed. It can be
//! built in code or parsed from YAML with [`load_from_file`] /
//! [`load_from_bytes`].

mod loader;
mod types;

pub use loader::{load_from_bytes, load_from_file};
pub use types::{MuxConfig, SourceConfig};
