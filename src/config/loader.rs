//! YAML loading.
//!
//! Loaders only parse. Call [`MuxConfig::validate`] (or build through
//! [`WeightedMultiplexer::from_config`](crate::mux::WeightedMultiplexer::from_config),
//! which validates) before trusting the result.

use super::types::MuxConfig;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::info;

/// Reads and parses a YAML configuration file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<MuxConfig> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_from_bytes(&raw)?;
    info!(
        path = %path.display(),
        sources = config.sources.len(),
        values = config.total_len(),
        "loaded multiplexer config"
    );
    Ok(config)
}

/// Parses a YAML configuration from a byte buffer.
pub fn load_from_bytes(raw: &[u8]) -> Result<MuxConfig> {
    Ok(serde_yaml::from_slice(raw)?)
}
