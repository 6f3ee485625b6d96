// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for the sensitive word filter

use thiserror::Error;

/// Errors raised while building or configuring a filter.
///
/// Scanning and masking never fail; only loading and configuration do.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A pattern or stopper source could not be read.
    ///
    /// Entries read before the failure stay loaded.
    #[error("failed to load '{source_id}': {source}")]
    Load {
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    /// An empty pattern would match a zero-length span everywhere
    #[error("empty pattern cannot be inserted")]
    EmptyPattern,

    /// Whitelist regex failed to compile
    #[error("invalid whitelist pattern '{pattern}': {source}")]
    InvalidWhitelist {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration could not be parsed
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Input exceeds the configured scan bound
    #[error("input of {len} chars exceeds the limit of {max}")]
    InputTooLong { len: usize, max: usize },
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
