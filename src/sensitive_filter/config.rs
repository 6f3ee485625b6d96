// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the sensitive word filter

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::Result;

/// How a scan decides where a match ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Stop at the first terminal node on the walk. A longer pattern that
    /// extends an already-terminal shorter one is never reached.
    #[default]
    FirstTerminal,
    /// Keep walking and commit to the last terminal node reached
    Longest,
}

/// How a matched span is rendered by `mask`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaskingStrategy {
    #[default]
    Char, // One mask char per scalar, length preserving
    Redact,   // Replace with [REDACTED]
    Hash,     // Replace with hash (e.g., [HASH:abc123])
    Tokenize, // Replace with token (e.g., [TOKEN:xyz789])
    Remove,   // Remove entirely
}

impl MaskingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskingStrategy::Char => "char",
            MaskingStrategy::Redact => "redact",
            MaskingStrategy::Hash => "hash",
            MaskingStrategy::Tokenize => "tokenize",
            MaskingStrategy::Remove => "remove",
        }
    }

    /// Unknown names fall back to `Char`
    pub fn from_name(name: &str) -> Self {
        match name {
            "redact" => MaskingStrategy::Redact,
            "hash" => MaskingStrategy::Hash,
            "tokenize" => MaskingStrategy::Tokenize,
            "remove" => MaskingStrategy::Remove,
            _ => MaskingStrategy::Char,
        }
    }
}

/// Configuration for a [`SensitiveFilter`](super::SensitiveFilter)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    // Pattern sources
    pub patterns: Vec<String>,
    pub pattern_files: Vec<PathBuf>,

    // Stopper sources, one scalar per entry (empty entry = space)
    pub stoppers: Vec<String>,
    pub stopper_files: Vec<PathBuf>,
    pub use_default_stoppers: bool,

    // Matching
    pub match_mode: MatchMode,
    pub whitelist_patterns: Vec<String>,
    pub max_input_chars: Option<usize>,

    // Masking
    pub mask_strategy: MaskingStrategy,
    pub mask_char: char,
    pub redaction_text: String,

    pub log_detections: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            pattern_files: Vec::new(),

            stoppers: Vec::new(),
            stopper_files: Vec::new(),
            use_default_stoppers: false,

            match_mode: MatchMode::FirstTerminal,
            whitelist_patterns: Vec::new(),
            max_input_chars: None,

            mask_strategy: MaskingStrategy::Char,
            mask_char: '*',
            redaction_text: "[REDACTED]".to_string(),

            log_detections: false,
        }
    }
}

impl FilterConfig {
    /// Parse configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(feature = "python")]
mod py {
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    use super::{FilterConfig, MaskingStrategy, MatchMode};

    impl FilterConfig {
        /// Extract configuration from Python dict
        pub fn from_py_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
            let mut config = Self::default();

            // Helper macro to extract plain values
            macro_rules! extract {
                ($field:ident) => {
                    if let Some(value) = dict.get_item(stringify!($field))? {
                        config.$field = value.extract()?;
                    }
                };
            }

            extract!(patterns);
            extract!(pattern_files);
            extract!(stoppers);
            extract!(stopper_files);
            extract!(use_default_stoppers);
            extract!(whitelist_patterns);
            extract!(max_input_chars);
            extract!(mask_char);
            extract!(redaction_text);
            extract!(log_detections);

            if let Some(value) = dict.get_item("match_mode")? {
                let mode: String = value.extract()?;
                config.match_mode = match mode.as_str() {
                    "longest" => MatchMode::Longest,
                    _ => MatchMode::FirstTerminal,
                };
            }

            if let Some(value) = dict.get_item("mask_strategy")? {
                let strategy: String = value.extract()?;
                config.mask_strategy = MaskingStrategy::from_name(&strategy);
            }

            Ok(config)
        }
    }
}
