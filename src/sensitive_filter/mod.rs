// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Sensitive word filter
//
// Trie-based detection and masking of configured words that tolerates:
// - Mixed case and full-width/half-width variants (see `normalize`)
// - Stopper characters interleaved inside a banned word

pub mod config;
pub mod detector;
pub mod error;
pub mod loader;
pub mod masking;
pub mod normalize;
#[cfg(feature = "python")]
pub mod python;
pub mod scanner;
pub mod stoppers;
pub mod trie;

pub use config::{FilterConfig, MaskingStrategy, MatchMode};
pub use detector::SensitiveFilter;
pub use error::{FilterError, Result};
pub use loader::LoadReport;
pub use normalize::normalize;
#[cfg(feature = "python")]
pub use python::SensitiveFilterRust;
pub use scanner::{MatchScanner, Span};
pub use stoppers::StopperSet;
pub use trie::PatternTrie;
