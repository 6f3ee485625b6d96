// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Sensitive word filter: owns the pattern index, stoppers and config

use regex::Regex;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

use super::config::FilterConfig;
use super::error::{FilterError, Result};
use super::loader::{self, LoadReport};
use super::masking;
use super::scanner::{MatchScanner, Span};
use super::stoppers::{LineOutcome, StopperSet};
use super::trie::PatternTrie;

/// Trie-based sensitive word filter.
///
/// Build it (insert patterns, load stoppers), then share it by reference:
/// all query methods take `&self` and may run from many threads at once.
///
/// # Example
/// ```
/// use sensitive_filter_rust::sensitive_filter::SensitiveFilter;
///
/// let mut filter = SensitiveFilter::new();
/// filter.bulk_load(["vx", "微信"]).unwrap();
/// filter.load_stoppers(['-', '@']);
///
/// assert!(filter.contains("加ＶＸ"));
/// assert_eq!(filter.mask("请加微@信"), "请加***");
/// ```
#[derive(Debug, Default)]
pub struct SensitiveFilter {
    trie: PatternTrie,
    stoppers: StopperSet,
    whitelist: Vec<Regex>,
    config: FilterConfig,
}

impl SensitiveFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter and load every source the config names
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        let whitelist = compile_whitelist(&config.whitelist_patterns)?;
        let mut filter = Self {
            trie: PatternTrie::new(),
            stoppers: if config.use_default_stoppers {
                StopperSet::with_defaults()
            } else {
                StopperSet::new()
            },
            whitelist,
            config,
        };

        let mut report = LoadReport::default();
        let patterns = std::mem::take(&mut filter.config.patterns);
        report.merge(filter.bulk_load(patterns.iter().map(String::as_str))?);
        filter.config.patterns = patterns;

        let stoppers = std::mem::take(&mut filter.config.stoppers);
        report.merge(filter.load_stopper_lines(stoppers.iter().map(String::as_str)));
        filter.config.stoppers = stoppers;

        for path in filter.config.pattern_files.clone() {
            report.merge(filter.load_patterns_file(&path)?);
        }
        for path in filter.config.stopper_files.clone() {
            report.merge(filter.load_stoppers_file(&path)?);
        }

        info!(
            patterns = filter.pattern_count(),
            stoppers = filter.stopper_count(),
            skipped = report.skipped_lines,
            "sensitive filter ready"
        );
        Ok(filter)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    // Build phase

    /// Insert one pattern. Returns `Ok(false)` if it was already present.
    pub fn insert(&mut self, pattern: &str) -> Result<bool> {
        self.trie.insert(pattern)
    }

    /// Insert many patterns. Stops at the first empty one; the patterns
    /// before it stay inserted.
    pub fn bulk_load<'p, I>(&mut self, patterns: I) -> Result<LoadReport>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut report = LoadReport::default();
        for pattern in patterns {
            if self.trie.insert(pattern)? {
                report.loaded += 1;
            } else {
                report.duplicates += 1;
            }
        }
        Ok(report)
    }

    /// Add stopper scalars
    pub fn load_stoppers<I: IntoIterator<Item = char>>(&mut self, stoppers: I) -> LoadReport {
        let mut report = LoadReport::default();
        for c in stoppers {
            if self.stoppers.insert(c) {
                report.loaded += 1;
            } else {
                report.duplicates += 1;
            }
        }
        report
    }

    /// Add stoppers from source lines (one scalar per line, empty = space)
    pub fn load_stopper_lines<'l, I>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut report = LoadReport::default();
        for line in lines {
            match self.stoppers.insert_line(line) {
                LineOutcome::Added => report.loaded += 1,
                LineOutcome::Duplicate => report.duplicates += 1,
                LineOutcome::Ignored => report.ignored += 1,
            }
        }
        report
    }

    pub fn load_patterns_file(&mut self, path: &Path) -> Result<LoadReport> {
        loader::load_patterns_from_path(&mut self.trie, path)
    }

    pub fn load_stoppers_file(&mut self, path: &Path) -> Result<LoadReport> {
        loader::load_stoppers_from_path(&mut self.stoppers, path)
    }

    // Query phase

    fn scanner(&self) -> MatchScanner<'_> {
        MatchScanner::new(&self.trie, &self.stoppers).with_mode(self.config.match_mode)
    }

    /// True if `text` contains any sensitive span
    pub fn contains(&self, text: &str) -> bool {
        if self.whitelist.is_empty() {
            self.scanner().contains(text)
        } else {
            !self.find_all(text).is_empty()
        }
    }

    /// Alias of [`contains`](Self::contains)
    pub fn search(&self, text: &str) -> bool {
        self.contains(text)
    }

    /// Ordered, non-overlapping sensitive spans in `text`
    pub fn find_all(&self, text: &str) -> Vec<Span> {
        let spans = if self.whitelist.is_empty() {
            self.scanner().find_all(text)
        } else {
            self.scanner()
                .find_all_accepted(text, |span| !self.is_whitelisted(&span.text))
        };

        if self.config.log_detections {
            for span in &spans {
                debug!(start = span.start, len = span.len, text = %span.text, "sensitive span");
            }
        }
        spans
    }

    /// True if `text` is a prefix of some pattern
    pub fn has_prefix(&self, text: &str) -> bool {
        self.scanner().has_prefix(text)
    }

    /// Masked copy of `text` using the configured strategy
    pub fn mask<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let spans = self.find_all(text);
        masking::mask_spans(text, &spans, &self.config)
    }

    /// Reject input longer than `max_input_chars`, if set
    pub fn check_input(&self, text: &str) -> Result<()> {
        if let Some(max) = self.config.max_input_chars {
            let len = text.chars().count();
            if len > max {
                return Err(FilterError::InputTooLong { len, max });
            }
        }
        Ok(())
    }

    pub fn pattern_count(&self) -> usize {
        self.trie.len()
    }

    pub fn stopper_count(&self) -> usize {
        self.stoppers.len()
    }

    fn is_whitelisted(&self, matched: &str) -> bool {
        self.whitelist.iter().any(|re| re.is_match(matched))
    }
}

fn compile_whitelist(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| FilterError::InvalidWhitelist {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
