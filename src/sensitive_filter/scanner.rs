// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Stopper-aware trie scan producing non-overlapping sensitive spans

use serde::Serialize;

use super::config::MatchMode;
use super::normalize::normalize;
use super::stoppers::StopperSet;
use super::trie::PatternTrie;

/// A matched region of the scanned text, in scalar (char) offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub len: usize,
    /// Original (unnormalized) text covered by the span, stoppers included
    pub text: String,
}

impl Span {
    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Read-only view over a trie and stopper set that runs scans.
///
/// Scans never mutate the structures, so one trie may serve any number of
/// scanners on different threads.
#[derive(Debug, Clone, Copy)]
pub struct MatchScanner<'a> {
    trie: &'a PatternTrie,
    stoppers: &'a StopperSet,
    mode: MatchMode,
}

impl<'a> MatchScanner<'a> {
    pub fn new(trie: &'a PatternTrie, stoppers: &'a StopperSet) -> Self {
        Self {
            trie,
            stoppers,
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Length of the match beginning exactly at `start`, or 0.
    ///
    /// Stoppers are consumed without advancing in the trie. In
    /// `FirstTerminal` mode the walk commits to the first terminal it hits.
    pub fn match_length_at(&self, chars: &[char], start: usize) -> usize {
        let mut node = self.trie.root();
        let mut matched = 0;
        let mut len = 0;

        for &c in chars.iter().skip(start) {
            let c = normalize(c);
            if let Some(next) = node.child(c) {
                node = next;
                len += 1;
                if node.is_terminal() {
                    matched = len;
                    if self.mode == MatchMode::FirstTerminal {
                        break;
                    }
                }
            } else if self.stoppers.contains(c) {
                len += 1;
            } else {
                break;
            }
        }

        matched
    }

    /// All non-overlapping spans, ordered by start.
    ///
    /// After a hit the scan resumes right after the span, otherwise at the
    /// next scalar. Worst case O(n * m) for n scalars and longest pattern m.
    pub fn find_all(&self, text: &str) -> Vec<Span> {
        self.find_all_accepted(text, |_| true)
    }

    /// Like [`find_all`](Self::find_all), but a candidate rejected by
    /// `accept` does not consume its scalars: the scan moves on to the next
    /// scalar, so a match overlapping the rejected one can still be found.
    pub fn find_all_accepted<F>(&self, text: &str, accept: F) -> Vec<Span>
    where
        F: Fn(&Span) -> bool,
    {
        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let len = self.match_length_at(&chars, pos);
            if len > 0 {
                let span = Span {
                    start: pos,
                    len,
                    text: chars[pos..pos + len].iter().collect(),
                };
                if accept(&span) {
                    spans.push(span);
                    pos += len;
                    continue;
                }
            }
            pos += 1;
        }

        spans
    }

    /// True if any match exists; stops at the first one
    pub fn contains(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len()).any(|pos| self.match_length_at(&chars, pos) > 0)
    }

    /// True if `text` is a prefix of some inserted pattern (under folding).
    /// Stoppers are not skipped here.
    pub fn has_prefix(&self, text: &str) -> bool {
        self.trie.walk(text).is_some()
    }
}
