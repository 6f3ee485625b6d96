// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Stopper scalars: fillers a scan may skip in the middle of a match

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::normalize::normalize;

/// Common punctuation used to break up banned words, ASCII and CJK
pub static DEFAULT_STOPPERS: Lazy<Vec<char>> = Lazy::new(|| {
    let ascii = "!., #$%&*()|?/@\"';[]{}+~-_=^<>`:\\";
    let cjk = "。、，！？；：“”‘’（）【】《》〈〉「」『』—…·～";
    ascii.chars().chain(cjk.chars()).collect()
});

/// Result of feeding one source line to [`StopperSet::insert_line`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Added,
    Duplicate,
    /// Two or more scalars; stoppers are single scalars
    Ignored,
}

/// Set of normalized scalars treated as transparent filler
#[derive(Debug, Default, Clone)]
pub struct StopperSet {
    chars: HashSet<char>,
}

impl StopperSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set preloaded with [`DEFAULT_STOPPERS`]
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.extend(DEFAULT_STOPPERS.iter().copied());
        set
    }

    /// Add a stopper; returns false if it was already present
    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(normalize(c))
    }

    /// Add a stopper from one line of a stopper source.
    ///
    /// An empty line stands for the space character. Lines holding more
    /// than one scalar are not stoppers and are left out.
    pub fn insert_line(&mut self, line: &str) -> LineOutcome {
        let mut chars = line.chars();
        let c = match (chars.next(), chars.next()) {
            (None, _) => ' ',
            (Some(c), None) => c,
            (Some(_), Some(_)) => return LineOutcome::Ignored,
        };
        if self.insert(c) {
            LineOutcome::Added
        } else {
            LineOutcome::Duplicate
        }
    }

    /// Membership test for an already-normalized scalar
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Extend<char> for StopperSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl FromIterator<char> for StopperSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
