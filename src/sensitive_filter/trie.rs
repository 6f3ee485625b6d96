// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Prefix tree of normalized pattern scalars

use std::collections::HashMap;

use super::error::{FilterError, Result};
use super::normalize::normalize;

/// A trie node. Children are owned exclusively, so dropping the root
/// releases the whole tree.
#[derive(Debug, Default, Clone)]
pub struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

impl Node {
    /// Transition for an already-normalized scalar
    #[inline]
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// True when the path from the root to this node spells a full pattern
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Pattern index keyed by normalized scalars.
///
/// Built once, then shared read-only between scans.
#[derive(Debug, Default, Clone)]
pub struct PatternTrie {
    root: Node,
    patterns: usize,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pattern, folding each scalar on the way down.
    ///
    /// Returns `Ok(false)` if the pattern was already present. Empty patterns
    /// are rejected since they would mark the root terminal.
    pub fn insert(&mut self, pattern: &str) -> Result<bool> {
        if pattern.is_empty() {
            return Err(FilterError::EmptyPattern);
        }

        let mut node = &mut self.root;
        for c in pattern.chars() {
            node = node.children.entry(normalize(c)).or_default();
        }

        if node.terminal {
            return Ok(false);
        }
        node.terminal = true;
        self.patterns += 1;
        Ok(true)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk the trie along `text`, returning the node reached if every
    /// scalar had a transition
    pub fn walk(&self, text: &str) -> Option<&Node> {
        text.chars()
            .try_fold(&self.root, |node, c| node.child(normalize(c)))
    }

    /// Exact lookup: `word` was inserted (under folding)
    pub fn contains_pattern(&self, word: &str) -> bool {
        self.walk(word).is_some_and(Node::is_terminal)
    }

    /// Number of distinct patterns inserted
    pub fn len(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }
}
