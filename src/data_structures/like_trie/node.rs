// Copyright (c) 2025 Like Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Like Trie.
//!
//! Nodes form the shared-prefix backbone for both exact entries and
//! wildcard literal prefixes. Each node owns its children outright; the
//! whole graph is a pure tree with no back-references.

use std::collections::HashMap;

use super::pattern::LikePattern;

/// An exact entry stored at the node reached by fully consuming a
/// non-wildcard key. Key and value always travel together.
#[derive(Debug)]
pub(crate) struct Terminal<V> {
    /// Key as supplied by the caller, before normalization.
    pub key: String,

    /// Value associated with the key.
    pub value: V,
}

/// A node in the Like Trie.
///
/// Each node represents one character of a key path. Wildcard entries are
/// registered on the node reached by including the `%` character itself,
/// so multiple patterns sharing a literal prefix accumulate on one node.
#[derive(Debug)]
pub(crate) struct TrieNode<V> {
    /// Map of characters to owned child nodes.
    pub children: HashMap<char, TrieNode<V>>,

    /// Wildcard entries registered at this node, in insertion order.
    pub patterns: Vec<LikePattern<V>>,

    /// Exact entry terminating at this node, if any.
    pub terminal: Option<Terminal<V>>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            patterns: Vec::new(),
            terminal: None,
        }
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
