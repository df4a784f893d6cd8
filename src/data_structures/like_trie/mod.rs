// Copyright (c) 2025 Like Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Like Trie Implementation
//!
//! This module provides a string-keyed associative container with
//! SQL `LIKE`-style wildcard lookup, where `%` matches any run of
//! characters. Lookups resolve with a strict two-tier priority:
//!
//! * an exact (non-wildcard) key always wins over any wildcard key that
//!   would also match;
//! * among competing wildcard keys, the one sharing the longest literal
//!   prefix with the query is preferred.
//!
//! The container merges a character-keyed trie with per-node pattern
//! registries: exact entries terminate on the node reached by consuming
//! the whole key, while wildcard entries attach to the node reached by
//! following the literal prefix up to and including the first `%`.

mod node;
mod pattern;

use std::borrow::Cow;

use node::{Terminal, TrieNode};
use pattern::LikePattern;

/// The wildcard character: matches any sequence of zero or more characters.
const WILDCARD: char = '%';

/// Configuration options for the Like Trie.
#[derive(Debug, Clone)]
pub struct LikeTrieConfig<V> {
    /// Whether keys are matched case-sensitively.
    case_sensitive: bool,

    /// Value returned by [`LikeTrie::get`] on a total miss.
    default_value: Option<V>,
}

impl<V> LikeTrieConfig<V> {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: false (keys are lower-cased before use)
    /// - default_value: None
    pub fn new() -> Self {
        Self {
            case_sensitive: false,
            default_value: None,
        }
    }

    /// Set whether keys are matched case-sensitively.
    ///
    /// When disabled (the default), keys are lower-cased on insertion and
    /// lookup, and compiled wildcard expressions ignore case.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the value [`LikeTrie::get`] returns when neither an exact nor a
    /// wildcard entry matches.
    pub fn with_default_value(mut self, value: V) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Get the case-sensitivity mode.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Get the configured default value.
    pub fn default_value(&self) -> Option<&V> {
        self.default_value.as_ref()
    }
}

impl<V> Default for LikeTrieConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// An enumeration entry produced by [`LikeTrie::data`].
///
/// Borrows the stored key (as originally supplied by the caller) and value;
/// not a stored structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry<'a, V> {
    /// Key as supplied at registration time, before normalization.
    pub key: &'a str,

    /// Value associated with the key.
    pub value: &'a V,
}

/// A string-keyed container with SQL `LIKE`-style wildcard lookup.
///
/// Key features:
/// * `%` in a registered key matches any run of characters on lookup
/// * exact entries always beat wildcard entries
/// * wildcard resolution prefers the longest shared literal prefix
/// * case-insensitive by default (configurable)
///
/// The container has no intrinsic concurrency: mutation takes `&mut self`
/// and readers take `&self`, so callers needing shared access must impose
/// external synchronization around the whole container.
///
/// # Examples
///
/// ```
/// use like_trie_lib::LikeTrie;
///
/// let mut trie = LikeTrie::new();
/// trie.set("HERO_%", "wildcard");
/// trie.set("HERO_001", "exact");
///
/// assert_eq!(trie.get("HERO_001"), Some(&"exact"));
/// assert_eq!(trie.get("HERO_999"), Some(&"wildcard"));
/// assert_eq!(trie.get("CARD_001"), None);
/// ```
#[derive(Debug)]
pub struct LikeTrie<V> {
    /// The root node of the trie.
    root: TrieNode<V>,

    /// Configuration options, fixed at construction.
    config: LikeTrieConfig<V>,
}

impl<V> LikeTrie<V> {
    /// Creates a new empty `LikeTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LikeTrieConfig::new())
    }

    /// Creates a new empty `LikeTrie` with the specified configuration.
    pub fn with_config(config: LikeTrieConfig<V>) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Normalizes a key according to the case-sensitivity setting.
    fn normalize_key<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// A key without `%` stores an exact entry; re-inserting it replaces
    /// the stored value. A key containing `%` registers a wildcard pattern
    /// on the node reached at its first `%`; characters after the first `%`
    /// exist only inside the compiled expression, and re-registering the
    /// same wildcard key appends a second pattern alongside the first.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert; `%` matches any run of characters on lookup.
    /// * `value` - The value to associate with the key.
    pub fn set(&mut self, key: &str, value: V) {
        let normalized = self.normalize_key(key);
        let case_sensitive = self.config.case_sensitive;

        let mut node = &mut self.root;
        for c in normalized.chars() {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
            if c == WILDCARD {
                node.patterns
                    .push(LikePattern::new(&normalized, key, value, case_sensitive));
                return;
            }
        }

        node.terminal = Some(Terminal {
            key: key.to_string(),
            value,
        });
    }

    /// Retrieves the value for a key, falling back to the configured
    /// default value on a total miss.
    ///
    /// Resolution order: exact entry, then wildcard entry (longest literal
    /// prefix first), then the configured default.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.resolve(key).or(self.config.default_value.as_ref())
    }

    /// Retrieves the value for a key without any default fallback.
    ///
    /// Used when the caller must distinguish "no entry" from an entry
    /// mapped to a default-looking value.
    pub fn get_no_default(&self, key: &str) -> Option<&V> {
        self.resolve(key)
    }

    /// Retrieves the value for a key, or the supplied fallback on a miss.
    ///
    /// The caller-supplied fallback overrides the configured default value.
    pub fn get_or_default(&self, key: &str, fallback: V) -> V
    where
        V: Clone,
    {
        self.resolve(key).cloned().unwrap_or(fallback)
    }

    /// Retrieves the value for a key, or a lazily computed fallback.
    ///
    /// The fallback closure is evaluated only on a true miss.
    pub fn get_or_else<F>(&self, key: &str, fallback: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        self.resolve(key).cloned().unwrap_or_else(fallback)
    }

    /// Checks whether a key resolves to an entry (exact or wildcard).
    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// Core resolution: exact match first, wildcard match second.
    fn resolve(&self, key: &str) -> Option<&V> {
        let normalized = self.normalize_key(key);

        self.get_exact(&normalized)
            .or_else(|| find_wildcard(&self.root, &normalized, &normalized))
    }

    /// Exact traversal: follows existing children only, no backtracking.
    fn get_exact(&self, query: &str) -> Option<&V> {
        let mut node = &self.root;
        for c in query.chars() {
            node = node.children.get(&c)?;
        }
        node.terminal.as_ref().map(|terminal| &terminal.value)
    }

    /// Returns every registered entry as `(key, value)` pairs.
    ///
    /// Keys are reported as originally supplied, one entry per exact key
    /// and one per registered pattern. Entries are not deduplicated: a
    /// wildcard key registered twice appears twice. Order follows the
    /// traversal and is unspecified with respect to insertion.
    pub fn data(&self) -> Vec<Entry<'_, V>> {
        let mut entries = Vec::new();
        collect_entries(&self.root, &mut entries);
        entries
    }

    /// Returns the number of registered entries (exact and wildcard).
    ///
    /// This traverses the whole graph, so it is an O(n) operation.
    pub fn len(&self) -> usize {
        count_entries(&self.root)
    }

    /// Checks whether the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.terminal.is_none() && self.root.children.is_empty()
    }

    /// Removes every entry, exact and wildcard.
    ///
    /// The configured default value and case-sensitivity mode are
    /// container-level configuration and survive a clear.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }
}

impl<V> Default for LikeTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first, longest-prefix-first wildcard search.
///
/// Descends along the query path as far as existing children allow before
/// consulting any `%` child on the way back up, so a pattern rooted at a
/// longer literal prefix always beats one rooted at a shorter prefix.
/// Patterns co-located on one node are tested in insertion order and the
/// first full-string match wins.
fn find_wildcard<'t, V>(node: &'t TrieNode<V>, query: &str, rest: &str) -> Option<&'t V> {
    if let Some(c) = rest.chars().next() {
        if let Some(child) = node.children.get(&c) {
            if let Some(value) = find_wildcard(child, query, &rest[c.len_utf8()..]) {
                return Some(value);
            }
        }
    }

    if let Some(fallback) = node.children.get(&WILDCARD) {
        for pattern in &fallback.patterns {
            if pattern.matches(query) {
                return Some(pattern.value());
            }
        }
    }

    None
}

/// Pre-order collection: terminal entry, then pattern entries, then children.
fn collect_entries<'t, V>(node: &'t TrieNode<V>, entries: &mut Vec<Entry<'t, V>>) {
    if let Some(terminal) = &node.terminal {
        entries.push(Entry {
            key: &terminal.key,
            value: &terminal.value,
        });
    }

    for pattern in &node.patterns {
        entries.push(Entry {
            key: pattern.original_key(),
            value: pattern.value(),
        });
    }

    for child in node.children.values() {
        collect_entries(child, entries);
    }
}

/// Counts terminal entries and registered patterns across the graph.
fn count_entries<V>(node: &TrieNode<V>) -> usize {
    let mut count = if node.terminal.is_some() { 1 } else { 0 };
    count += node.patterns.len();

    for child in node.children.values() {
        count += count_entries(child);
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = LikeTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);

        // Test insertion and retrieval
        trie.set("hello", "world");
        assert!(!trie.is_empty());
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("hello"), Some(&"world"));
        assert!(trie.contains("hello"));
        assert_eq!(trie.get("nonexistent"), None);
        assert!(!trie.contains("nonexistent"));

        // Test case-insensitivity
        assert_eq!(trie.get("HELLO"), Some(&"world"));

        // Test update
        trie.set("hello", "planet");
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("hello"), Some(&"planet"));
    }

    #[test]
    fn test_exact_entry_beats_wildcard_entry() {
        let mut trie = LikeTrie::new();

        trie.set("HERO_%", "wildcard");
        trie.set("HERO_001", "exact");

        assert_eq!(trie.get("HERO_001"), Some(&"exact"));
        assert_eq!(trie.get("HERO_999"), Some(&"wildcard"));
    }

    #[test]
    fn test_longest_literal_prefix_wins() {
        let mut trie = LikeTrie::new();

        trie.set("A%", "a");
        trie.set("AB%", "ab");

        assert_eq!(trie.get("ABC"), Some(&"ab"));
        assert_eq!(trie.get("AXY"), Some(&"a"));
    }

    #[test]
    fn test_colocated_patterns_resolve_in_insertion_order() {
        let mut trie = LikeTrie::new();

        // Both patterns live on the same node and both match "ab".
        trie.set("A%B", "first");
        trie.set("A%", "second");

        assert_eq!(trie.get("AB"), Some(&"first"));
        // Only the second pattern matches "ax".
        assert_eq!(trie.get("AX"), Some(&"second"));
    }

    #[test]
    fn test_duplicate_wildcard_registration_appends() {
        let mut trie = LikeTrie::new();

        trie.set("CARD_%", "old");
        trie.set("CARD_%", "new");

        // First registration still wins on lookup, both are enumerated.
        assert_eq!(trie.get("CARD_001"), Some(&"old"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_clear_resets_graph_but_not_config() {
        let config = LikeTrieConfig::new().with_default_value("default");
        let mut trie = LikeTrie::with_config(config);

        trie.set("KEY1", "value1");
        trie.set("PATTERN%", "wild");
        assert_eq!(trie.len(), 2);

        trie.clear();

        assert!(trie.is_empty());
        assert_eq!(trie.data().len(), 0);
        assert_eq!(trie.get_no_default("KEY1"), None);
        assert_eq!(trie.get_no_default("PATTERN123"), None);
        // Configured default survives the clear.
        assert_eq!(trie.get("KEY1"), Some(&"default"));
    }

    #[test]
    fn test_empty_key_and_pure_wildcard() {
        let mut trie = LikeTrie::new();

        trie.set("", "empty");
        trie.set("%", "all");

        assert_eq!(trie.get(""), Some(&"empty"));
        assert_eq!(trie.get("x"), Some(&"all"));
        assert_eq!(trie.get("anything"), Some(&"all"));
    }
}
