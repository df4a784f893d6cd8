// Copyright (c) 2025 Like Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Wildcard pattern entries for the Like Trie.
//!
//! A `LikePattern` is created for every registered key that contains the
//! `%` wildcard. The LIKE-syntax key is translated to an anchored regular
//! expression which is compiled on first match attempt and cached for the
//! lifetime of the pattern.

use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};

/// A compiled wildcard entry registered at a trie node.
///
/// Holds the normalized LIKE-syntax key it was built from, the key exactly
/// as the caller supplied it (for enumeration), the associated value, and
/// the case-sensitivity mode captured at registration time.
#[derive(Debug)]
pub(crate) struct LikePattern<V> {
    /// Normalized LIKE-syntax key the expression is translated from.
    source: String,

    /// Key as supplied by the caller, before normalization.
    original_key: String,

    /// Value associated with this pattern.
    value: V,

    /// Case-sensitivity mode of the container at registration time.
    case_sensitive: bool,

    /// Compiled expression, built on first use.
    regex: OnceCell<Regex>,
}

impl<V> LikePattern<V> {
    /// Creates a new pattern entry from a normalized key.
    ///
    /// # Arguments
    ///
    /// * `normalized_key` - The full normalized key, including everything after the first `%`.
    /// * `original_key` - The key exactly as supplied by the caller.
    /// * `value` - The value to associate with the pattern.
    /// * `case_sensitive` - The container's case-sensitivity mode.
    pub fn new(normalized_key: &str, original_key: &str, value: V, case_sensitive: bool) -> Self {
        Self {
            source: normalized_key.to_string(),
            original_key: original_key.to_string(),
            value,
            case_sensitive,
            regex: OnceCell::new(),
        }
    }

    /// Tests whether the entire candidate string satisfies this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex().is_match(candidate)
    }

    /// Returns the key as supplied by the caller.
    pub fn original_key(&self) -> &str {
        &self.original_key
    }

    /// Returns the value associated with this pattern.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the compiled expression, compiling it on first access.
    ///
    /// # Panics
    ///
    /// Translation escapes every metacharacter, so compilation cannot fail
    /// for any key string. An engine rejection of a translated pattern is a
    /// broken build environment and aborts instead of surfacing per lookup.
    fn regex(&self) -> &Regex {
        self.regex.get_or_init(|| {
            RegexBuilder::new(&like_to_regex(&self.source))
                .case_insensitive(!self.case_sensitive)
                .build()
                .expect("translated LIKE pattern is always a valid expression")
        })
    }
}

/// Translates a LIKE-syntax pattern into an anchored regular expression.
///
/// `%` becomes `.*`; every regex metacharacter is escaped to match
/// literally; all other characters pass through unchanged. The result is
/// wrapped in `^`/`$` so that matching tests the entire candidate string,
/// never a substring.
pub(crate) fn like_to_regex(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 2);
    source.push('^');
    for c in pattern.chars() {
        match c {
            '%' => source.push_str(".*"),
            '.' | '[' | ']' | '(' | ')' | '{' | '}' | '|' | '^' | '$' | '+' | '?' | '*'
            | '\\' => {
                source.push('\\');
                source.push(c);
            }
            _ => source.push(c),
        }
    }
    source.push('$');
    source
}
