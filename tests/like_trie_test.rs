// Copyright (c) 2025 Like Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Like Trie public API.
//!
//! Exercises the container the way an embedder would: a card database
//! keyed by identifiers, with per-family wildcard fallbacks.

use like_trie_lib::{LikeTrie, LikeTrieConfig};

#[test]
fn test_card_database_resolution() {
    let config = LikeTrieConfig::new().with_default_value("unknown".to_string());
    let mut cards = LikeTrie::with_config(config);

    cards.set("CARD_%", "generic card".to_string());
    cards.set("CARD_FIRE_%", "fire card".to_string());
    cards.set("CARD_FIRE_001", "firestorm".to_string());
    cards.set("HERO_%", "generic hero".to_string());

    // Exact entry wins over every matching wildcard.
    assert_eq!(cards.get("CARD_FIRE_001"), Some(&"firestorm".to_string()));

    // Longest literal prefix wins among wildcards.
    assert_eq!(cards.get("CARD_FIRE_999"), Some(&"fire card".to_string()));
    assert_eq!(cards.get("CARD_WATER_001"), Some(&"generic card".to_string()));

    // Unrelated families resolve through their own pattern.
    assert_eq!(cards.get("HERO_042"), Some(&"generic hero".to_string()));

    // Total misses fall back to the configured default.
    assert_eq!(cards.get("SPELL_001"), Some(&"unknown".to_string()));
    assert_eq!(cards.get_no_default("SPELL_001"), None);

    // Lookup is case-insensitive by default.
    assert_eq!(cards.get("card_fire_001"), Some(&"firestorm".to_string()));
}

#[test]
fn test_enumeration_and_reset() {
    let mut trie = LikeTrie::new();

    trie.set("ALPHA", 1);
    trie.set("BETA", 2);
    trie.set("GAMMA_%", 3);
    trie.set("GAMMA_%", 4);

    let data = trie.data();
    assert_eq!(data.len(), 4);
    assert_eq!(trie.len(), 4);

    // Keys come back exactly as supplied, including the wildcard.
    assert!(data.iter().any(|entry| entry.key == "GAMMA_%"));

    trie.clear();
    assert!(trie.is_empty());
    assert!(trie.data().is_empty());
    assert_eq!(trie.get("ALPHA"), None);
}

#[test]
fn test_owned_value_types() {
    let mut trie: LikeTrie<Vec<u32>> = LikeTrie::new();

    trie.set("SET_%", vec![1, 2, 3]);
    trie.set("SET_A", vec![4]);

    assert_eq!(trie.get("SET_A"), Some(&vec![4]));
    assert_eq!(trie.get("SET_B"), Some(&vec![1, 2, 3]));

    let fallback = trie.get_or_else("MISSING", Vec::new);
    assert!(fallback.is_empty());
}

#[test]
fn test_build_metadata_globals() {
    assert!(!like_trie_lib::VERSION.is_empty());
    assert_eq!(like_trie_lib::build_info::ARTIFACT_ID, "like_trie");
}
