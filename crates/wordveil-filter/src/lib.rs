//! WordVeil keyword detection and masking
//!
//! This crate provides the keyword-masking core:
//! - Prefix-trie keyword index over Unicode code points
//! - Single-pass masking scan with first-complete-match semantics
//! - Case-insensitive matching, one filler character per masked character

pub mod error;
pub mod masker;
pub mod trie;

pub use error::{Error, Result};
pub use masker::{Masker, MaskerConfig};
pub use trie::{Trie, TrieNode};
