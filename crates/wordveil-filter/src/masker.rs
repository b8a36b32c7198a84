//! Single-pass masking scan over a keyword trie

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::trie::{Trie, fold};

/// Configuration for a [`Masker`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskerConfig {
    /// Filler used for masked spans. Must be exactly one character.
    pub filler: String,
}

impl Default for MaskerConfig {
    fn default() -> Self {
        Self {
            filler: "*".to_string(),
        }
    }
}

/// Masks keyword occurrences in text with a repeated filler character.
///
/// Holds a read-only view of the trie and never mutates it; each call to
/// [`mask`](Self::mask) is purely functional over its inputs.
pub struct Masker<'a> {
    trie: &'a Trie,
    filler: char,
}

impl<'a> Masker<'a> {
    /// Create a masker over `trie` using `filler` for masked spans.
    pub fn new(trie: &'a Trie, filler: char) -> Self {
        Self { trie, filler }
    }

    /// Create a masker from a configuration.
    ///
    /// # Errors
    /// - `Error::InvalidFiller` if the configured filler is empty or longer
    ///   than one character
    pub fn from_config(trie: &'a Trie, config: &MaskerConfig) -> Result<Self> {
        let mut chars = config.filler.chars();
        match (chars.next(), chars.next()) {
            (Some(filler), None) => Ok(Self::new(trie, filler)),
            _ => Err(Error::InvalidFiller(config.filler.clone())),
        }
    }

    /// Replace every keyword occurrence in `text` with the filler.
    ///
    /// Single left-to-right pass. Characters are case-folded for comparison
    /// only; unmatched characters keep their original case. A matched span
    /// is replaced by one filler character per matched character, so the
    /// output always has the same character count as the input.
    ///
    /// Matching is first-complete-match: the scan stops at the first keyword
    /// boundary reached from a start position, even when a longer keyword
    /// could still match. With keywords "sex" and "sexy", the input "sexy"
    /// masks only the first three characters.
    pub fn mask(&self, text: &str) -> String {
        if self.trie.is_empty() || text.is_empty() {
            return text.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut start = 0;

        while start < chars.len() {
            match self.match_len(&chars[start..]) {
                Some(matched) => {
                    out.extend(std::iter::repeat_n(self.filler, matched));
                    start += matched;
                }
                None => {
                    out.push(chars[start]);
                    start += 1;
                }
            }
        }

        out
    }

    /// Length of the first complete keyword match at the head of `chars`,
    /// or `None` if the walk from this position fails.
    fn match_len(&self, chars: &[char]) -> Option<usize> {
        let mut cursor = self.trie.root();
        for (walked, &c) in chars.iter().enumerate() {
            cursor = cursor.child(fold(c))?;
            if cursor.is_terminal() {
                return Some(walked + 1);
            }
        }
        // Ran off the end of the text mid-walk: partial matches never mask.
        None
    }
}
