//! File-backed word lists for WordVeil
//!
//! This crate loads newline-delimited keyword files from disk and builds
//! ready-to-scan tries from them. It is the only place file I/O happens;
//! the matching core consumes already-decoded strings.
//!
//! # Features
//! - One keyword per line, UTF-8, blank lines ignored
//! - Tilde expansion for user-supplied paths
//! - Explicit path parameter, no process-wide default location
//!
//! # Example
//! ```no_run
//! # fn example() -> wordveil_filter::Result<()> {
//! let trie = wordveil_wordlist::build_trie("~/.wordveil/words.txt")?;
//! let masker = wordveil_filter::Masker::new(&trie, '*');
//! assert_eq!(masker.mask("clean text"), "clean text");
//! # Ok(())
//! # }
//! ```

mod word_file;

pub use word_file::{build_trie, load_words};
