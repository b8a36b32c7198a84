//! Newline-delimited word-list files

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use wordveil_filter::{Error, Result, Trie};

/// Expand a leading tilde against the home directory.
fn expand_path(path: &Path) -> Result<PathBuf> {
    if path.starts_with("~") {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::WordList("Could not determine home directory".to_string()))?;
        Ok(home.join(path.strip_prefix("~").unwrap_or(path)))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Load keywords from a newline-delimited UTF-8 file.
///
/// One keyword per line; internal whitespace is allowed, surrounding
/// whitespace is trimmed, blank lines are skipped. Keywords are returned
/// in file order, undecoded beyond UTF-8 validation — normalization
/// happens at trie insertion.
///
/// # Errors
/// - `Error::WordListNotFound` if the file doesn't exist
/// - `Error::Io` if the file can't be read or isn't valid UTF-8
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = expand_path(path.as_ref())?;

    if !path.exists() {
        return Err(Error::WordListNotFound(path));
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        error!("Failed to read word list {:?}: {}", path, e);
        Error::Io(e)
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Read {} keywords from {:?}", words.len(), path);
    Ok(words)
}

/// Load a word list and build the keyword trie from it.
///
/// Duplicate lines collapse into a single keyword.
pub fn build_trie(path: impl AsRef<Path>) -> Result<Trie> {
    let path = path.as_ref();
    let words = load_words(path)?;
    let trie = Trie::from_words(&words);

    info!("Loaded {} keywords from {:?}", trie.len(), path);
    Ok(trie)
}
