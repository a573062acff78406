//! Corpus loading.
//!
//! A corpus is read line by line; lines are joined with a single space and
//! the result is tokenized with [`tokenize_corpus`]. The whole token stream
//! is held in memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use wordbridge_core::CorpusError;

use super::tokenizer::tokenize_corpus;

/// A finite, case-folded token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    tokens: Vec<String>,
    path: Option<PathBuf>,
}

impl Corpus {
    /// Tokenize in-memory text.
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: tokenize_corpus(text),
            path: None,
        }
    }

    /// Read and tokenize a corpus file.
    ///
    /// # Errors
    ///
    /// [`CorpusError::Io`] if the path does not exist, is a directory, or
    /// cannot be read as UTF-8 text.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let io_err = |source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = BufReader::new(File::open(path).map_err(io_err)?);
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line.map_err(io_err)?);
            text.push(' ');
        }

        let corpus = Self {
            tokens: tokenize_corpus(&text),
            path: Some(path.to_path_buf()),
        };
        tracing::debug!(
            target: "wordbridge::corpus",
            path = %path.display(),
            tokens = corpus.tokens.len(),
            "Loaded corpus"
        );
        Ok(corpus)
    }

    /// The tokens, in corpus order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The file this corpus was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the corpus has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the corpus, returning its tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}
