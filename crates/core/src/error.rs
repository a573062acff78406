//! Error types for wordbridge.
//!
//! Three failure families exist:
//! - [`GraphError`]: contract violations raised by graph mutation
//! - [`CorpusError`]: the corpus file could not be read
//! - [`ConfigError`]: the configuration file could not be loaded
//!
//! Absence of a vertex or edge is never an error. Queries against unknown
//! labels return empty results.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by graph mutation and integrity checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge from a vertex to itself was requested.
    #[error("self-loop edge on {label} is not allowed")]
    SelfLoop {
        /// Debug rendering of the offending label
        label: String,
    },

    /// Incrementing the edge would exceed the maximum weight.
    #[error("weight of edge {src} -> {dst} would overflow")]
    WeightOverflow {
        /// Debug rendering of the source label
        src: String,
        /// Debug rendering of the target label
        dst: String,
    },

    /// The vertex arena has no free handle left.
    #[error("vertex arena is full: no handle past index {limit}")]
    CapacityExceeded {
        /// Highest addressable arena position
        limit: usize,
    },

    /// A representation invariant does not hold.
    #[error("graph is corrupt: {reason}")]
    Corrupt {
        /// Which invariant failed
        reason: String,
    },
}

impl GraphError {
    /// Build a [`GraphError::SelfLoop`] from any debuggable label.
    pub fn self_loop(label: &impl std::fmt::Debug) -> Self {
        GraphError::SelfLoop {
            label: format!("{:?}", label),
        }
    }

    /// Build a [`GraphError::WeightOverflow`] from any debuggable labels.
    pub fn weight_overflow(src: &impl std::fmt::Debug, dst: &impl std::fmt::Debug) -> Self {
        GraphError::WeightOverflow {
            src: format!("{:?}", src),
            dst: format!("{:?}", dst),
        }
    }

    /// Build a [`GraphError::Corrupt`].
    pub fn corrupt(reason: impl Into<String>) -> Self {
        GraphError::Corrupt {
            reason: reason.into(),
        }
    }
}

/// Errors raised while reading a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file is missing, is a directory, or is unreadable.
    #[error("cannot read corpus {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for the expected schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but holds an unsupported value.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted field name, e.g. `log.level`
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Top-level error for wordbridge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Graph contract violation
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Corpus read failure
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for wordbridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for graph mutation.
pub type GraphResult<T> = std::result::Result<T, GraphError>;
