//! Core types for wordbridge
//!
//! This crate defines the pieces shared by every other wordbridge crate:
//! - Error taxonomy: [`GraphError`], [`CorpusError`], [`ConfigError`], [`Error`]
//! - Edge weight type: [`Weight`]
//! - Configuration: [`WordbridgeConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{LogConfig, PoetConfig, WordbridgeConfig};
pub use error::{ConfigError, CorpusError, Error, GraphError, GraphResult, Result};
pub use types::{TieBreak, Weight, NO_EDGE};
