//! Public types for the wordbridge API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Errors
// ============================================================================

pub use wordbridge_core::{ConfigError, CorpusError, Error, GraphError, GraphResult, Result};

// ============================================================================
// Graph types
// ============================================================================

pub use wordbridge_core::{Weight, NO_EDGE};
pub use wordbridge_engine::graph::{Edge, GraphSnapshot, TwoHopPath, VertexId};

// ============================================================================
// Poet types
// ============================================================================

pub use wordbridge_core::TieBreak;
pub use wordbridge_engine::poet::{Bridge, PoetOptions};

// ============================================================================
// Configuration
// ============================================================================

pub use wordbridge_core::{LogConfig, PoetConfig, WordbridgeConfig};
