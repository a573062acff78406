//! Poet Scenario Test Suite
//!
//! End-to-end tests through the public `wordbridge` API:
//!
//! - **scenarios**: corpus → affinity graph → poem, on the documented examples
//! - **corpus_io**: reading corpora from disk and the I/O failure kinds
//! - **config**: TOML configuration feeding poet options
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test poet_scenarios
//! ```

mod test_utils;

mod config;
mod corpus_io;
mod scenarios;
