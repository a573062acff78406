//! Corpus reading and word tokenization.

pub mod corpus;
pub mod tokenizer;

pub use corpus::Corpus;
pub use tokenizer::{fold, split_words, tokenize_corpus};
