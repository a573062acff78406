//! Word tokenizer for corpora and poem input
//!
//! Words are non-empty runs of non-whitespace characters. Punctuation stays
//! attached to the word it touches, so `"hello,"` and `"hello"` are
//! different words.

/// Case-fold a single word.
#[inline]
pub fn fold(word: &str) -> String {
    word.to_lowercase()
}

/// Tokenize corpus text into case-folded words.
///
/// Pipeline:
/// 1. Split on runs of whitespace (spaces, tabs, newlines)
/// 2. Lowercase each word
///
/// # Example
///
/// ```
/// use wordbridge_engine::text::tokenizer::tokenize_corpus;
///
/// let tokens = tokenize_corpus("Hello, HELLO,\n  hello, goodbye!");
/// assert_eq!(tokens, vec!["hello,", "hello,", "hello,", "goodbye!"]);
/// ```
pub fn tokenize_corpus(text: &str) -> Vec<String> {
    text.split_whitespace().map(fold).collect()
}

/// Split poem input into words, keeping their original case.
///
/// # Example
///
/// ```
/// use wordbridge_engine::text::tokenizer::split_words;
///
/// assert_eq!(split_words("  Test the\tsystem. "), vec!["Test", "the", "system."]);
/// assert!(split_words("").is_empty());
/// ```
pub fn split_words(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}
