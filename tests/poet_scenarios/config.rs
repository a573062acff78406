//! Configuration feeding poet options.

use wordbridge::{PoetOptions, TieBreak, WordbridgeConfig};

use crate::test_utils::poet;

#[test]
fn config_selects_tie_break() {
    let config = WordbridgeConfig::from_toml_str("[poet]\ntie_break = \"lexicographic\"\n").unwrap();
    let p = poet("start zed end start amy end").with_options(PoetOptions::from(&config.poet));
    assert_eq!(p.options().tie_break, TieBreak::Lexicographic);
    assert_eq!(p.poem("start end"), "start amy end");
}

#[test]
fn default_config_uses_first_seen() {
    let config = WordbridgeConfig::default();
    let p = poet("start zed end start amy end").with_options(PoetOptions::from(&config.poet));
    assert_eq!(p.poem("start end"), "start zed end");
}
