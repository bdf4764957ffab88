use super::*;

#[test]
fn default_splits_colon() {
    let config = LexerConfig::default();
    assert_eq!(config.split_suffixes, vec![":".to_owned()]);
    assert_eq!(config, LexerConfig::new());
}

#[test]
fn split_point_requires_strictly_longer_token() {
    let config = LexerConfig::default();
    assert_eq!(config.split_point("key:"), Some(3));
    assert_eq!(config.split_point(":"), None);
    assert_eq!(config.split_point("key"), None);
}

#[test]
fn split_point_uses_first_match() {
    let config = LexerConfig::new()
        .without_split_suffixes()
        .with_split_suffix(";")
        .with_split_suffix("=>")
        .with_split_suffix(">");
    assert_eq!(config.split_point("a=>"), Some(1));
    assert_eq!(config.split_point("a>"), Some(1));
    assert_eq!(config.split_point("x;"), Some(1));
}

#[test]
fn empty_suffixes_are_ignored() {
    let config = LexerConfig::new().with_split_suffix("");
    assert_eq!(config.split_suffixes.len(), 1);

    let forced = LexerConfig {
        split_suffixes: vec![String::new()],
    };
    assert_eq!(forced.split_point("abc"), None);
}

#[test]
fn without_split_suffixes_never_splits() {
    let config = LexerConfig::new().without_split_suffixes();
    assert!(config.split_suffixes.is_empty());
    assert_eq!(config.split_point("key:"), None);
}
