use pretty_assertions::assert_eq;

use super::*;

fn stream<'a>(tokens: &[&'a str]) -> TokenStream<'a> {
    let mut stream = TokenStream::with_capacity(tokens.len());
    for &token in tokens {
        stream.push(token);
    }
    stream
}

// === TokenStream ===

#[test]
fn accessors() {
    let tokens = stream(&["sin", "(", "x", ")"]);
    assert_eq!(tokens.len(), 4);
    assert!(!tokens.is_empty());
    assert_eq!(tokens.get(2), Some(&"x"));
    assert_eq!(tokens.get(4), None);
    assert_eq!(tokens[0], "sin");
    assert_eq!(tokens.as_slice(), &["sin", "(", "x", ")"]);
}

#[test]
fn default_is_empty() {
    let tokens = TokenStream::default();
    assert!(tokens.is_empty());
    assert_eq!(tokens.iter().count(), 0);
}

#[test]
fn iteration_preserves_order() {
    let tokens = stream(&["1", "+", "2"]);
    let borrowed: Vec<&str> = (&tokens).into_iter().collect();
    assert_eq!(borrowed, vec!["1", "+", "2"]);
    assert_eq!(tokens.iter().rev().collect::<Vec<_>>(), vec!["2", "+", "1"]);
    let owned: Vec<&str> = tokens.into_iter().collect();
    assert_eq!(owned, vec!["1", "+", "2"]);
}

#[test]
fn conversions() {
    let tokens = stream(&["a", "b"]);
    assert_eq!(tokens.to_owned_strings(), vec!["a".to_owned(), "b".to_owned()]);
    let vec: Vec<&str> = tokens.clone().into();
    assert_eq!(vec, tokens.into_vec());
}

#[test]
fn compares_with_arrays_and_vecs() {
    let tokens = stream(&["[", "0", "]"]);
    assert!(tokens == ["[", "0", "]"]);
    assert!(tokens == vec!["[", "0", "]"]);
    assert!(tokens != ["[", "]"]);
}

#[test]
fn deref_to_slice() {
    let tokens = stream(&["x", "y"]);
    assert_eq!(tokens.first(), Some(&"x"));
    assert!(tokens.contains(&"y"));
}

// === TokenClass ===

#[test]
fn classify_by_first_char() {
    assert_eq!(TokenClass::of("0xFF"), TokenClass::Number);
    assert_eq!(TokenClass::of(".12"), TokenClass::Number);
    assert_eq!(TokenClass::of("..."), TokenClass::Number);
    assert_eq!(TokenClass::of("'x'"), TokenClass::String);
    assert_eq!(TokenClass::of("\"\""), TokenClass::String);
    assert_eq!(TokenClass::of("("), TokenClass::Structural);
    assert_eq!(TokenClass::of("}"), TokenClass::Structural);
    assert_eq!(TokenClass::of("atan"), TokenClass::Expression);
    assert_eq!(TokenClass::of(">>>"), TokenClass::Expression);
    assert_eq!(TokenClass::of(":"), TokenClass::Expression);
    assert_eq!(TokenClass::of(""), TokenClass::Expression);
}

#[test]
fn classes_follow_stream_order() {
    let tokens = stream(&["f", "(", "1", ",", "'s'", ")"]);
    assert_eq!(
        tokens.classes().collect::<Vec<_>>(),
        vec![
            TokenClass::Expression,
            TokenClass::Structural,
            TokenClass::Number,
            TokenClass::Expression,
            TokenClass::String,
            TokenClass::Structural,
        ]
    );
}
