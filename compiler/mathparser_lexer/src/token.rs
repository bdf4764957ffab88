//! Token output types.
//!
//! Tokens are untyped: each one is a slice of the input text. Consumers that
//! need a class re-derive it from the token's shape with [`TokenClass::of`].

use std::ops::Deref;

use crate::char_class::{is, CharClass};

/// The ordered tokens produced by one tokenization run.
///
/// Every token borrows from the input string. The stream is built in
/// insertion order and handed to the caller whole; the scanner keeps no
/// reference to it afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TokenStream<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, token: &'a str) {
        debug_assert!(!token.is_empty(), "empty token emitted");
        self.tokens.push(token);
    }

    /// Iterate over the tokens in input order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a str>> {
        self.tokens.iter().copied()
    }

    /// The tokens as a slice.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Take ownership of the underlying token vector.
    pub fn into_vec(self) -> Vec<&'a str> {
        self.tokens
    }

    /// Copy every token into an owned `String`, detaching the result from
    /// the input's lifetime.
    pub fn to_owned_strings(&self) -> Vec<String> {
        self.tokens.iter().map(|t| (*t).to_owned()).collect()
    }

    /// Classes of all tokens, in order.
    pub fn classes(&self) -> impl Iterator<Item = TokenClass> + '_ {
        self.tokens.iter().map(|t| TokenClass::of(t))
    }
}

impl<'a> Deref for TokenStream<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for TokenStream<'a> {
    type Item = &'a str;
    type IntoIter = std::vec::IntoIter<&'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenStream<'a> {
    type Item = &'a str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, &'a str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter().copied()
    }
}

impl<'a> From<TokenStream<'a>> for Vec<&'a str> {
    fn from(stream: TokenStream<'a>) -> Self {
        stream.tokens
    }
}

impl<const N: usize> PartialEq<[&str; N]> for TokenStream<'_> {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.tokens.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<&str>> for TokenStream<'_> {
    fn eq(&self, other: &Vec<&str>) -> bool {
        &self.tokens == other
    }
}

/// Lexical class of a token, re-derived from its first character.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenClass {
    /// Numeral, possibly base-prefixed (`12`, `1.5e-3`, `0xFF`, `.12`).
    Number,
    /// Quoted string literal, quotes included.
    String,
    /// A single `()[]{}` character.
    Structural,
    /// Identifier, operator or other punctuation.
    Expression,
}

impl TokenClass {
    /// Classify `token` by its first character, using the same tables the
    /// scanner uses to pick a state.
    ///
    /// An empty string classifies as [`TokenClass::Expression`]; the scanner
    /// never emits one.
    pub fn of(token: &str) -> TokenClass {
        match token.chars().next() {
            Some(c) if is(c, CharClass::QUOTE) => TokenClass::String,
            Some(c) if is(c, CharClass::NUMBER_BODY) => TokenClass::Number,
            Some(c) if is(c, CharClass::STRUCTURAL) => TokenClass::Structural,
            _ => TokenClass::Expression,
        }
    }
}

#[cfg(test)]
mod tests;
