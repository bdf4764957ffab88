//! Lexer configuration.

/// Suffixes split off expression tokens when nothing else is configured.
pub const DEFAULT_SPLIT_SUFFIXES: &[&str] = &[":"];

/// Tunables for a [`Lexer`](crate::Lexer).
///
/// The character class tables are fixed; only the trailing-punctuation
/// split set can be changed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Suffixes split off the end of an expression token before it is
    /// emitted. Checked in order; the first match wins, and only when the
    /// token is strictly longer than the suffix.
    pub split_suffixes: Vec<String>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            split_suffixes: DEFAULT_SPLIT_SUFFIXES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

impl LexerConfig {
    /// The default configuration (splits a trailing `:`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `suffix` to the split set. Empty suffixes are ignored.
    #[must_use]
    pub fn with_split_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if !suffix.is_empty() {
            self.split_suffixes.push(suffix);
        }
        self
    }

    /// Clear the split set, so expression tokens are emitted whole.
    #[must_use]
    pub fn without_split_suffixes(mut self) -> Self {
        self.split_suffixes.clear();
        self
    }

    /// Split `token` at the first configured suffix it ends with.
    ///
    /// Returns the byte length of the part before the suffix, or `None`
    /// when no suffix applies. Empty suffixes never match.
    pub(crate) fn split_point(&self, token: &str) -> Option<usize> {
        self.split_suffixes
            .iter()
            .find(|end| {
                !end.is_empty() && token.len() > end.len() && token.ends_with(end.as_str())
            })
            .map(|end| token.len() - end.len())
    }
}

#[cfg(test)]
mod tests;
