//! Lexical error types.
//!
//! An error carries three pieces of information:
//! - WHERE: `pos`, the byte offset of the offending character (the input
//!   length when the problem is discovered at end of input)
//! - WHAT: `kind`, the malformation that was found
//! - WHY: `context`, the literal the scanner was inside and where it began
//!
//! Scanning stops at the first error; no partial token list is returned.

use thiserror::Error;

/// A lexical error that terminated a tokenization run.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("invalid or unexpected token: {kind} at byte {pos}")]
pub struct LexicalError {
    /// WHAT went wrong.
    pub kind: LexicalErrorKind,
    /// WHERE it was detected (byte offset).
    pub pos: usize,
    /// WHY the scanner was checking.
    pub context: LexicalErrorContext,
}

/// What kind of lexical error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexicalErrorKind {
    /// A numeral already holding an exponent marker met another one (`1e2e3`).
    #[error("second exponent marker `{marker}` in numeric literal")]
    DuplicateExponent { marker: char },
    /// The character after an exponent marker is neither a digit nor a sign (`1egg`).
    #[error("expected digit or `-` after exponent marker, found `{found}`")]
    InvalidExponent { found: char },
    /// Input ended right after an exponent marker (`1e`).
    #[error("input ends after exponent marker")]
    IncompleteExponent,
    /// Input ended inside a string literal (`'unclosed`).
    #[error("unterminated string literal opened with `{quote}`")]
    UnterminatedString { quote: char },
}

/// Scanning context at the point of error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexicalErrorContext {
    /// Inside a numeric literal starting at `start`.
    NumberLiteral { start: usize },
    /// Inside a string literal whose opening quote is at `start`.
    InsideString { start: usize },
}

impl LexicalError {
    pub(crate) fn duplicate_exponent(marker: char, pos: usize, start: usize) -> Self {
        Self {
            kind: LexicalErrorKind::DuplicateExponent { marker },
            pos,
            context: LexicalErrorContext::NumberLiteral { start },
        }
    }

    pub(crate) fn invalid_exponent(found: char, pos: usize, start: usize) -> Self {
        Self {
            kind: LexicalErrorKind::InvalidExponent { found },
            pos,
            context: LexicalErrorContext::NumberLiteral { start },
        }
    }

    pub(crate) fn incomplete_exponent(pos: usize, start: usize) -> Self {
        Self {
            kind: LexicalErrorKind::IncompleteExponent,
            pos,
            context: LexicalErrorContext::NumberLiteral { start },
        }
    }

    pub(crate) fn unterminated_string(quote: char, pos: usize, start: usize) -> Self {
        Self {
            kind: LexicalErrorKind::UnterminatedString { quote },
            pos,
            context: LexicalErrorContext::InsideString { start },
        }
    }

    /// Byte offset where the literal containing the error began.
    pub fn literal_start(&self) -> usize {
        match self.context {
            LexicalErrorContext::NumberLiteral { start }
            | LexicalErrorContext::InsideString { start } => start,
        }
    }
}

#[cfg(test)]
mod tests;
