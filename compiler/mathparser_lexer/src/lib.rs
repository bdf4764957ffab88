//! Tokenizer for mathparser expressions.
//!
//! Converts expression source text into a flat, ordered list of untyped
//! tokens: numerals (decimal, exponent and `0x`/`0o`/`0b` forms, with `_`
//! separators), quoted strings with their quotes and escapes left verbatim,
//! single-character delimiters `()[]{}`, and runs of other characters
//! (identifiers and operators). No tree is built and nothing is evaluated;
//! that is left to the parser consuming the tokens.
//!
//! ```text
//! "atan2(2, 5)"  ->  ["atan", "2", "(", "2", ",", "5", ")"]
//! "{key: 0xFF}"  ->  ["{", "key", ":", "0xFF", "}"]
//! ```
//!
//! Malformed input (a doubled or dangling exponent, an unclosed string)
//! aborts the run with a [`LexicalError`].
//!
//! # Logging
//!
//! Scanning emits `tracing` events: a `debug` span per run and a `trace`
//! event per token. Call [`init_tracing`] from a binary or test to print
//! them, filtered through `RUST_LOG` (e.g. `RUST_LOG=mathparser_lexer=trace`).

mod char_class;
mod config;
mod cursor;
mod lex_error;
mod scanner;
mod token;

use std::sync::Once;

pub use char_class::{CharClass, NumberBase, BASE_PREFIX};
pub use config::{LexerConfig, DEFAULT_SPLIT_SUFFIXES};
pub use lex_error::{LexicalError, LexicalErrorContext, LexicalErrorKind};
pub use token::{TokenClass, TokenStream};

use scanner::Scanner;

/// Tokenize `source` with the default configuration.
///
/// # Examples
///
/// ```text
/// tokenize("1.5 == 15e-1")  ->  Ok(["1.5", "==", "15e-1"])
/// tokenize("1e2e3")         ->  Err(DuplicateExponent)
/// ```
pub fn tokenize(source: &str) -> Result<TokenStream<'_>, LexicalError> {
    Lexer::new().tokenize(source)
}

/// Configured entry point.
///
/// A `Lexer` holds only its [`LexerConfig`]; all scanning state is created
/// fresh for each [`tokenize`](Lexer::tokenize) call, so one `Lexer` can be
/// shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    config: LexerConfig,
}

impl Lexer {
    /// A lexer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A lexer with a custom configuration.
    pub fn with_config(config: LexerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Tokenize `source`, returning every token in input order.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn tokenize<'a>(&self, source: &'a str) -> Result<TokenStream<'a>, LexicalError> {
        match Scanner::new(source, &self.config).run() {
            Ok(tokens) => {
                tracing::debug!(count = tokens.len(), "tokenized");
                Ok(tokens)
            }
            Err(err) => {
                tracing::debug!(%err, "lexical error");
                Err(err)
            }
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for debugging.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// never replaces a subscriber installed elsewhere.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if let Err(err) = installed {
                tracing::debug!(%err, "keeping the already installed subscriber");
            }
        }
    });
}
