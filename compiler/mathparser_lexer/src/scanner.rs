//! Character-driven state machine turning source text into tokens.
//!
//! # Design
//!
//! A [`Scanner`] lives for exactly one run. It owns the cursor, the current
//! [`ScanState`], the accumulator (the byte range of the token being built)
//! and the output [`TokenStream`]. Each character is handed to
//! [`Scanner::step`], which returns a [`Step`]: `Advance` moves past the
//! character, `Reconsume` leaves the cursor where it is so the same
//! character is examined again under the state just entered.
//!
//! Every token is a contiguous run of input characters, so the accumulator
//! is a start/end pair over the source rather than a copied buffer.

use crate::char_class::{is, CharClass, NumberBase, BASE_PREFIX, EXPONENTS};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::lex_error::LexicalError;
use crate::token::TokenStream;

/// Which kind of token is currently being accumulated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ScanState {
    /// Between tokens.
    None,
    /// Decimal numeral.
    Number,
    /// Just appended an exponent marker; the next character must be a
    /// digit or sign.
    NumberExponentPending,
    /// Numeral after a `0x` / `0o` / `0b` prefix.
    NumberBased(NumberBase),
    /// Identifier, operator or other unclassified text.
    Expression,
    /// String literal opened by `quote`.
    String { quote: char },
}

/// What the driver loop does with the character just examined.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Step {
    /// Move past it.
    Advance,
    /// Examine it again in the new state.
    Reconsume,
}

/// Byte range of the token under construction.
#[derive(Copy, Clone, Debug, Default)]
struct Accumulator {
    start: usize,
    end: usize,
}

/// Run-scoped scanning state.
pub(crate) struct Scanner<'a, 'c> {
    cursor: Cursor<'a>,
    config: &'c LexerConfig,
    state: ScanState,
    acc: Accumulator,
    tokens: TokenStream<'a>,
}

impl<'a, 'c> Scanner<'a, 'c> {
    pub(crate) fn new(source: &'a str, config: &'c LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            state: ScanState::None,
            acc: Accumulator::default(),
            // Rough guess: one token per four bytes of input.
            tokens: TokenStream::with_capacity(source.len() / 4 + 1),
        }
    }

    /// Consume the whole input and return the tokens.
    pub(crate) fn run(mut self) -> Result<TokenStream<'a>, LexicalError> {
        loop {
            if let ScanState::String { quote } = self.state {
                self.skip_string_body(quote);
            }
            let Some(c) = self.cursor.current() else {
                break;
            };
            match self.step(c)? {
                Step::Advance => self.cursor.advance(),
                Step::Reconsume => {}
            }
        }
        self.finish()?;
        Ok(self.tokens)
    }

    // ─── Dispatch ─────────────────────────────────────────────────────

    fn step(&mut self, c: char) -> Result<Step, LexicalError> {
        match self.state {
            ScanState::None => Ok(self.idle(c)),
            ScanState::Number => self.number(c),
            ScanState::NumberExponentPending => self.exponent(c),
            ScanState::NumberBased(base) => Ok(self.based_number(c, base)),
            ScanState::Expression => Ok(self.expression(c)),
            ScanState::String { quote } => Ok(self.string(c, quote)),
        }
    }

    // ─── Between tokens ───────────────────────────────────────────────

    fn idle(&mut self, c: char) -> Step {
        let class = CharClass::of(c);
        if class.contains(CharClass::WHITESPACE) {
            return Step::Advance;
        }
        if class.contains(CharClass::STRUCTURAL) {
            self.emit_char(c);
            return Step::Advance;
        }

        self.begin(c);
        self.state = if class.contains(CharClass::QUOTE) {
            ScanState::String { quote: c }
        } else if class.contains(CharClass::NUMBER_BODY) {
            ScanState::Number
        } else {
            ScanState::Expression
        };
        Step::Advance
    }

    // ─── Numerals ─────────────────────────────────────────────────────

    fn number(&mut self, c: char) -> Result<Step, LexicalError> {
        if self.acc_text() == BASE_PREFIX {
            if let Some(base) = NumberBase::from_indicator(c) {
                self.append(c);
                self.state = ScanState::NumberBased(base);
                return Ok(Step::Advance);
            }
        }

        let class = CharClass::of(c);
        if class.contains(CharClass::NUMBER_BODY) {
            self.append(c);
            Ok(Step::Advance)
        } else if class.contains(CharClass::EXPONENT) {
            let [lower, upper] = EXPONENTS;
            if memchr::memchr2(lower, upper, self.acc_text().as_bytes()).is_some() {
                return Err(LexicalError::duplicate_exponent(
                    c,
                    self.cursor.pos(),
                    self.acc.start,
                ));
            }
            self.append(c);
            self.state = ScanState::NumberExponentPending;
            Ok(Step::Advance)
        } else {
            Ok(self.end_literal(class))
        }
    }

    fn exponent(&mut self, c: char) -> Result<Step, LexicalError> {
        if is(c, CharClass::NUMBER_BODY | CharClass::EXPONENT_SIGN) {
            self.append(c);
            self.state = ScanState::Number;
            Ok(Step::Advance)
        } else {
            Err(LexicalError::invalid_exponent(
                c,
                self.cursor.pos(),
                self.acc.start,
            ))
        }
    }

    fn based_number(&mut self, c: char, base: NumberBase) -> Step {
        let class = CharClass::of(c);
        if class.intersects(base.alphabet()) {
            self.append(c);
            Step::Advance
        } else {
            self.end_literal(class)
        }
    }

    /// Close a numeral on a character outside its alphabet.
    ///
    /// Whitespace is consumed; anything else starts the next token.
    fn end_literal(&mut self, class: CharClass) -> Step {
        self.flush();
        self.state = ScanState::None;
        if class.contains(CharClass::WHITESPACE) {
            Step::Advance
        } else {
            Step::Reconsume
        }
    }

    // ─── Expressions ──────────────────────────────────────────────────

    fn expression(&mut self, c: char) -> Step {
        let class = CharClass::of(c);
        if class.contains(CharClass::WHITESPACE) {
            self.flush_expression();
            self.state = ScanState::None;
            Step::Advance
        } else if class.contains(CharClass::STRUCTURAL) {
            self.flush_expression();
            self.state = ScanState::None;
            self.emit_char(c);
            Step::Advance
        } else if class.contains(CharClass::NUMBER_BODY) {
            // A digit after non-digits starts a new token: `atan2` -> `atan`, `2`.
            self.flush_expression();
            self.state = ScanState::None;
            Step::Reconsume
        } else {
            self.append(c);
            Step::Advance
        }
    }

    /// Emit the accumulated expression, splitting off a configured suffix.
    fn flush_expression(&mut self) {
        let text = self.acc_text();
        match self.config.split_point(text) {
            Some(head) => {
                let (head, suffix) = text.split_at(head);
                self.emit(head);
                self.emit(suffix);
            }
            None => self.emit(text),
        }
    }

    // ─── Strings ──────────────────────────────────────────────────────

    /// Jump over string content up to the next candidate closing quote.
    fn skip_string_body(&mut self, quote: char) {
        // Quotes are ASCII by construction of the QUOTE class.
        let mut buf = [0u8; 4];
        let needle = quote.encode_utf8(&mut buf).as_bytes()[0];
        if self.cursor.eat_until(needle) > 0 {
            self.acc.end = self.cursor.pos();
        }
    }

    fn string(&mut self, c: char, quote: char) -> Step {
        self.append(c);
        if c == quote {
            let text = self.acc_text().as_bytes();
            let escapes = text[..text.len() - 1]
                .iter()
                .rev()
                .take_while(|&&b| is(char::from(b), CharClass::ESCAPE))
                .count();
            if escapes % 2 == 0 {
                self.flush();
                self.state = ScanState::None;
            }
        }
        Step::Advance
    }

    // ─── End of input ─────────────────────────────────────────────────

    fn finish(&mut self) -> Result<(), LexicalError> {
        debug_assert!(self.cursor.is_eof());
        let end = self.cursor.source_len();
        match self.state {
            ScanState::None => Ok(()),
            // The trailing-punctuation split is not applied here: `key:` at
            // the very end stays one token.
            ScanState::Number | ScanState::NumberBased(_) | ScanState::Expression => {
                self.flush();
                Ok(())
            }
            ScanState::NumberExponentPending => {
                Err(LexicalError::incomplete_exponent(end, self.acc.start))
            }
            ScanState::String { quote } => {
                Err(LexicalError::unterminated_string(quote, end, self.acc.start))
            }
        }
    }

    // ─── Accumulator ──────────────────────────────────────────────────

    fn begin(&mut self, c: char) {
        let start = self.cursor.pos();
        self.acc = Accumulator {
            start,
            end: start + c.len_utf8(),
        };
    }

    fn append(&mut self, c: char) {
        debug_assert_eq!(self.acc.end, self.cursor.pos(), "non-contiguous append");
        self.acc.end += c.len_utf8();
    }

    fn acc_text(&self) -> &'a str {
        self.cursor.slice(self.acc.start, self.acc.end)
    }

    fn flush(&mut self) {
        let text = self.acc_text();
        self.emit(text);
    }

    fn emit_char(&mut self, c: char) {
        let start = self.cursor.pos();
        let text = self.cursor.slice(start, start + c.len_utf8());
        self.emit(text);
    }

    fn emit(&mut self, token: &'a str) {
        tracing::trace!(token, "emit");
        self.tokens.push(token);
    }
}
