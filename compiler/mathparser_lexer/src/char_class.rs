//! Character classification tables for the scanner.
//!
//! Every transition in the state machine is driven by membership tests
//! against a small set of fixed character classes. The classes are packed
//! into a [`CharClass`] bit set and looked up through a 128-entry table
//! built at compile time, so the hot loop does one indexed load per
//! character instead of scanning class strings.
//!
//! Characters outside ASCII belong to no class and therefore accumulate as
//! generic expression text.

use bitflags::bitflags;

bitflags! {
    /// Class memberships of a single character.
    ///
    /// A character may belong to several classes at once (`0` is a number
    /// body character and a member of all three restricted alphabets).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u16 {
        /// Space, tab, newline. Always separates tokens.
        const WHITESPACE = 1 << 0;
        /// `"` or `'`. Opens a string closed by the same character.
        const QUOTE = 1 << 1;
        /// Backslash. Only meaningful inside strings.
        const ESCAPE = 1 << 2;
        /// Digits, `.` and `_`.
        const NUMBER_BODY = 1 << 3;
        /// `e` / `E`.
        const EXPONENT = 1 << 4;
        /// `-`, accepted right after an exponent marker.
        const EXPONENT_SIGN = 1 << 5;
        /// Digits, `A-F`, `a-f`, `_`.
        const HEX_DIGIT = 1 << 6;
        /// `0-7`, `_`.
        const OCTAL_DIGIT = 1 << 7;
        /// `0`, `1`, `_`.
        const BINARY_DIGIT = 1 << 8;
        /// `()[]{}`. Always a single-character token.
        const STRUCTURAL = 1 << 9;
    }
}

const WHITESPACE: &[u8] = b" \t\n";
const QUOTES: &[u8] = b"\"'";
const ESCAPE: &[u8] = b"\\";
const NUMBER_BODY: &[u8] = b"0123456789._";
/// Exponent markers, lower case first.
pub(crate) const EXPONENTS: [u8; 2] = *b"eE";
const EXPONENT_SIGN: &[u8] = b"-";
const HEX_DIGITS: &[u8] = b"0123456789ABCDEFabcdef_";
const OCTAL_DIGITS: &[u8] = b"01234567_";
const BINARY_DIGITS: &[u8] = b"01_";
const STRUCTURAL: &[u8] = b"()[]{}";

/// A numeral that is exactly this text may take a base indicator next
/// (`0x`, `0o`, `0b`).
pub const BASE_PREFIX: &str = "0";

static TABLE: [CharClass; 128] = build_table();

const fn mark(mut table: [CharClass; 128], chars: &[u8], class: CharClass) -> [CharClass; 128] {
    let mut i = 0;
    while i < chars.len() {
        let idx = chars[i] as usize;
        table[idx] = table[idx].union(class);
        i += 1;
    }
    table
}

const fn build_table() -> [CharClass; 128] {
    let mut table = [CharClass::empty(); 128];
    table = mark(table, WHITESPACE, CharClass::WHITESPACE);
    table = mark(table, QUOTES, CharClass::QUOTE);
    table = mark(table, ESCAPE, CharClass::ESCAPE);
    table = mark(table, NUMBER_BODY, CharClass::NUMBER_BODY);
    table = mark(table, &EXPONENTS, CharClass::EXPONENT);
    table = mark(table, EXPONENT_SIGN, CharClass::EXPONENT_SIGN);
    table = mark(table, HEX_DIGITS, CharClass::HEX_DIGIT);
    table = mark(table, OCTAL_DIGITS, CharClass::OCTAL_DIGIT);
    table = mark(table, BINARY_DIGITS, CharClass::BINARY_DIGIT);
    table = mark(table, STRUCTURAL, CharClass::STRUCTURAL);
    table
}

impl CharClass {
    /// Look up the classes `c` belongs to.
    #[inline]
    pub fn of(c: char) -> CharClass {
        if c.is_ascii() {
            TABLE[c as usize]
        } else {
            CharClass::empty()
        }
    }
}

/// Returns `true` if `c` belongs to any class in `class`.
#[inline]
pub fn is(c: char, class: CharClass) -> bool {
    CharClass::of(c).intersects(class)
}

/// Radix selected by a base prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumberBase {
    Hex,
    Octal,
    Binary,
}

impl NumberBase {
    /// Map the character following a leading `0` to its base, if any.
    pub fn from_indicator(c: char) -> Option<NumberBase> {
        match c {
            'x' => Some(NumberBase::Hex),
            'o' => Some(NumberBase::Octal),
            'b' => Some(NumberBase::Binary),
            _ => None,
        }
    }

    /// The character class whose members continue a numeral in this base.
    pub fn alphabet(self) -> CharClass {
        match self {
            NumberBase::Hex => CharClass::HEX_DIGIT,
            NumberBase::Octal => CharClass::OCTAL_DIGIT,
            NumberBase::Binary => CharClass::BINARY_DIGIT,
        }
    }

    /// Numeric radix, for consumers converting the literal.
    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Hex => 16,
            NumberBase::Octal => 8,
            NumberBase::Binary => 2,
        }
    }
}
