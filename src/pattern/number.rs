//! Number sequence grammar.
//!
//! Detects runs of digits that probably spell out a phone number or some
//! other identifier, however they were typed:
//! - ASCII digits with punctuation: "(123) 456-7890", "0. 1. 2. 3 45"
//! - English words: "oh one two - three four five"
//! - full-width digits and punctuation: "１２３－４５６－７８９０", "１２３　４５６"
//! - circled digits and Chinese numerals: "七八九十---三四五六"

use super::grammar::Grammar;
use super::PatternProvider;
use crate::error::{TextGuardError, TextGuardResult};

const DIGIT_WORDS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "oh",
];

/// A single digit in any of the accepted spellings.
pub fn digit() -> Grammar {
    let mut alternatives = vec![Grammar::raw("[0-9]")];
    alternatives.extend(DIGIT_WORDS.iter().map(|w| Grammar::literal(w)));
    // full-width digits
    alternatives.push(Grammar::raw(r"[\x{FF10}-\x{FF19}]"));
    // circled digits ⓪ ① .. ⑨
    alternatives.push(Grammar::raw(r"[\x{24EA}\x{2460}-\x{2468}]"));
    alternatives.push(Grammar::raw("[〇零一二三四五六七八九十]"));
    Grammar::any_of(alternatives)
}

/// Anything typed between two digits: whitespace (including the ideographic
/// space), dashes of any kind, underscores, and ASCII or full-width
/// parentheses, periods and commas.
pub fn separator() -> Grammar {
    Grammar::raw(r"[().,\s\p{Pd}_\x{3000}\x{FF08}\x{FF09}\x{FF0C}\x{FF0E}]*")
}

fn opening_paren() -> Grammar {
    Grammar::raw(r"[(\x{FF08}]\s*").optional()
}

fn closing_paren() -> Grammar {
    Grammar::raw(r"\s*[)\x{FF09}]").optional()
}

/// Pattern provider for sequences of at least `min_numbers` digits.
#[derive(Debug, Clone)]
pub struct NumberSequencePattern {
    min_numbers: usize,
    pattern: String,
}

impl NumberSequencePattern {
    /// # Errors
    /// Returns [`TextGuardError::InvalidInput`] when `min_numbers` is zero,
    /// and [`TextGuardError::Pattern`] when the expanded repetition is too
    /// large to compile.
    pub fn new(min_numbers: usize) -> TextGuardResult<Self> {
        if min_numbers == 0 {
            return Err(TextGuardError::invalid_input(
                "min_numbers",
                "must be at least 1",
            ));
        }
        let pattern = opening_paren()
            .then(digit())
            .then(separator().then(digit()).at_least(min_numbers - 1))
            .then(closing_paren())
            .into_string();
        super::grammar::compile_case_insensitive(&pattern)?;
        Ok(Self {
            min_numbers,
            pattern,
        })
    }

    pub fn min_numbers(&self) -> usize {
        self.min_numbers
    }
}

impl PatternProvider for NumberSequencePattern {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn name(&self) -> &str {
        "number_sequence"
    }
}
