//! Small combinator layer for building regular expression grammars.
//!
//! Patterns in this crate are assembled from named fragments (a digit token,
//! a separator token, the many spellings of "dot", ...). Each fragment is a
//! [`Grammar`] value that can be compiled on its own, so the pieces are
//! testable in isolation rather than only as one monolithic expression.
//!
//! A fragment never exposes a top-level alternation: [`Grammar::any_of`] and
//! every quantifier wrap their operand in a non-capturing group, which keeps
//! [`Grammar::then`] a plain concatenation.

use crate::error::{TextGuardError, TextGuardResult};
use regex::{Regex, RegexBuilder};
use std::fmt;

/// A fragment of a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grammar(String);

impl Grammar {
    /// Wraps a hand-written expression. The expression must not contain a
    /// top-level `|`.
    pub fn raw(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    /// Matches `text` literally.
    pub fn literal(text: &str) -> Self {
        Self(regex::escape(text))
    }

    /// Matches `text` literally, allowing any amount of whitespace between
    /// its characters ("gmail" also matches "g mail" and "gm ail").
    pub fn spaced_literal(text: &str) -> Self {
        let parts: Vec<String> = text
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Self(parts.join(r"\s*"))
    }

    /// Alternation of the given fragments, tried in order.
    pub fn any_of<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Grammar>,
    {
        let parts: Vec<String> = alternatives.into_iter().map(|g| g.0).collect();
        Self(format!("(?:{})", parts.join("|")))
    }

    /// Concatenation: `self` followed by `next`.
    pub fn then(self, next: Grammar) -> Self {
        Self(self.0 + &next.0)
    }

    pub fn optional(self) -> Self {
        Self(format!("(?:{})?", self.0))
    }

    pub fn one_or_more(self) -> Self {
        Self(format!("(?:{})+", self.0))
    }

    pub fn zero_or_more(self) -> Self {
        Self(format!("(?:{})*", self.0))
    }

    /// At least `min` repetitions.
    pub fn at_least(self, min: usize) -> Self {
        Self(format!("(?:{}){{{},}}", self.0, min))
    }

    /// Between `min` and `max` repetitions, inclusive.
    pub fn between(self, min: usize, max: usize) -> Self {
        Self(format!("(?:{}){{{},{}}}", self.0, min, max))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Compiles the fragment for case-insensitive searching.
    pub fn compile(&self) -> TextGuardResult<Regex> {
        compile_case_insensitive(&self.0)
    }

    /// Compiles the fragment so that it only matches an entire input.
    pub fn compile_anchored(&self) -> TextGuardResult<Regex> {
        compile_case_insensitive(&format!("^(?:{})$", self.0))
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Grammar> for String {
    fn from(grammar: Grammar) -> Self {
        grammar.0
    }
}

/// Compiles `pattern` with case-insensitive matching, the mode every
/// replacement in this crate runs in.
pub fn compile_case_insensitive(pattern: &str) -> TextGuardResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| TextGuardError::Pattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}
