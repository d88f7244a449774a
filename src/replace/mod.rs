//! Content replacers and the machinery that applies them.
//!
//! A content replacer pairs a compiled, case-insensitive pattern with a fixed
//! replacement string. Replacers are collected into a [`ReplacerChain`] and
//! applied in order; [`ContentReplacementModel`] adds the optional
//! HTML-escape pass and the get/set contract of a bound input field.

pub mod chain;
pub mod escape;
pub mod model;

pub use chain::{ReplacerChain, ReplacerChainBuilder};
pub use escape::escape_markup;
pub use model::{ContentReplacementModel, RemoveCharactersModel, StringModel, TextModel};

use crate::error::TextGuardResult;
use crate::pattern::{
    grammar, CustomPattern, EmailPattern, NewlinePattern, NumberSequencePattern, PatternProvider,
    WeChatPattern, WebLinkPattern,
};
use regex::Regex;
use std::fmt;

/// A pattern and the text that replaces every match of it.
///
/// The replacement never depends on the matched text: it is inserted
/// verbatim, `$` included.
pub trait ContentReplacer: Send + Sync + fmt::Debug {
    /// Compiled, case-insensitive pattern.
    fn pattern(&self) -> &Regex;

    fn replacement(&self) -> &str;

    /// Short label used in log output.
    fn name(&self) -> &str;
}

/// What a match gets replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Static text, e.g. a mask like `[blocked]`
    Text(String),

    /// An anchor tag: `<a href="{href}">{text}</a>`
    Link { href: String, text: String },
}

impl Replacement {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            text: text.into(),
        }
    }

    /// Renders the replacement string.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Link { href, text } => format!("<a href=\"{}\">{}</a>", href, text),
        }
    }
}

/// The standard [`ContentReplacer`]: any [`PatternProvider`] paired with a
/// [`Replacement`], compiled once.
#[derive(Clone)]
pub struct Replacer {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl Replacer {
    /// Compiles the provider's pattern and renders the replacement.
    pub fn new(provider: &dyn PatternProvider, replacement: Replacement) -> TextGuardResult<Self> {
        let pattern = grammar::compile_case_insensitive(provider.pattern())?;
        log::debug!(
            "Compiled {} replacer ({} byte pattern)",
            provider.name(),
            provider.pattern().len()
        );
        Ok(Self {
            name: provider.name().to_string(),
            pattern,
            replacement: replacement.render(),
        })
    }

    /// Email addresses using the generic grammar.
    pub fn email(replacement: Replacement) -> TextGuardResult<Self> {
        Self::new(&EmailPattern::generic(), replacement)
    }

    /// Email addresses, with the tighter grammar for the given mail domains.
    pub fn email_with_domains<I, S>(domains: I, replacement: Replacement) -> TextGuardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(&EmailPattern::with_domains(domains)?, replacement)
    }

    /// Email addresses replaced with a link to `href` showing `text`.
    pub fn email_to_link(href: &str, text: &str) -> TextGuardResult<Self> {
        Self::email(Replacement::link(href, text))
    }

    /// Sequences of at least `min_numbers` digits.
    pub fn number_sequence(min_numbers: usize, replacement: Replacement) -> TextGuardResult<Self> {
        Self::new(&NumberSequencePattern::new(min_numbers)?, replacement)
    }

    /// Number sequences replaced with a link to `href` showing `text`.
    pub fn number_sequence_to_link(
        min_numbers: usize,
        href: &str,
        text: &str,
    ) -> TextGuardResult<Self> {
        Self::number_sequence(min_numbers, Replacement::link(href, text))
    }

    pub fn web_link(replacement: Replacement) -> TextGuardResult<Self> {
        Self::new(&WebLinkPattern, replacement)
    }

    pub fn web_link_to_link(href: &str, text: &str) -> TextGuardResult<Self> {
        Self::web_link(Replacement::link(href, text))
    }

    pub fn wechat(replacement: Replacement) -> TextGuardResult<Self> {
        Self::new(&WeChatPattern, replacement)
    }

    /// Newlines to `<br/>` tags.
    pub fn newline() -> TextGuardResult<Self> {
        Self::new(&NewlinePattern, Replacement::text("<br/>"))
    }

    /// An arbitrary caller-supplied pattern.
    pub fn custom(pattern: &str, replacement: Replacement) -> TextGuardResult<Self> {
        Self::new(&CustomPattern::new(pattern)?, replacement)
    }
}

impl ContentReplacer for Replacer {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn replacement(&self) -> &str {
        &self.replacement
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Replacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replacer")
            .field("name", &self.name)
            .field("replacement", &self.replacement)
            .finish()
    }
}
