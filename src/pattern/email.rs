//! Email address grammar.
//!
//! Besides well-formed addresses this recognises the ways people disguise
//! them in free text so a human can still read them:
//! - "user at gmail dot com", "user (at) example (period) com"
//! - "user1234 [at] example.com", "user999 <at> gmail <dot> com"
//! - full-width and small-form at signs ("user＠gmail.com")
//! - letters split by spaces ("u s e r @ g m a i l . c o m")
//!
//! A list of well-known mail domains enables a tighter second form that can
//! accept looser spellings ("a.b @out look . com", "user at yahoo com")
//! without matching ordinary sentences.

use super::grammar::Grammar;
use super::PatternProvider;
use crate::error::{TextGuardError, TextGuardResult};
use once_cell::sync::Lazy;

/// Characters allowed in the part of an address preceding the at sign.
const LOCAL_CHARS: &str = r"[a-z0-9._%+\-_]";
/// Characters allowed in a domain label.
const LABEL_CHARS: &str = r"[a-z0-9\-]";
/// Ascii, full-width (U+FF20) and small-form (U+FE6B) at signs.
const AT_SIGNS: &str = r"[@\x{FF20}\x{FE6B}]";
const OPEN_BRACKET: &str = r"[\[{(<]";
const CLOSE_BRACKET: &str = r"[\]})>]";

/// A run of local-part characters, or the same characters each followed by a
/// single space ("u s e r ").
pub fn local_part() -> Grammar {
    Grammar::raw(r"\b").then(Grammar::any_of([
        Grammar::raw(LOCAL_CHARS).one_or_more(),
        Grammar::raw(format!("{LOCAL_CHARS} ")).one_or_more(),
    ]))
}

/// The ways an at sign gets typed: the glyph itself, the word "at", or "at"
/// (or just "a") in brackets, including runs like `)(@)(`.
pub fn at() -> Grammar {
    Grammar::any_of([
        Grammar::raw(format!(r"\s*{AT_SIGNS}+\s*")),
        Grammar::raw(" *at +"),
        Grammar::raw(format!(
            r"\s*{CLOSE_BRACKET}?\s*{OPEN_BRACKET}\s*(?:at?|{AT_SIGNS})\s*{CLOSE_BRACKET}\s*{OPEN_BRACKET}?\s*"
        )),
    ])
}

/// [`at`], plus "at." with a trailing dot. Only safe when a known domain must
/// follow, otherwise sentences like "to eat. And" would match.
pub fn at_dot() -> Grammar {
    Grammar::any_of([at(), Grammar::raw(r" *at\s*\.\s*")])
}

/// The ways a dot gets typed between domain labels: one or more periods,
/// the words "dot" or "period", or either word in brackets.
pub fn dot() -> Grammar {
    Grammar::raw(format!(r"\s*{CLOSE_BRACKET}?")).then(Grammar::any_of([
        Grammar::raw(r"\s*\.+\s*"),
        Grammar::raw(format!(
            r"\s*{OPEN_BRACKET}\s*(?:dot|period)\s*{CLOSE_BRACKET}\s*"
        )),
        Grammar::raw(" +(?:dot|period) +"),
    ]))
}

/// One domain label followed by a dot.
pub fn subdomain() -> Grammar {
    Grammar::any_of([
        Grammar::raw(LABEL_CHARS).one_or_more(),
        Grammar::raw(format!("{LABEL_CHARS} ")).one_or_more(),
    ])
    .then(dot())
}

/// A top level domain of two to six letters, possibly space separated.
pub fn generic_tld() -> Grammar {
    Grammar::any_of([
        Grammar::raw("[a-z]").between(1, 5),
        Grammar::raw("[a-z] ").between(1, 5),
    ])
    .then(Grammar::raw("[a-z]"))
}

/// Optional suffix commonly following a known mail domain: ".com", ".net",
/// a country code, ".co.uk" or ".com.au". The separator may be a lone space.
pub fn common_tlds() -> Grammar {
    let suffix = Grammar::any_of([
        Grammar::raw("com"),
        Grammar::raw("net"),
        Grammar::raw("[a-z][a-z]"),
        Grammar::raw("co").then(dot()).then(Grammar::raw("[a-z][a-z]")),
        Grammar::raw("com").then(dot()).then(Grammar::raw("[a-z][a-z]")),
    ]);
    Grammar::any_of([dot(), Grammar::raw(" ")])
        .optional()
        .then(suffix)
        .optional()
}

/// Domain part built from a collection of mail domains with their top level
/// domain omitted (e.g. "gmail", "yahoo"). Letters of a domain may be split
/// by whitespace, which catches "g mail.com" without the generic grammar
/// having to accept spaces everywhere.
pub fn known_domains<I, S>(domains: I) -> TextGuardResult<Grammar>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut alternatives = Vec::new();
    for domain in domains {
        let domain = domain.as_ref().trim().to_lowercase();
        if domain.is_empty() {
            return Err(TextGuardError::invalid_input(
                "domains",
                "email domains must not be blank",
            ));
        }
        alternatives.push(Grammar::spaced_literal(&domain));
    }
    if alternatives.is_empty() {
        return Err(TextGuardError::invalid_input(
            "domains",
            "at least one email domain is required; use EmailPattern::generic() otherwise",
        ));
    }
    Ok(subdomain()
        .zero_or_more()
        .then(Grammar::any_of(alternatives))
        .then(common_tlds()))
}

/// The generic address grammar: local part, at sign, one or more
/// subdomains, top level domain.
pub fn generic_email() -> Grammar {
    local_part()
        .then(at())
        .then(subdomain().one_or_more())
        .then(generic_tld())
}

static GENERIC_PATTERN: Lazy<String> = Lazy::new(|| generic_email().into_string());

/// Pattern provider for email addresses.
#[derive(Debug, Clone)]
pub struct EmailPattern {
    pattern: String,
}

impl EmailPattern {
    /// The generic grammar only.
    pub fn generic() -> Self {
        Self {
            pattern: GENERIC_PATTERN.clone(),
        }
    }

    /// The generic grammar, or the tighter grammar built from `domains`.
    ///
    /// # Errors
    /// Returns [`TextGuardError::InvalidInput`] when `domains` is empty or
    /// contains a blank entry.
    pub fn with_domains<I, S>(domains: I) -> TextGuardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specific = local_part().then(at_dot()).then(known_domains(domains)?);
        let pattern = Grammar::any_of([generic_email(), specific]).into_string();
        log::debug!("Built email pattern with known domains ({} bytes)", pattern.len());
        Ok(Self { pattern })
    }
}

impl Default for EmailPattern {
    fn default() -> Self {
        Self::generic()
    }
}

impl PatternProvider for EmailPattern {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn name(&self) -> &str {
        "email"
    }
}
