//! First/family name plausibility checks.
//!
//! [`RealFullNameValidator`] rejects inputs that are unlikely to be a real
//! person's name: single letters, the same value twice, digits and
//! punctuation, titles ("Mrs."), letter soup without vowels, domains and
//! denylisted phrases. Rules run in a fixed order and the first failing one
//! is reported.
//!
//! Names written in CJK scripts are commonly a single character, so the
//! two-character minimum only applies to Latin input.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

use crate::error::{TextGuardError, TextGuardResult};
use crate::pattern::grammar::{compile_case_insensitive, Grammar};

/// Punctuation never found in a real name. `&` and `/` are not listed since
/// "John & Jane" is acceptable once per name.
pub const DEFAULT_ILLEGAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '*', '(', ')', '+', '_', '=', '<', '>', '?', ':', ';', '"',
    '[', ']', '{', '}', '|', '~', '\\',
];

pub const DEFAULT_TITLES: &[&str] = &["mr", "mrs", "ms", "miss", "dr"];

/// Characters that may appear at most once in a name.
const ONE_CHAR_LIMITS: &[char] = &['&', '/'];

/// Characters names are split on before denylist comparison.
const TOKEN_SEPARATORS: &[char] = &['.', ' ', '-', '&', '/'];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

static DEFAULT_TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| title_pattern(DEFAULT_TITLES).expect("Valid title regex"));

static DOMAIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[\p{L}\p{N}]\.[a-z]{2,}").expect("Valid domain regex"));

/// Which input a violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Family,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first name"),
            Self::Family => f.write_str("family name"),
        }
    }
}

/// The name rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRule {
    /// Too short, or two characters one of which is a dot
    MinimumLength,
    /// First and family name are the same
    SameAsOtherName,
    /// Digits or forbidden punctuation
    IllegalCharacters,
    /// A title such as "Mr." instead of a name
    Title,
    /// Nothing but vowels, or nothing but consonants
    VowelConsonantMix,
    /// Looks like a domain name
    DomainLike,
    /// `&` or `/` more than once
    RepeatedSeparator,
    /// Starts or ends with something other than a letter
    NonLetterBoundary,
    /// On the denylist
    Denylisted,
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MinimumLength => "minimum length",
            Self::SameAsOtherName => "same as other name",
            Self::IllegalCharacters => "illegal characters",
            Self::Title => "title",
            Self::VowelConsonantMix => "vowel/consonant mix",
            Self::DomainLike => "domain-like",
            Self::RepeatedSeparator => "repeated separator",
            Self::NonLetterBoundary => "non-letter boundary",
            Self::Denylisted => "denylisted",
        };
        f.write_str(label)
    }
}

/// The first rule a pair of names failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} failed rule: {rule}")]
pub struct NameViolation {
    pub field: NameField,
    pub rule: NameRule,
}

/// Cleans up a first/family pair before the rules run.
pub trait NameNormalizer: Send + Sync {
    fn normalize(&self, first: &str, family: &str) -> (String, String);
}

/// Leaves both names untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl NameNormalizer for IdentityNormalizer {
    fn normalize(&self, first: &str, family: &str) -> (String, String) {
        (first.to_string(), family.to_string())
    }
}

/// Removes words of the first name that repeat a word of the family name,
/// as when someone types "John Smith" / "Smith". The first name is kept as
/// is when every word would be removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatedTokenNormalizer;

impl NameNormalizer for RepeatedTokenNormalizer {
    fn normalize(&self, first: &str, family: &str) -> (String, String) {
        let family_tokens: HashSet<String> =
            family.split_whitespace().map(str::to_lowercase).collect();
        let kept: Vec<&str> = first
            .split_whitespace()
            .filter(|t| !family_tokens.contains(&t.to_lowercase()))
            .collect();
        if kept.is_empty() {
            (first.to_string(), family.to_string())
        } else {
            (kept.join(" "), family.to_string())
        }
    }
}

/// Validates a first/family name pair.
pub struct RealFullNameValidator {
    illegal_chars: HashSet<char>,
    titles: Regex,
    denylist: HashSet<String>,
    normalizer: Box<dyn NameNormalizer>,
}

impl RealFullNameValidator {
    pub fn builder() -> RealFullNameValidatorBuilder {
        RealFullNameValidatorBuilder::default()
    }

    /// Runs every rule, returning the first violation.
    pub fn validate(&self, first: &str, family: &str) -> Result<(), NameViolation> {
        let (first, family) = self.normalizer.normalize(first, family);
        let result = self.check(&first, &family);
        if let Err(violation) = &result {
            log::info!(
                "Name validation failed on {} ({}): first=[{}], family=[{}]",
                violation.field,
                violation.rule,
                first,
                family
            );
        }
        result
    }

    fn check(&self, first: &str, family: &str) -> Result<(), NameViolation> {
        let names = [(NameField::First, first), (NameField::Family, family)];
        let each = |rule: NameRule, fails: &dyn Fn(&str) -> bool| -> Result<(), NameViolation> {
            for (field, name) in names {
                if fails(name) {
                    return Err(NameViolation { field, rule });
                }
            }
            Ok(())
        };

        each(NameRule::MinimumLength, &|n: &str| !satisfies_length_without_dot(n))?;
        if names_equal(first, family) {
            return Err(NameViolation {
                field: NameField::First,
                rule: NameRule::SameAsOtherName,
            });
        }
        each(NameRule::IllegalCharacters, &|n: &str| {
            contains_illegal_chars(n, &self.illegal_chars)
        })?;
        each(NameRule::Title, &|n: &str| self.titles.is_match(n.trim()))?;
        each(NameRule::VowelConsonantMix, &all_vowels_or_consonants)?;
        each(NameRule::DomainLike, &is_domain)?;
        each(NameRule::RepeatedSeparator, &exceeds_one_char_limits)?;
        each(NameRule::NonLetterBoundary, &|n: &str| !first_and_last_are_letters(n))?;
        each(NameRule::Denylisted, &|n: &str| contains_illegal_value(&self.denylist, n))?;
        Ok(())
    }
}

impl fmt::Debug for RealFullNameValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealFullNameValidator")
            .field("illegal_chars", &self.illegal_chars.len())
            .field("titles", &self.titles.as_str())
            .field("denylist", &self.denylist.len())
            .finish()
    }
}

/// Builder for [`RealFullNameValidator`].
pub struct RealFullNameValidatorBuilder {
    illegal_chars: Vec<char>,
    titles: Vec<String>,
    denylist: Vec<String>,
    normalizer: Box<dyn NameNormalizer>,
}

impl Default for RealFullNameValidatorBuilder {
    fn default() -> Self {
        Self {
            illegal_chars: DEFAULT_ILLEGAL_CHARS.to_vec(),
            titles: DEFAULT_TITLES.iter().map(|t| t.to_string()).collect(),
            denylist: Vec::new(),
            normalizer: Box::new(RepeatedTokenNormalizer),
        }
    }
}

impl RealFullNameValidatorBuilder {
    pub fn illegal_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.illegal_chars = chars.into_iter().collect();
        self
    }

    pub fn titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn denylist<I, S>(mut self, denylist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = denylist.into_iter().map(Into::into).collect();
        self
    }

    pub fn normalizer(mut self, normalizer: impl NameNormalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    /// # Errors
    /// Returns [`TextGuardError::InvalidInput`] when no non-blank title is given.
    pub fn build(self) -> TextGuardResult<RealFullNameValidator> {
        let titles = title_pattern(&self.titles)?;
        Ok(RealFullNameValidator {
            illegal_chars: self.illegal_chars.into_iter().collect(),
            titles,
            denylist: self
                .denylist
                .iter()
                .map(|entry| normalize_tokens(entry))
                .filter(|entry| !entry.is_empty())
                .collect(),
            normalizer: self.normalizer,
        })
    }
}

fn title_pattern<S: AsRef<str>>(titles: &[S]) -> TextGuardResult<Regex> {
    let titles: Vec<&str> = titles
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();
    if titles.is_empty() {
        return Err(TextGuardError::invalid_input(
            "titles",
            "at least one title is required",
        ));
    }
    let grammar = Grammar::raw("^")
        .then(Grammar::any_of(titles.into_iter().map(Grammar::literal)))
        .then(Grammar::raw(r"(?:\.|\s|$)"));
    compile_case_insensitive(grammar.as_str())
}

/// True when every character belongs to the Latin script (or is not a letter
/// at all, like spaces and punctuation).
pub fn is_latin(input: &str) -> bool {
    input.chars().all(|c| {
        !c.is_alphabetic()
            || c.is_ascii()
            || ('\u{00C0}'..='\u{024F}').contains(&c)
            || ('\u{1E00}'..='\u{1EFF}').contains(&c)
    })
}

/// At least two characters (one when non-Latin letters are present), and
/// not a two-character abbreviation like "J.".
pub fn satisfies_length_without_dot(input: &str) -> bool {
    let input = input.trim();
    let length = input.chars().count();
    let minimum = if is_latin(input) { 2 } else { 1 };
    if length < minimum {
        return false;
    }
    !(length == 2 && input.contains('.'))
}

pub fn names_equal(first: &str, family: &str) -> bool {
    first.trim().to_lowercase() == family.trim().to_lowercase()
}

/// Digits of any script, or any of `illegal_chars`.
pub fn contains_illegal_chars(input: &str, illegal_chars: &HashSet<char>) -> bool {
    input
        .chars()
        .any(|c| c.is_numeric() || illegal_chars.contains(&c))
}

/// Starts with one of the default titles followed by a dot, whitespace or
/// nothing.
pub fn contains_title(input: &str) -> bool {
    DEFAULT_TITLE_PATTERN.is_match(input.trim())
}

/// Letters, accents stripped, are all vowels or all consonants. A `y` makes
/// the name neither, so "Ly" passes.
pub fn all_vowels_or_consonants(input: &str) -> bool {
    let mut vowels = 0;
    let mut consonants = 0;
    for c in input.nfd().filter(char::is_ascii_alphabetic) {
        match c.to_ascii_lowercase() {
            'y' => return false,
            c if VOWELS.contains(&c) => vowels += 1,
            _ => consonants += 1,
        }
    }
    (vowels > 0) != (consonants > 0)
}

/// A letter or digit, a dot, then two or more letters ("example.com").
pub fn is_domain(input: &str) -> bool {
    DOMAIN_PATTERN.is_match(input)
}

/// `&` or `/` occurs more than once.
pub fn exceeds_one_char_limits(input: &str) -> bool {
    ONE_CHAR_LIMITS
        .iter()
        .any(|limited| input.chars().filter(|c| c == limited).count() > 1)
}

pub fn first_and_last_are_letters(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    match (lower.chars().next(), lower.chars().last()) {
        (Some(first), Some(last)) => first.is_alphabetic() && last.is_alphabetic(),
        _ => false,
    }
}

/// Splits on `. -&/`, lower-cases and joins the words with single spaces.
fn normalize_tokens(input: &str) -> String {
    input
        .split(TOKEN_SEPARATORS)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The whole name, or any one of its words, is on the denylist. Denylist
/// entries must already be normalised.
pub fn contains_illegal_value(denylist: &HashSet<String>, input: &str) -> bool {
    let normalized = normalize_tokens(input);
    denylist.contains(&normalized) || normalized.split(' ').any(|t| denylist.contains(t))
}
