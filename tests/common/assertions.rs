//! Custom assertions for pattern tests.
//!
//! Patterns are tested against whole strings, so each assertion compiles the
//! provider's pattern anchored at both ends.

use regex::{Regex, RegexBuilder};
use textguard::PatternProvider;

/// Compiles `provider`'s pattern case-insensitively, anchored to the whole
/// input.
pub fn anchored(provider: &dyn PatternProvider) -> Regex {
    RegexBuilder::new(&format!("^(?:{})$", provider.pattern()))
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("{} pattern does not compile: {}", provider.name(), e))
}

/// Asserts that the whole of every input matches.
///
/// # Panics
/// Panics listing every input that does not match.
pub fn assert_all_match(provider: &dyn PatternProvider, inputs: &[&str]) {
    let regex = anchored(provider);
    let failures: Vec<&str> = inputs
        .iter()
        .copied()
        .filter(|input| !regex.is_match(input))
        .collect();
    assert!(
        failures.is_empty(),
        "{} pattern should match the whole of: {:?}",
        provider.name(),
        failures
    );
}

/// Asserts that no input matches as a whole.
///
/// # Panics
/// Panics listing every input that matches.
pub fn assert_none_match(provider: &dyn PatternProvider, inputs: &[&str]) {
    let regex = anchored(provider);
    let matched: Vec<&str> = inputs
        .iter()
        .copied()
        .filter(|input| regex.is_match(input))
        .collect();
    assert!(
        matched.is_empty(),
        "{} pattern should not match the whole of: {:?}",
        provider.name(),
        matched
    );
}
