//! User-name length limits per email domain.
//!
//! Some providers enforce their own limits (gmail user names are at least
//! six characters), so an address below the limit is certainly mistyped.
//!
//! ```
//! use std::collections::HashMap;
//! use textguard::validation::{DomainRule, EmailUserNameLengthValidator};
//!
//! let validator = EmailUserNameLengthValidator::new(HashMap::from([
//!     ("gmail.com".to_string(), DomainRule::for_min_max_length(6, 30)),
//!     ("yahoo".to_string(), DomainRule::for_min_length(4)),
//! ]));
//! assert!(validator.validate("abc@gmail.com").is_err());
//! assert!(validator.validate("abcdef@gmail.com").is_ok());
//! assert!(validator.validate("abc@yahoo.co.uk").is_err());
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Minimum and optional maximum user-name length for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct DomainRule {
    min: usize,
    #[serde(default)]
    max: Option<usize>,
}

impl DomainRule {
    pub fn for_min_length(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn for_min_max_length(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn satisfies(&self, user_name_length: usize) -> bool {
        user_name_length >= self.min && self.max.map_or(true, |max| user_name_length <= max)
    }
}

impl fmt::Display for DomainRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "user name length {}..={}", self.min, max),
            None => write!(f, "user name length >= {}", self.min),
        }
    }
}

/// An address whose user name does not fit its domain's rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("email [{email}] violates {rule}")]
pub struct DomainRuleViolation {
    pub email: String,
    pub rule: DomainRule,
}

/// Checks the part of an address before the `@` against [`DomainRule`]s.
#[derive(Debug, Clone, Default)]
pub struct EmailUserNameLengthValidator {
    rules: HashMap<String, DomainRule>,
}

impl EmailUserNameLengthValidator {
    /// `rules` is keyed by a leading portion of a domain. A key can cover
    /// every top level domain ("yahoo" matches yahoo.com and yahoo.co.uk) or
    /// name one domain exactly; the more specific key wins.
    pub fn new(rules: HashMap<String, DomainRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|(domain, rule)| (domain.to_lowercase(), rule))
                .collect(),
        }
    }

    pub fn validate(&self, email: &str) -> Result<(), DomainRuleViolation> {
        match self.violated_rule(email) {
            Some(rule) => {
                log::info!(
                    "Email user name length validation failed on input [{}] due to rule {}.",
                    email,
                    rule
                );
                Err(DomainRuleViolation {
                    email: email.to_string(),
                    rule,
                })
            }
            None => Ok(()),
        }
    }

    /// The rule `email` violates, if any. Input without an `@` is left to
    /// other validators.
    pub fn violated_rule(&self, email: &str) -> Option<DomainRule> {
        let at_index = email.rfind('@')?;
        let rule = self.look_up_domain(&email[at_index + 1..])?;
        let user_name_length = email[..at_index].chars().count();
        if rule.satisfies(user_name_length) {
            None
        } else {
            Some(*rule)
        }
    }

    /// Looks up the exact domain, then ever shorter leading portions of it
    /// cut at each dot from the right: `a.b.c`, `a.b`, `a`.
    pub fn look_up_domain(&self, domain: &str) -> Option<&DomainRule> {
        let domain = domain.to_lowercase();
        if let Some(rule) = self.rules.get(&domain) {
            return Some(rule);
        }
        domain
            .char_indices()
            .rev()
            .filter(|&(_, c)| c == '.')
            .find_map(|(i, _)| self.rules.get(&domain[..i]))
    }
}
