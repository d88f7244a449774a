//! TOML configuration describing a complete setup: the replacer chain, the
//! escape flag and the validators.
//!
//! ```toml
//! escape = true
//! max_digits = 12
//!
//! [[replacer]]
//! kind = "email"
//! domains = ["gmail.com", "yahoo.com"]
//! href = "/contact"
//! text = "send a message"
//!
//! [[replacer]]
//! kind = "number_sequence"
//! min_numbers = 7
//! replacement = "[number]"
//!
//! [name]
//! denylist = ["test user"]
//!
//! [email_rules]
//! "gmail.com" = { min = 6, max = 30 }
//! ```
//!
//! Every section is optional. Without `[[replacer]]` entries the default
//! chain is used.

use crate::error::{TextGuardError, TextGuardResult};
use crate::pattern::{
    CustomPattern, EmailPattern, NewlinePattern, NumberSequencePattern, WeChatPattern,
    WebLinkPattern,
};
use crate::replace::{Replacement, Replacer, ReplacerChain};
use crate::validation::{
    DomainRule, EmailUserNameLengthValidator, MaxDigitsValidator, RealFullNameValidator,
};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_EMAIL_DOMAINS: &[&str] = &["gmail", "hotmail", "yahoo", "outlook", "live"];
const DEFAULT_MIN_NUMBERS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_escape")]
    escape: bool,
    #[serde(default = "default_replacers", rename = "replacer")]
    replacers: Vec<ReplacerConfig>,
    #[serde(default)]
    name: NameConfig,
    #[serde(default)]
    email_rules: HashMap<String, DomainRule>,
    #[serde(default)]
    max_digits: Option<usize>,
}

fn default_escape() -> bool {
    true
}

fn default_replacers() -> Vec<ReplacerConfig> {
    vec![
        ReplacerConfig {
            domains: Some(DEFAULT_EMAIL_DOMAINS.iter().map(|d| d.to_string()).collect()),
            replacement: Some("[email]".to_string()),
            ..ReplacerConfig::of(ReplacerKind::Email)
        },
        ReplacerConfig {
            min_numbers: Some(DEFAULT_MIN_NUMBERS),
            replacement: Some("[number]".to_string()),
            ..ReplacerConfig::of(ReplacerKind::NumberSequence)
        },
        ReplacerConfig {
            replacement: Some("[link]".to_string()),
            ..ReplacerConfig::of(ReplacerKind::WebLink)
        },
        ReplacerConfig {
            replacement: Some("[wechat]".to_string()),
            ..ReplacerConfig::of(ReplacerKind::WeChat)
        },
    ]
}

/// One `[[replacer]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplacerConfig {
    pub kind: ReplacerKind,
    /// Mail domains for the tighter email grammar.
    pub domains: Option<Vec<String>>,
    pub min_numbers: Option<usize>,
    /// Expression for `custom` replacers.
    pub pattern: Option<String>,
    pub replacement: Option<String>,
    pub href: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacerKind {
    Email,
    NumberSequence,
    WebLink,
    #[serde(rename = "wechat")]
    WeChat,
    Newline,
    Custom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameConfig {
    #[serde(default)]
    pub denylist: Vec<String>,
    /// Every character of the string is illegal in a name.
    pub illegal_chars: Option<String>,
    pub titles: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            escape: default_escape(),
            replacers: default_replacers(),
            name: NameConfig::default(),
            email_rules: HashMap::new(),
            max_digits: None,
        }
    }
}

impl Config {
    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> TextGuardResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| TextGuardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;
        debug!(
            "Loaded configuration from {} ({} replacer(s))",
            path.display(),
            config.replacers.len()
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> TextGuardResult<Self> {
        Self::parse(contents, Path::new("<string>"))
    }

    fn parse(contents: &str, path: &Path) -> TextGuardResult<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| TextGuardError::Config {
            path: PathBuf::from(path),
            reason: e.to_string(),
        })?;
        if config.replacers.is_empty() {
            warn!("Configuration defines an empty replacer chain; text will pass through unchanged");
        }
        Ok(config)
    }

    pub fn escape(&self) -> bool {
        self.escape
    }

    pub fn replacers(&self) -> &[ReplacerConfig] {
        &self.replacers
    }

    pub fn max_digits(&self) -> Option<usize> {
        self.max_digits
    }

    /// Compiles every `[[replacer]]` entry, in order.
    pub fn build_chain(&self) -> TextGuardResult<ReplacerChain> {
        let mut builder = ReplacerChain::builder();
        for entry in &self.replacers {
            builder = builder.add(entry.build()?);
        }
        Ok(builder.build())
    }

    pub fn build_name_validator(&self) -> TextGuardResult<RealFullNameValidator> {
        let mut builder =
            RealFullNameValidator::builder().denylist(self.name.denylist.iter().cloned());
        if let Some(chars) = &self.name.illegal_chars {
            builder = builder.illegal_chars(chars.chars());
        }
        if let Some(titles) = &self.name.titles {
            builder = builder.titles(titles.iter().cloned());
        }
        builder.build()
    }

    pub fn build_email_length_validator(&self) -> EmailUserNameLengthValidator {
        EmailUserNameLengthValidator::new(self.email_rules.clone())
    }

    /// `None` when `max_digits` is not configured.
    pub fn build_max_digits_validator(&self) -> TextGuardResult<Option<MaxDigitsValidator>> {
        self.max_digits.map(MaxDigitsValidator::new).transpose()
    }
}

impl ReplacerConfig {
    fn of(kind: ReplacerKind) -> Self {
        Self {
            kind,
            domains: None,
            min_numbers: None,
            pattern: None,
            replacement: None,
            href: None,
            text: None,
        }
    }

    pub fn build(&self) -> TextGuardResult<Replacer> {
        self.warn_ignored_fields();
        let replacement = self.replacement()?;
        match self.kind {
            ReplacerKind::Email => match &self.domains {
                Some(domains) => Replacer::new(&EmailPattern::with_domains(domains)?, replacement),
                None => Replacer::new(&EmailPattern::generic(), replacement),
            },
            ReplacerKind::NumberSequence => {
                let min_numbers = self.min_numbers.ok_or_else(|| {
                    TextGuardError::invalid_input(
                        "min_numbers",
                        "required for number_sequence replacers",
                    )
                })?;
                Replacer::new(&NumberSequencePattern::new(min_numbers)?, replacement)
            }
            ReplacerKind::WebLink => Replacer::new(&WebLinkPattern, replacement),
            ReplacerKind::WeChat => Replacer::new(&WeChatPattern, replacement),
            ReplacerKind::Newline => Replacer::new(&NewlinePattern, replacement),
            ReplacerKind::Custom => {
                let pattern = self.pattern.as_deref().ok_or_else(|| {
                    TextGuardError::invalid_input("pattern", "required for custom replacers")
                })?;
                Replacer::new(&CustomPattern::new(pattern)?, replacement)
            }
        }
    }

    fn replacement(&self) -> TextGuardResult<Replacement> {
        match (&self.replacement, &self.href, &self.text) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(TextGuardError::invalid_input(
                "replacement",
                "give either `replacement` or `href` and `text`, not both",
            )),
            (Some(replacement), None, None) => Ok(Replacement::text(replacement.as_str())),
            (None, Some(href), Some(text)) => Ok(Replacement::link(href.as_str(), text.as_str())),
            (None, Some(_), None) | (None, None, Some(_)) => Err(TextGuardError::invalid_input(
                "href",
                "`href` and `text` must be given together",
            )),
            (None, None, None) if self.kind == ReplacerKind::Newline => {
                Ok(Replacement::text("<br/>"))
            }
            (None, None, None) => Err(TextGuardError::invalid_input(
                "replacement",
                "missing `replacement` or `href` and `text`",
            )),
        }
    }

    fn warn_ignored_fields(&self) {
        let ignored = [
            ("domains", self.domains.is_some() && self.kind != ReplacerKind::Email),
            (
                "min_numbers",
                self.min_numbers.is_some() && self.kind != ReplacerKind::NumberSequence,
            ),
            ("pattern", self.pattern.is_some() && self.kind != ReplacerKind::Custom),
        ];
        for (field, _) in ignored.iter().filter(|(_, ignored)| *ignored) {
            warn!("Ignoring `{}` on {:?} replacer", field, self.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::ContentReplacer;

    #[test]
    fn test_default_chain() {
        let chain = Config::default().build_chain().unwrap();
        let names: Vec<&str> = chain.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["email", "number_sequence", "web_link", "wechat"]);
        assert_eq!(chain.apply("mail me at joe at gmail dot com"), "mail me at [email]");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.escape());
    }

    #[test]
    fn test_replacement_forms() {
        let config = Config::from_toml_str(
            r#"
            [[replacer]]
            kind = "web_link"
            href = "/links"
            text = "link removed"

            [[replacer]]
            kind = "newline"
            "#,
        )
        .unwrap();
        let chain = config.build_chain().unwrap();
        assert_eq!(
            chain.apply("see www.example.com\nbye"),
            "see <a href=\"/links\">link removed</a><br/>bye"
        );
    }

    #[test]
    fn test_conflicting_replacement_rejected() {
        let config = Config::from_toml_str(
            r#"
            [[replacer]]
            kind = "wechat"
            replacement = "x"
            href = "/y"
            "#,
        )
        .unwrap();
        assert!(config.build_chain().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_toml_str("escpae = false").unwrap_err();
        assert!(matches!(err, TextGuardError::Config { .. }));
    }

    #[test]
    fn test_max_digits_validator() {
        let config = Config::from_toml_str("max_digits = 3").unwrap();
        let validator = config.build_max_digits_validator().unwrap().unwrap();
        assert!(validator.validate("1a2bc34").is_err());
        assert!(Config::default().build_max_digits_validator().unwrap().is_none());
        let zero = Config::from_toml_str("max_digits = 0").unwrap();
        assert!(zero.build_max_digits_validator().is_err());
    }
}
