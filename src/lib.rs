//! Detection and replacement of disguised contact details in user text.
//!
//! Marketplaces and messaging sites often forbid users from exchanging
//! contact details before a transaction. This library recognises the ways
//! people try to slip those details past a filter and replaces them with
//! fixed text or a link, and validates names and email addresses entered
//! into forms.
//!
//! # Features
//!
//! - **Email addresses**: generic grammar plus obfuscations like
//!   "joe at gmail dot com" or "u s e r @ yahoo . com"
//! - **Number sequences**: phone numbers in digits, words ("five five five"),
//!   full-width, circled and Chinese numerals
//! - **Web links and WeChat IDs**
//! - **Replacer chains**: ordered, case-insensitive, literal replacements
//! - **Validators**: real full names, per-domain email user-name length,
//!   maximum digit count
//!
//! # Architecture
//!
//! - [`pattern`]: Regular expression grammars, one provider per category
//! - [`replace`]: Replacers, chains and string models
//! - [`validation`]: Form value validators
//! - [`obfuscate`]: Scraper-resistant `mailto:` links
//! - [`config`]: TOML configuration
//! - [`error`]: Error handling
//!
//! # Quick Start
//!
//! ```
//! use textguard::{Replacement, Replacer, ReplacerChain};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = ReplacerChain::builder()
//!     .add(Replacer::email(Replacement::text("[email]"))?)
//!     .add(Replacer::number_sequence(7, Replacement::text("[number]"))?)
//!     .build();
//!
//! assert_eq!(
//!     chain.apply("write to joe at example dot com or call 555 123 4567"),
//!     "write to [email] or call [number]"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Presenting a stored value
//!
//! ```
//! use std::sync::Arc;
//! use textguard::{ContentReplacementModel, Replacer, ReplacerChain, StringModel, TextModel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = ReplacerChain::builder()
//!     .add(Replacer::email_to_link("/contact", "send a message")?)
//!     .build();
//! let model = ContentReplacementModel::new(
//!     StringModel::new("<i>hi</i> joe@gmail.com"),
//!     Arc::new(chain),
//! )
//! .with_escape_model_string(true);
//!
//! assert_eq!(
//!     model.get().as_deref(),
//!     Some("&lt;i&gt;hi&lt;/i&gt; <a href=\"/contact\">send a message</a>")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Validating a name
//!
//! ```
//! use textguard::validation::{NameRule, RealFullNameValidator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = RealFullNameValidator::builder().build()?;
//! assert!(validator.validate("Jane", "Doe").is_ok());
//! assert_eq!(validator.validate("Dr Jane", "Doe").unwrap_err().rule, NameRule::Title);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod obfuscate;
pub mod pattern;
pub mod replace;
pub mod validation;

pub use config::Config;
pub use error::{TextGuardError, TextGuardResult};
pub use pattern::{
    EmailPattern, Grammar, NumberSequencePattern, PatternProvider, WeChatPattern, WebLinkPattern,
};
pub use replace::{
    escape_markup, ContentReplacementModel, ContentReplacer, RemoveCharactersModel, Replacement,
    Replacer, ReplacerChain, StringModel, TextModel,
};
