//! Pattern providers for obfuscated contact details.
//!
//! Each provider supplies one case-insensitive regular expression that
//! recognises a category of content users type to get around filters:
//! email addresses ("user at gmail dot com"), number sequences
//! ("１２３－４５６７", "five five five ..."), web links and WeChat IDs.

pub mod email;
pub mod grammar;
pub mod number;
pub mod web_link;
pub mod wechat;

pub use email::EmailPattern;
pub use grammar::Grammar;
pub use number::NumberSequencePattern;
pub use web_link::WebLinkPattern;
pub use wechat::WeChatPattern;

use crate::error::TextGuardResult;

/// Supplies the regular expression for one detection category.
///
/// The returned pattern is never empty and is always valid when compiled
/// case-insensitively.
pub trait PatternProvider: Send + Sync {
    fn pattern(&self) -> &str;

    /// Short label used in log output.
    fn name(&self) -> &str;
}

/// Matches a line feed, for turning user newlines into `<br/>` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewlinePattern;

impl PatternProvider for NewlinePattern {
    fn pattern(&self) -> &str {
        "\n"
    }

    fn name(&self) -> &str {
        "newline"
    }
}

/// A caller-supplied expression, checked for validity on construction.
#[derive(Debug, Clone)]
pub struct CustomPattern {
    pattern: String,
}

impl CustomPattern {
    pub fn new(pattern: impl Into<String>) -> TextGuardResult<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(crate::TextGuardError::invalid_input(
                "pattern",
                "custom pattern must not be empty",
            ));
        }
        grammar::compile_case_insensitive(&pattern)?;
        Ok(Self { pattern })
    }
}

impl PatternProvider for CustomPattern {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn name(&self) -> &str {
        "custom"
    }
}
