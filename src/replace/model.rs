//! String models that sit between stored values and their presentation.
//!
//! A [`TextModel`] is a get/set pair over an optional string, the shape of a
//! value bound to a form input. The wrappers here transform the value on one
//! side only: [`ContentReplacementModel`] on read, [`RemoveCharactersModel`]
//! on write.

use super::chain::ReplacerChain;
use super::escape::escape_markup;
use std::sync::Arc;

/// A readable and writable optional string.
pub trait TextModel {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: Option<String>);
}

/// A model that simply holds its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringModel {
    value: Option<String>,
}

impl StringModel {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl TextModel for StringModel {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: Option<String>) {
        self.value = value;
    }
}

/// Presents the nested model's text with every replacement of a chain
/// applied, for instance to mask contact details in user-entered text.
///
/// Writes go straight through to the nested model; stored data is never
/// rewritten.
#[derive(Debug, Clone)]
pub struct ContentReplacementModel<M> {
    nested: M,
    chain: Arc<ReplacerChain>,
    escape_model_string: bool,
}

impl<M: TextModel> ContentReplacementModel<M> {
    pub fn new(nested: M, chain: Arc<ReplacerChain>) -> Self {
        Self {
            nested,
            chain,
            escape_model_string: false,
        }
    }

    /// Whether the nested string is HTML-escaped before replacements run.
    pub fn is_escape_model_string(&self) -> bool {
        self.escape_model_string
    }

    /// When true, the nested string is escaped before any replacement is made,
    /// so markup inserted by replacers (such as anchor tags) survives while
    /// markup typed by the user does not. The rendering layer must then not
    /// escape the result a second time.
    pub fn set_escape_model_string(&mut self, escape: bool) {
        self.escape_model_string = escape;
    }

    pub fn with_escape_model_string(mut self, escape: bool) -> Self {
        self.escape_model_string = escape;
        self
    }

    pub fn nested(&self) -> &M {
        &self.nested
    }

    pub fn into_nested(self) -> M {
        self.nested
    }
}

impl<M: TextModel> TextModel for ContentReplacementModel<M> {
    fn get(&self) -> Option<String> {
        let raw = self.nested.get()?;
        let text = if self.escape_model_string {
            escape_markup(&raw)
        } else {
            raw
        };
        Some(self.chain.apply(&text))
    }

    fn set(&mut self, value: Option<String>) {
        self.nested.set(value);
    }
}

/// Strips a set of characters (and surrounding whitespace) from values
/// written to the nested model. Reads pass through.
#[derive(Debug, Clone)]
pub struct RemoveCharactersModel<M> {
    nested: M,
    illegal_chars: Vec<char>,
}

impl<M: TextModel> RemoveCharactersModel<M> {
    pub fn new(nested: M, illegal_chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            nested,
            illegal_chars: illegal_chars.into_iter().collect(),
        }
    }

    pub fn nested(&self) -> &M {
        &self.nested
    }
}

impl<M: TextModel> TextModel for RemoveCharactersModel<M> {
    fn get(&self) -> Option<String> {
        self.nested.get()
    }

    fn set(&mut self, value: Option<String>) {
        let Some(value) = value else {
            self.nested.set(None);
            return;
        };
        let stripped: String = value
            .chars()
            .filter(|c| !self.illegal_chars.contains(c))
            .collect();
        let stripped = stripped.trim().to_string();
        if stripped != value {
            log::info!(
                "Stripped characters from string [{}] to produce [{}].",
                value,
                stripped
            );
        }
        self.nested.set(Some(stripped));
    }
}
