//! Ordered application of content replacers.

use super::ContentReplacer;
use regex::NoExpand;
use std::borrow::Cow;
use std::sync::Arc;

/// An immutable, ordered list of replacers.
///
/// [`ReplacerChain::apply`] runs each replacer over the output of the
/// previous one, so a later pattern can match text that an earlier
/// replacement inserted. Order is therefore significant.
#[derive(Debug, Clone, Default)]
pub struct ReplacerChain {
    replacers: Vec<Arc<dyn ContentReplacer>>,
}

impl ReplacerChain {
    pub fn builder() -> ReplacerChainBuilder {
        ReplacerChainBuilder::default()
    }

    /// Replaces every match of every replacer, in insertion order.
    ///
    /// Empty input is returned as is without running any replacer.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        if text.is_empty() {
            return text;
        }
        for replacer in self.replacers.iter() {
            let replaced = replacer
                .pattern()
                .replace_all(&text, NoExpand(replacer.replacement()));
            // Cow::Borrowed means nothing matched
            if let Cow::Owned(replaced) = replaced {
                log::debug!("Replacer '{}' rewrote input", replacer.name());
                text = replaced;
            }
        }
        text
    }

    pub fn len(&self) -> usize {
        self.replacers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ContentReplacer> {
        self.replacers.iter().map(|r| r.as_ref())
    }
}

/// Collects replacers for a [`ReplacerChain`].
#[derive(Debug, Default)]
pub struct ReplacerChainBuilder {
    replacers: Vec<Arc<dyn ContentReplacer>>,
}

impl ReplacerChainBuilder {
    pub fn add<R>(mut self, replacer: R) -> Self
    where
        R: ContentReplacer + 'static,
    {
        self.replacers.push(Arc::new(replacer));
        self
    }

    /// Adds a replacer that is already shared with other chains.
    pub fn add_shared(mut self, replacer: Arc<dyn ContentReplacer>) -> Self {
        self.replacers.push(replacer);
        self
    }

    pub fn build(self) -> ReplacerChain {
        log::debug!("Built replacer chain with {} replacer(s)", self.replacers.len());
        ReplacerChain {
            replacers: self.replacers,
        }
    }
}
