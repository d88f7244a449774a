//! Shared replacers, chains and sample inputs.

use std::sync::Arc;
use textguard::{ContentReplacementModel, Replacement, Replacer, ReplacerChain, StringModel};

/// Mail domains the tighter email grammar is built from in tests.
pub const COMMON_EMAIL_DOMAINS: &[&str] = &["gmail", "hotmail", "yahoo", "outlook", "live"];

pub const CONTACT_HREF: &str = "/contact";

pub fn email_to_link() -> Replacer {
    Replacer::email_to_link(CONTACT_HREF, "email link").expect("email replacer")
}

pub fn number_to_link() -> Replacer {
    Replacer::number_sequence_to_link(7, CONTACT_HREF, "number link").expect("number replacer")
}

pub fn web_link_mask() -> Replacer {
    Replacer::web_link(Replacement::text("[web link]")).expect("web link replacer")
}

pub fn wechat_mask() -> Replacer {
    Replacer::wechat(Replacement::text("[blocked]")).expect("wechat replacer")
}

/// A chain holding exactly one replacer.
pub fn chain_of(replacer: Replacer) -> Arc<ReplacerChain> {
    Arc::new(ReplacerChain::builder().add(replacer).build())
}

/// A model over `text` presenting it through a single replacer.
pub fn model_of(text: &str, replacer: Replacer) -> ContentReplacementModel<StringModel> {
    ContentReplacementModel::new(StringModel::new(text), chain_of(replacer))
}

/// Builds a long input out of many repetitions of `unit`.
pub fn repeated(unit: &str, times: usize) -> String {
    unit.repeat(times)
}
