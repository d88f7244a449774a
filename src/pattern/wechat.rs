//! WeChat ID grammar.

use super::grammar::Grammar;
use super::PatternProvider;
use once_cell::sync::Lazy;

static PATTERN: Lazy<String> = Lazy::new(|| {
    Grammar::any_of([Grammar::raw("微 ?信号?"), Grammar::raw("wechat")])
        .then(Grammar::raw(r"\s*id").optional())
        .then(Grammar::raw(r"\s*[:：]?\s*"))
        .then(Grammar::raw(r"[a-z0-9_.]+"))
        // trailing annotation such as "（微信）"
        .then(Grammar::raw("[(（].*[)）]").optional())
        .into_string()
});

/// Pattern provider for WeChat ID mentions: "微信号：user_name",
/// "WeChat ID: user1234", "wechat user1234".
#[derive(Debug, Clone, Copy, Default)]
pub struct WeChatPattern;

impl WeChatPattern {
    pub fn new() -> Self {
        Self
    }
}

impl PatternProvider for WeChatPattern {
    fn pattern(&self) -> &str {
        &PATTERN
    }

    fn name(&self) -> &str {
        "wechat"
    }
}
