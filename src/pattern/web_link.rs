//! Web link grammar.

use super::grammar::Grammar;
use super::PatternProvider;
use once_cell::sync::Lazy;

/// Optional path following a host: a slash and anything up to the next space
/// or line break.
pub fn link_path() -> Grammar {
    Grammar::raw(r"/[^ \n]*").optional()
}

/// `http://host.tld/path` or `https://...`.
fn scheme_link() -> Grammar {
    Grammar::raw("https?://")
        .then(Grammar::raw(r"[a-z0-9\-]+\.").one_or_more())
        .then(Grammar::raw("[a-z]{2,}"))
        .then(link_path())
}

/// `www.host.tld/path`, tolerating whitespace around the first two dots
/// ("www. example. com").
fn www_link() -> Grammar {
    Grammar::raw(r"www\s*\.\s*[a-z0-9\-]+\s*\.\s*[a-z]{2,7}")
        .then(Grammar::raw(r"\.[a-z]{2,7}").zero_or_more())
        .then(link_path())
}

static PATTERN: Lazy<String> =
    Lazy::new(|| Grammar::any_of([scheme_link(), www_link()]).into_string());

/// Pattern provider for links users paste into free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebLinkPattern;

impl WebLinkPattern {
    pub fn new() -> Self {
        Self
    }
}

impl PatternProvider for WebLinkPattern {
    fn pattern(&self) -> &str {
        &PATTERN
    }

    fn name(&self) -> &str {
        "web_link"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_path() {
        let re = link_path().compile_anchored().unwrap();
        assert!(re.is_match(""));
        assert!(re.is_match("/watch?v=1&x=y"));
        assert!(!re.is_match("/a b"));
        assert!(!re.is_match("/a\nb"));
    }

    #[test]
    fn test_multi_label_www_host() {
        let re = Grammar::raw(WebLinkPattern.pattern()).compile_anchored().unwrap();
        assert!(re.is_match("www.bbc.co.uk"));
        assert!(re.is_match("http://example.ca"));
        assert!(!re.is_match("example.com"));
    }
}
