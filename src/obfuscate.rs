//! Email links that scrapers cannot read from the page source.
//!
//! The address and link text are written as numeric character entities and
//! the anchor is injected by script once the page has loaded, so the
//! address never appears in plain text in the served markup.

/// `mailto:` as character entities, split into concatenated script string
/// literals.
pub const MAILTO_OBFUSCATED: &str =
    "'+'&#109'+'&#97'+'&#105'+'&#108'+'&#116'+'&#111'+'&#58'+'";

/// Placeholder in the surrounding verbiage that receives the anchor.
pub const EMAIL_LINK_PLACEHOLDER: &str = "${emailLink}";

/// Writes every character as a numeric entity without the trailing `;`.
///
/// ```
/// assert_eq!(textguard::obfuscate::to_character_entities("a@b"), "&#97&#64&#98");
/// ```
pub fn to_character_entities(input: &str) -> String {
    input.chars().map(|c| format!("&#{}", u32::from(c))).collect()
}

/// A `mailto:` link placed into an element of the page on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscatedMailto {
    element_id: String,
    verbiage: String,
    email: String,
    link_text: String,
}

impl ObfuscatedMailto {
    /// `verbiage` is the element's content; its `${emailLink}` placeholder
    /// is replaced by the anchor.
    pub fn new(
        element_id: impl Into<String>,
        verbiage: impl Into<String>,
        email: impl Into<String>,
        link_text: impl Into<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            verbiage: verbiage.into(),
            email: email.into(),
            link_text: link_text.into(),
        }
    }

    /// The entity-encoded anchor, meant to sit inside a single-quoted
    /// script string.
    pub fn render_link(&self) -> String {
        format!(
            "<a href=\"{}{}\">{}</a>",
            MAILTO_OBFUSCATED,
            to_character_entities(&self.email),
            to_character_entities(&self.link_text)
        )
    }

    /// The on-load script that fills the element.
    pub fn render_script(&self) -> String {
        let content = self
            .verbiage
            .replace(EMAIL_LINK_PLACEHOLDER, &self.render_link());
        format!(
            "$(window).load(function(){{$('#{}').html('{}');}});",
            self.element_id, content
        )
    }
}
