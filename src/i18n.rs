//! Localized string templates
//!
//! A small static table keyed by language. Templates use positional `{}`
//! placeholders filled left to right by [`render`].

use crate::types::Lang;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Template for the bold amount segment: formatted amount, currency label
pub const SNIPPET_AMOUNT: &str = "snippetAmount";
/// Template for the segment between the amount and the learn-more label
pub const SNIPPET_TITLE2: &str = "snippetTitle2";

static STRINGS: Lazy<HashMap<(Lang, &'static str), &'static str>> = Lazy::new(|| {
    HashMap::from([
        ((Lang::En, SNIPPET_AMOUNT), "{} {}"),
        ((Lang::En, SNIPPET_TITLE2), ". "),
        ((Lang::Ar, SNIPPET_AMOUNT), "{} {}"),
        ((Lang::Ar, SNIPPET_TITLE2), ". "),
    ])
});

/// Look up a template for the given language
///
/// Falls back to English, then to an empty string, when a key is missing.
pub fn localized(lang: Lang, key: &'static str) -> &'static str {
    if let Some(s) = STRINGS.get(&(lang, key)) {
        return s;
    }
    match STRINGS.get(&(Lang::En, key)) {
        Some(s) => s,
        None => {
            tracing::warn!("Missing localization key: {}", key);
            ""
        }
    }
}

/// Fill positional `{}` placeholders left to right
///
/// Surplus placeholders are left in place; surplus arguments are ignored.
pub fn render(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_keys() {
        assert_eq!(localized(Lang::En, SNIPPET_AMOUNT), "{} {}");
        assert_eq!(localized(Lang::Ar, SNIPPET_TITLE2), ". ");
    }

    #[test]
    fn test_render_substitution() {
        assert_eq!(render("{} {}", &["497.50", "QAR"]), "497.50 QAR");
        assert_eq!(render("{} {}", &["", "AED"]), " AED");
    }

    #[test]
    fn test_render_surplus_args_ignored() {
        assert_eq!(render("{}", &["a", "b"]), "a");
    }

    #[test]
    fn test_render_missing_args_keep_placeholder() {
        assert_eq!(render("{} {}", &["a"]), "a {}");
    }
}
