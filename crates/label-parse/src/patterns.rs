use std::sync::LazyLock;

use regex::Regex;

/// `Label:` token: uppercase ASCII start, alphanumerics, single `®`/`™`/`-`
/// connectors between alphanumeric runs, optional whitespace, colon.
pub(crate) static LABEL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-zA-Z0-9]*(?:[®™\-]?[a-zA-Z0-9]+)*\s*:").expect("Invalid label regex")
});

/// `<number>% <name>`; the name stops at digits, `%` and commas.
pub(crate) static FIBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%\s*([^\d%,]+)").expect("Invalid fiber regex")
});

/// `<number> <unit>` for gram and gram-per-square-meter spellings.
pub(crate) static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:gr(?:ams?)?|g/?m²|g/?m2|g\.?)")
        .expect("Invalid weight regex")
});

/// Trademark, registered and copyright glyphs.
pub(crate) static TRADEMARK_GLYPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[®™©]").expect("Invalid glyph regex"));

/// Characters stripped from both ends of segment content.
pub(crate) const SEPARATORS: &[char] = &[' ', ',', '.', '\n', '\r', '\t'];

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(text: &str) -> Vec<&str> {
        LABEL_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
    }

    #[test]
    fn label_with_trademark_connector() {
        assert_eq!(labels("Gore-Tex®Pro: 100% Nylon"), vec!["Gore-Tex®Pro:"]);
        assert_eq!(labels("Primaloft™Gold : x"), vec!["Primaloft™Gold :"]);
    }

    #[test]
    fn label_requires_uppercase_start() {
        assert!(labels("shell: 100% Cotton").is_empty());
    }

    #[test]
    fn trailing_connector_is_not_a_label() {
        assert!(labels("A-: 100% Cotton").is_empty());
        assert!(labels("Shell®: 100% Cotton").is_empty());
    }

    #[test]
    fn doubled_connector_splits_label() {
        assert_eq!(labels("Main--Fabric: x"), vec!["Fabric:"]);
    }
}
