//! Plural-to-singular folding for cleaned text.

/// Singular-noun lookup for a whole cleaned phrase.
pub trait Singularize {
    /// Singular form of `phrase`, or `None` when it is not recognized as plural.
    fn singular(&self, phrase: &str) -> Option<String>;
}

impl<F> Singularize for F
where
    F: Fn(&str) -> Option<String>,
{
    fn singular(&self, phrase: &str) -> Option<String> {
        self(phrase)
    }
}

/// Rule-based English singularizer.
///
/// Only the last word of a phrase is inflected (`side pockets` →
/// `side pocket`). Expects lowercase ASCII input as produced by
/// [`crate::clean_text`]. Applying it to its own output yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSingularizer;

const INVARIANT: &[&str] = &["series", "species", "news", "sheep", "deer", "fish"];

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("people", "person"),
];

const F_PLURALS: &[(&str, &str)] = &[
    ("calves", "calf"),
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("scarves", "scarf"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("wives", "wife"),
    ("wolves", "wolf"),
];

const ES_SUFFIXES: &[&str] = &["sses", "shes", "ches", "xes", "zzes"];

impl Singularize for EnglishSingularizer {
    fn singular(&self, phrase: &str) -> Option<String> {
        let (prefix, last) = match phrase.rsplit_once(' ') {
            Some((prefix, last)) => (Some(prefix), last),
            None => (None, phrase),
        };
        let singular = singular_word(last)?;
        Some(match prefix {
            Some(prefix) => format!("{prefix} {singular}"),
            None => singular,
        })
    }
}

fn lookup(table: &[(&str, &str)], word: &str) -> Option<String> {
    table
        .iter()
        .find(|(plural, _)| *plural == word)
        .map(|(_, singular)| (*singular).to_string())
}

fn singular_word(word: &str) -> Option<String> {
    if word.len() < 3 || INVARIANT.contains(&word) {
        return None;
    }
    if let Some(singular) = lookup(IRREGULAR, word).or_else(|| lookup(F_PLURALS, word)) {
        return Some(singular);
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies")
        && word.len() > 4
    {
        return Some(format!("{stem}y"));
    }
    if ES_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return Some(word[..word.len() - 2].to_string());
    }
    let stem = word.strip_suffix('s')?;
    Some(lookup(IRREGULAR, stem).unwrap_or_else(|| stem.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singular(phrase: &str) -> Option<String> {
        EnglishSingularizer.singular(phrase)
    }

    #[test]
    fn regular_plurals() {
        assert_eq!(singular("pockets").as_deref(), Some("pocket"));
        assert_eq!(singular("shoes").as_deref(), Some("shoe"));
        assert_eq!(singular("sleeves").as_deref(), Some("sleeve"));
    }

    #[test]
    fn es_and_ies_plurals() {
        assert_eq!(singular("dresses").as_deref(), Some("dress"));
        assert_eq!(singular("watches").as_deref(), Some("watch"));
        assert_eq!(singular("boxes").as_deref(), Some("box"));
        assert_eq!(singular("accessories").as_deref(), Some("accessory"));
    }

    #[test]
    fn irregular_plurals() {
        assert_eq!(singular("women").as_deref(), Some("woman"));
        assert_eq!(singular("scarves").as_deref(), Some("scarf"));
    }

    #[test]
    fn singular_words_are_left_alone() {
        assert_eq!(singular("dress"), None);
        assert_eq!(singular("shell"), None);
        assert_eq!(singular("status"), None);
        assert_eq!(singular("series"), None);
        assert_eq!(singular(""), None);
    }

    #[test]
    fn only_last_word_is_inflected() {
        assert_eq!(singular("side pockets").as_deref(), Some("side pocket"));
        assert_eq!(singular("pockets lining"), None);
    }

    #[test]
    fn output_is_stable() {
        for word in ["mens", "dresses", "accessories", "leaves", "pockets", "boxes"] {
            let once = singular(word).expect("plural");
            assert_eq!(singular(&once), None, "{word} -> {once}");
        }
    }
}
