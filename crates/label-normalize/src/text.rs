use crate::singular::{EnglishSingularizer, Singularize};

/// Collapses runs of whitespace to a single space and trims both ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a fiber name into its resolver key.
///
/// Lowercases, turns hyphens into spaces, replaces every character other
/// than `a-z`, `0-9`, whitespace and `/` with a space, then collapses
/// whitespace.
pub fn normalize_fiber_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase().replace('-', " ");
    let kept: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '/' {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse_whitespace(&kept)
}

/// Cleans part names and categories with the built-in English singularizer.
pub fn clean_text(raw: &str) -> String {
    clean_text_with(raw, &EnglishSingularizer)
}

/// Cleans text and singularizes the whole result with `singularizer`.
///
/// Non-alphanumeric characters become spaces, whitespace is collapsed and
/// the text lowercased before the singular form is looked up.
pub fn clean_text_with<S>(raw: &str, singularizer: &S) -> String
where
    S: Singularize + ?Sized,
{
    let kept: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let cleaned = collapse_whitespace(&kept).to_ascii_lowercase();
    singularizer.singular(&cleaned).unwrap_or(cleaned)
}

/// Splits `CATEGORY/SUB-CATEGORY` on the first slash.
///
/// The subcategory is empty when no slash is present.
pub fn split_category(raw: &str) -> (&str, &str) {
    raw.split_once('/').unwrap_or((raw, ""))
}
