use label_normalize::{clean_text, normalize_fiber_name, split_category};
use proptest::prelude::*;

#[test]
fn category_split_examples() {
    assert_eq!(
        split_category("ACCESSORY/PHONE-CASE"),
        ("ACCESSORY", "PHONE-CASE")
    );
    assert_eq!(split_category("SHOES"), ("SHOES", ""));
}

#[test]
fn category_parts_are_cleaned_separately() {
    let (category, sub_category) = split_category("ACCESSORY/PHONE-CASE");
    assert_eq!(clean_text(category), "accessory");
    assert_eq!(clean_text(sub_category), "phone case");
    assert_eq!(clean_text("SHOES"), "shoe");
}

#[test]
fn fiber_names_from_labels() {
    assert_eq!(normalize_fiber_name("Polyester "), "polyester");
    assert_eq!(normalize_fiber_name("ELASTANE"), "elastane");
    assert_eq!(normalize_fiber_name("nylon  6-6"), "nylon 6 6");
}

proptest! {
    #[test]
    fn normalize_fiber_name_is_idempotent(raw in ".{0,48}") {
        let once = normalize_fiber_name(&raw);
        prop_assert_eq!(normalize_fiber_name(&once), once);
    }

    #[test]
    fn clean_text_is_idempotent(raw in ".{0,48}") {
        let once = clean_text(&raw);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn clean_text_is_idempotent_on_wordy_input(raw in "[A-Za-z]{1,10}( [A-Za-z]{1,10}){0,3}[s]?") {
        let once = clean_text(&raw);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn fiber_key_alphabet(raw in ".{0,48}") {
        let key = normalize_fiber_name(&raw);
        prop_assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' || c == '/'));
        prop_assert!(!key.starts_with(' ') && !key.ends_with(' ') && !key.contains("  "));
    }
}
