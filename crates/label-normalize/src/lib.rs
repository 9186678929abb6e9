//! Text normalization for care-label data.
//!
//! Two independent normalizers live here:
//!
//! - [`normalize_fiber_name`] builds the comparison key used by the fiber
//!   resolver (keeps `/`, drops every other punctuation mark).
//! - [`clean_text`] prepares part names and categories for storage and
//!   folds plural nouns to their singular form through a [`Singularize`]
//!   implementation.
//!
//! Both are pure and idempotent.

mod singular;
mod text;

pub use singular::{EnglishSingularizer, Singularize};
pub use text::{clean_text, clean_text_with, collapse_whitespace, normalize_fiber_name, split_category};
