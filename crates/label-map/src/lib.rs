//! Canonical fiber-name resolution.
//!
//! Fiber names that differ only by spelling, token order or stray
//! characters are folded onto a single canonical name. The
//! [`FiberResolver`] keeps a [`CanonicalRegistry`] of names with usage
//! counts; each new name is compared against every registered name with a
//! token-sort similarity score and, when several candidates clear the
//! threshold, the most used one wins.
//!
//! Resolution is order dependent: counts accumulate as names are resolved,
//! so the same input processed in a different order can produce different
//! canonical names. Seeding the registry from a [`FrequencyMap`] built in a
//! first pass anchors common names before any matching happens.

#![deny(unsafe_code)]

mod frequency;
mod options;
mod registry;
mod resolver;
mod score;

pub use frequency::FrequencyMap;
pub use options::ResolverOptions;
pub use registry::{CanonicalRegistry, RegistryEntry};
pub use resolver::{FiberResolver, Resolution};
pub use score::{token_sort_key, token_sort_ratio};
