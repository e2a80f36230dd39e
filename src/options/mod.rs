//! Option bags and namespaced option extraction.
//!
//! - [`OptionBag`] - flat, ordered options with an explicit absent sentinel
//! - [`ExtractedOptions`] - a prefix-stripped subset keyed by [`OptionKey`]
//! - [`extract_prefixed_options`] - the pure transform between the two

pub mod bag;
pub mod extract;

pub use bag::{ExtractedOptions, OptionBag, OptionKey};
pub use extract::{extract_prefixed_options, normalize_prefix, PREFIX_SEPARATOR};
