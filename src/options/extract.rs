//! Namespaced option extraction.
//!
//! Build lanes receive one flat option bag and hand each sub-component the
//! options carrying its prefix, with the prefix removed:
//!
//! ```
//! use buildprep::options::{extract_prefixed_options, OptionBag};
//!
//! let bag: OptionBag<&str> = [
//!     ("android_path", Some("/a")),
//!     ("android_sdk", Some("21")),
//!     ("other", Some("x")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let android = extract_prefixed_options(Some(&bag), "android");
//! let keys: Vec<_> = android.keys().map(|k| k.as_str()).collect();
//! assert_eq!(keys, ["path", "sdk"]);
//! ```

use super::bag::{ExtractedOptions, OptionBag, OptionKey};

/// Separator between a prefix and the option name.
pub const PREFIX_SEPARATOR: char = '_';

/// Normalize a prefix so it ends with [`PREFIX_SEPARATOR`].
///
/// Returns `None` for an empty prefix.
pub fn normalize_prefix(prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }

    if prefix.ends_with(PREFIX_SEPARATOR) {
        Some(prefix.to_string())
    } else {
        Some(format!("{}{}", prefix, PREFIX_SEPARATOR))
    }
}

/// Extract the options whose key starts with `prefix`, re-keyed without it.
///
/// An absent bag or an empty prefix yields an empty result. Entries whose
/// value is `None` are never copied. The first occurrence of the normalized
/// prefix text is removed from each matching key. When two keys strip to
/// the same name the later entry's value wins.
pub fn extract_prefixed_options<V: Clone>(
    options: Option<&OptionBag<V>>,
    prefix: impl AsRef<str>,
) -> ExtractedOptions<V> {
    let mut extracted = ExtractedOptions::new();

    let Some(options) = options else {
        return extracted;
    };
    let Some(prefix) = normalize_prefix(prefix.as_ref()) else {
        return extracted;
    };

    for (key, value) in options.iter() {
        let Some(value) = value else {
            continue;
        };
        if !key.starts_with(&prefix) {
            continue;
        }

        let stripped = key.replacen(&prefix, "", 1);
        extracted.insert(OptionKey::from(stripped), value.clone());
    }

    tracing::debug!(
        prefix = %prefix,
        matched = extracted.len(),
        total = options.len(),
        "extracted prefixed options"
    );

    extracted
}
