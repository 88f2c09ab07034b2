//! Name → key derivation.
//!
//! Keys contain only `[a-z0-9-]`: the name is decomposed (NFD), combining
//! marks are dropped, what remains is transliterated to ASCII, and every run
//! of non-alphanumeric characters collapses into a single `-` with no
//! separator at either end. The mapping is pure and stable, and composed or
//! decomposed spellings of one visible name give the same key. Different
//! names can collapse onto one key ("Tomato Soup" and "tomato---soup!"); that
//! collision is accepted and left to the caller.

use deunicode::deunicode_with_tofu;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

const SEPARATOR: char = '-';

/// Derive the URL-safe lookup key for a recipe name.
pub fn slugify(name: &str) -> String {
    let bare: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    // characters without a transliteration act as separators
    let ascii = deunicode_with_tofu(&bare, "-");

    let mut out = String::with_capacity(ascii.len());
    let mut pending_sep = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push(SEPARATOR);
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}
