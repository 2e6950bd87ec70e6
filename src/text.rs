// src/text.rs
//! Text normalization, tokenization and the naive suffix stemmer.
//!
//! `normalize` yields only `[a-z]` and single spaces. `tokenize` splits that
//! output and stems every fragment. The stemmer is deliberately crude: the
//! lexicon's prefixes are written against its truncation depth, so the order
//! (plural strip, then vowel strip) and the length guards must not change.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Shortest word the stemmer will touch.
const MIN_STEM_LEN: usize = 3;

/// Lowercase, strip diacritics, replace non-letters by spaces, collapse whitespace.
///
/// Total function: blank input gives an empty string.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = true;
    for ch in input.to_lowercase().nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_ascii_lowercase() {
            out.push(ch);
            last_space = false;
        } else if !last_space {
            out.push(' ');
            last_space = true;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Reduce a single word to its stem.
///
/// Words of three letters or fewer come back unchanged. Longer words lose one
/// trailing `s`, then (if still longer than three) one trailing `a`, `o` or `e`.
pub fn stem_word(word: &str) -> String {
    // Residue guard; normalized input is already letters-only.
    let mut w: String = word
        .to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if w.len() <= MIN_STEM_LEN {
        return w;
    }
    if w.ends_with('s') {
        w.pop();
    }
    if w.len() > MIN_STEM_LEN && (w.ends_with('a') || w.ends_with('o') || w.ends_with('e')) {
        w.pop();
    }
    w
}

/// Split normalized text on whitespace and stem each fragment.
///
/// Never yields empty tokens, even for input that was not normalized first.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(stem_word)
        .filter(|t| !t.is_empty())
        .collect()
}
