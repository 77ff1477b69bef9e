//! Character-level text normalization over a fixed substitution table.
//!
//! The table collapses letter case, digit identity, and dash/quote/bracket
//! variants onto a small output alphabet and deletes characters that were
//! too rare in the reference corpus to keep. It is pure data: there is no
//! frequency analysis or rule engine here, only the resulting map and a
//! one-pass application of it.
//!
//! Characters absent from the table carry no rule at all. [`resolve`]
//! reports them as `None` and [`normalize`] handles them with the
//! caller-supplied [`Unmapped`] policy; the table itself prescribes no
//! default.
//!
//! Normalization is lossy and not idempotent in general: a capital letter
//! becomes a marker plus a placeholder, and feeding that back through the
//! table can change it again (see the crate tests). Outputs are
//! deterministic for a given input and policy.

use std::collections::HashMap;

mod charmap;

#[cfg(test)]
mod tests;

lazy_static::lazy_static! {
    static ref MAP: HashMap<char, &'static str> = charmap::make_hashmap();
}

/// What to do with a character the table has no entry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmapped {
    /// Pass the character through unchanged.
    Keep,
    /// Delete the character from the output.
    Drop,
    /// Substitute a fixed placeholder character.
    Replace(char),
}

/// Looks up the replacement for a single code point.
///
/// Returns `None` when the table carries no rule for `c`. A `Some("")`
/// result is meaningful: the character is deleted from normalized output.
pub fn resolve(c: char) -> Option<&'static str> {
    MAP.get(&c).copied()
}

/// Applies the table to `text` in one left-to-right pass, handling
/// unmapped characters per `unmapped`.
pub fn normalize(text: &str, unmapped: Unmapped) -> String {
    normalize_with(text, |c, out| match unmapped {
        Unmapped::Keep => out.push(c),
        Unmapped::Drop => {}
        Unmapped::Replace(p) => out.push(p),
    })
}

/// Like [`normalize`], but with an arbitrary fallback for unmapped
/// characters. The fallback appends whatever it wants for `c` to the
/// output accumulator; the [`Unmapped`] cases are shorthands for this.
pub fn normalize_with<F>(text: &str, mut fallback: F) -> String
where
    F: FnMut(char, &mut String),
{
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match MAP.get(&c) {
            Some(rep) => out.push_str(rep),
            None => fallback(c, &mut out),
        }
    }
    out
}
