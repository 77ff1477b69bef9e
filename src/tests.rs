use crate::charmap::ENTRIES;
use crate::{normalize, normalize_with, resolve, Unmapped};

#[test]
fn every_entry_resolves_to_its_listed_replacement() {
    assert_eq!(ENTRIES.len(), 153);
    for &(c, rep) in ENTRIES.iter() {
        assert_eq!(resolve(c), Some(rep), "entry for {c:?}");
    }
}

#[test]
fn deletions_resolve_to_the_empty_string() {
    assert_eq!(resolve('$'), Some(""));
    assert_eq!(resolve('\r'), Some(""));
    assert_eq!(resolve('|'), Some(""));
    assert_eq!(resolve('\u{feff}'), Some(""));
    assert_eq!(resolve('\u{1f600}'), Some(""));
}

#[test]
fn decompositions() {
    assert_eq!(resolve('A'), Some("\u{b9}s"));
    assert_eq!(resolve('A').unwrap().chars().count(), 2);
    // Greek capitals keep letter identity under the marker
    assert_eq!(resolve('\u{391}'), Some("\u{b9}\u{3b1}"));
    assert_eq!(resolve('\u{3a9}'), Some("\u{b9}\u{3c9}"));
}

#[test]
fn folds_and_unifications() {
    assert_eq!(resolve('0'), Some("7"));
    assert_eq!(resolve('9'), Some("7"));
    assert_eq!(resolve('q'), Some("s"));
    assert_eq!(resolve('['), Some("("));
    assert_eq!(resolve('{'), Some("("));
    assert_eq!(resolve(']'), Some(")"));
    assert_eq!(resolve('\u{2013}'), Some("\u{2014}"));
    assert_eq!(resolve('\u{2019}'), Some("'"));
    assert_eq!(resolve('\u{201c}'), Some("\""));
}

#[test]
fn absent_code_points_miss() {
    // never observed in the corpus, so no rule exists
    assert_eq!(resolve('#'), None);
    assert_eq!(resolve('@'), None);
    assert_eq!(resolve('Z'), None);
    assert_eq!(resolve('}'), None);
    assert_eq!(resolve('<'), None);
}

#[test]
fn miss_handling_depends_only_on_the_policy() {
    assert_eq!(normalize("#", Unmapped::Keep), "#");
    assert_eq!(normalize("#", Unmapped::Drop), "");
    assert_eq!(normalize("#", Unmapped::Replace('?')), "?");
    // mapped neighbours are unaffected by the policy choice
    assert_eq!(normalize("a#b", Unmapped::Drop), "ss");
    assert_eq!(normalize("a#b", Unmapped::Keep), "s#s");
}

#[test]
fn normalize_is_deterministic() {
    let a = normalize("AbC123", Unmapped::Keep);
    let b = normalize("AbC123", Unmapped::Keep);
    assert_eq!(a, "\u{b9}ss\u{b9}s777");
    assert_eq!(a, b);
}

#[test]
fn normalize_is_not_idempotent() {
    // The caps marker U+00B9 has no entry, so a second pass under Drop
    // erases it. This is accepted behavior, not a bug: exactly one
    // substitution pass is defined.
    let once = normalize("A", Unmapped::Drop);
    assert_eq!(once, "\u{b9}s");
    let twice = normalize(&once, Unmapped::Drop);
    assert_eq!(twice, "s");
    assert_ne!(once, twice);
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(normalize("", Unmapped::Keep), "");
    assert_eq!(normalize("", Unmapped::Replace('x')), "");
}

#[test]
fn fully_deleted_input_yields_empty_output() {
    assert_eq!(normalize("\r$", Unmapped::Keep), "");
    assert_eq!(normalize("+=>|", Unmapped::Keep), "");
}

#[test]
fn custom_fallback_sees_each_unmapped_character() {
    let mut seen = Vec::new();
    let out = normalize_with("a#b@", |c, out| {
        seen.push(c);
        out.push('_');
    });
    assert_eq!(out, "s_s_");
    assert_eq!(seen, vec!['#', '@']);
}
