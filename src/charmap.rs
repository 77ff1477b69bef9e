//! The literal substitution table.
//!
//! Each entry maps one code point observed in the reference corpus to its
//! canonical replacement. Replacements may be empty (the character is
//! deleted from normalized output) or several code points long (capital
//! letters decompose into a `¹` marker plus a lowercase-class letter).
//! Characters missing from the table were never observed; lookups for them
//! miss and the caller's fallback policy applies.

use std::collections::HashMap;

/// Entries sorted by code point. Parenthesized numbers are occurrence
/// counts in the reference corpus; "removed" entries fell under the
/// 17-occurrence cutoff and map to the empty string.
pub(crate) static ENTRIES: [(char, &str); 153] = [
    ('\n', "\n"),       // kept Cc (3701)
    ('\r', ""),         // dispensable
    (' ', " "),         // kept Zs (126977)
    ('!', "!"),         // kept Po (471)
    ('"', "\""),
    ('$', ""),          // removed Sc, 2
    ('%', "%"),         // kept Po (146)
    ('&', "&"),         // kept Po (83)
    ('\'', "'"),
    ('(', "("),         // kept Ps (997)
    (')', ")"),         // kept Pe (1009)
    ('*', "*"),         // kept Po (18)
    ('+', ""),          // removed Sm, 4
    (',', ","),         // kept Po (7897)
    ('-', "-"),         // kept Pd (1015)
    ('.', "."),         // kept Po (7476)
    ('/', "/"),         // kept Po (136)
    // all decimal digits collapse to one representative digit
    ('0', "7"),
    ('1', "7"),
    ('2', "7"),
    ('3', "7"),
    ('4', "7"),
    ('5', "7"),
    ('6', "7"),
    ('7', "7"),
    ('8', "7"),
    ('9', "7"),
    (':', ":"),         // kept Po (480)
    (';', ";"),         // kept Po (507)
    ('=', ""),          // removed Sm, 7
    ('>', ""),          // removed Sm, 5
    ('?', "?"),         // kept Po (34)
    // capital Latin letters decompose to marker + lowercase placeholder;
    // 'Z' never occurred and has no entry
    ('A', "\u{b9}s"),
    ('B', "\u{b9}s"),
    ('C', "\u{b9}s"),
    ('D', "\u{b9}s"),
    ('E', "\u{b9}s"),
    ('F', "\u{b9}s"),
    ('G', "\u{b9}s"),
    ('H', "\u{b9}s"),
    ('I', "\u{b9}s"),
    ('J', "\u{b9}s"),
    ('K', "\u{b9}s"),
    ('L', "\u{b9}s"),
    ('M', "\u{b9}s"),
    ('N', "\u{b9}s"),
    ('O', "\u{b9}s"),
    ('P', "\u{b9}s"),
    ('Q', "\u{b9}s"),
    ('R', "\u{b9}s"),
    ('S', "\u{b9}s"),
    ('T', "\u{b9}s"),
    ('U', "\u{b9}s"),
    ('V', "\u{b9}s"),
    ('W', "\u{b9}s"),
    ('X', "\u{b9}s"),
    ('Y', "\u{b9}s"),
    ('[', "("),         // brackets unify; no '}' entry either
    (']', ")"),
    ('`', "`"),         // kept Sk (141)
    // lowercase Latin letters collapse to a single placeholder
    ('a', "s"),
    ('b', "s"),
    ('c', "s"),
    ('d', "s"),
    ('e', "s"),
    ('f', "s"),
    ('g', "s"),
    ('h', "s"),
    ('i', "s"),
    ('j', "s"),
    ('k', "s"),
    ('l', "s"),
    ('m', "s"),
    ('n', "s"),
    ('o', "s"),
    ('p', "s"),
    ('q', "s"),
    ('r', "s"),
    ('s', "s"),
    ('t', "s"),
    ('u', "s"),
    ('v', "s"),
    ('w', "s"),
    ('x', "s"),
    ('y', "s"),
    ('z', "s"),
    ('{', "("),
    ('|', ""),          // removed Sm, 0
    ('\u{85}', ""),     // NEXT LINE, dispensable
    ('\u{ab}', "\u{ab}"), // « kept Pi (656)
    ('\u{bb}', "\u{bb}"), // » kept Pf (650)
    ('\u{301}', "\u{301}"), // COMBINING ACUTE ACCENT, kept Mn (72085)
    ('\u{303}', ""),    // COMBINING TILDE, removed Mn, 1
    ('\u{308}', "\u{308}"), // COMBINING DIAERESIS, kept Mn (307)
    ('\u{313}', ""),    // COMBINING COMMA ABOVE, removed Mn, 1
    // Greek capitals decompose like Latin ones, but keep letter identity;
    // U+03A2 is unassigned and skipped
    ('\u{391}', "\u{b9}\u{3b1}"), // Α -> ¹α
    ('\u{392}', "\u{b9}\u{3b2}"), // Β -> ¹β
    ('\u{393}', "\u{b9}\u{3b3}"), // Γ -> ¹γ
    ('\u{394}', "\u{b9}\u{3b4}"), // Δ -> ¹δ
    ('\u{395}', "\u{b9}\u{3b5}"), // Ε -> ¹ε
    ('\u{396}', "\u{b9}\u{3b6}"), // Ζ -> ¹ζ
    ('\u{397}', "\u{b9}\u{3b7}"), // Η -> ¹η
    ('\u{398}', "\u{b9}\u{3b8}"), // Θ -> ¹θ
    ('\u{399}', "\u{b9}\u{3b9}"), // Ι -> ¹ι
    ('\u{39a}', "\u{b9}\u{3ba}"), // Κ -> ¹κ
    ('\u{39b}', "\u{b9}\u{3bb}"), // Λ -> ¹λ
    ('\u{39c}', "\u{b9}\u{3bc}"), // Μ -> ¹μ
    ('\u{39d}', "\u{b9}\u{3bd}"), // Ν -> ¹ν
    ('\u{39e}', "\u{b9}\u{3be}"), // Ξ -> ¹ξ
    ('\u{39f}', "\u{b9}\u{3bf}"), // Ο -> ¹ο
    ('\u{3a0}', "\u{b9}\u{3c0}"), // Π -> ¹π
    ('\u{3a1}', "\u{b9}\u{3c1}"), // Ρ -> ¹ρ
    ('\u{3a3}', "\u{b9}\u{3c3}"), // Σ -> ¹σ
    ('\u{3a4}', "\u{b9}\u{3c4}"), // Τ -> ¹τ
    ('\u{3a5}', "\u{b9}\u{3c5}"), // Υ -> ¹υ
    ('\u{3a6}', "\u{b9}\u{3c6}"), // Φ -> ¹φ
    ('\u{3a7}', "\u{b9}\u{3c7}"), // Χ -> ¹χ
    ('\u{3a8}', "\u{b9}\u{3c8}"), // Ψ -> ¹ψ
    ('\u{3a9}', "\u{b9}\u{3c9}"), // Ω -> ¹ω
    // lowercase Greek is frequent enough to keep verbatim
    ('\u{3b1}', "\u{3b1}"), // α
    ('\u{3b2}', "\u{3b2}"), // β
    ('\u{3b3}', "\u{3b3}"), // γ
    ('\u{3b4}', "\u{3b4}"), // δ
    ('\u{3b5}', "\u{3b5}"), // ε
    ('\u{3b6}', "\u{3b6}"), // ζ
    ('\u{3b7}', "\u{3b7}"), // η
    ('\u{3b8}', "\u{3b8}"), // θ
    ('\u{3b9}', "\u{3b9}"), // ι
    ('\u{3ba}', "\u{3ba}"), // κ
    ('\u{3bb}', "\u{3bb}"), // λ
    ('\u{3bc}', "\u{3bc}"), // μ
    ('\u{3bd}', "\u{3bd}"), // ν
    ('\u{3be}', "\u{3be}"), // ξ
    ('\u{3bf}', "\u{3bf}"), // ο
    ('\u{3c0}', "\u{3c0}"), // π
    ('\u{3c1}', "\u{3c1}"), // ρ
    ('\u{3c2}', "\u{3c2}"), // ς (final sigma)
    ('\u{3c3}', "\u{3c3}"), // σ
    ('\u{3c4}', "\u{3c4}"), // τ
    ('\u{3c5}', "\u{3c5}"), // υ
    ('\u{3c6}', "\u{3c6}"), // φ
    ('\u{3c7}', "\u{3c7}"), // χ
    ('\u{3c8}', "\u{3c8}"), // ψ
    ('\u{3c9}', "\u{3c9}"), // ω
    ('\u{2012}', "\u{2014}"), // FIGURE DASH -> EM DASH
    ('\u{2013}', "\u{2014}"), // EN DASH -> EM DASH
    ('\u{2018}', "'"),  // LEFT SINGLE QUOTATION MARK
    ('\u{2019}', "'"),  // RIGHT SINGLE QUOTATION MARK
    ('\u{201c}', "\""), // LEFT DOUBLE QUOTATION MARK
    ('\u{201d}', "\""), // RIGHT DOUBLE QUOTATION MARK
    ('\u{20ac}', "\u{20ac}"), // € kept Sc (77)
    ('\u{feff}', ""),   // ZERO WIDTH NO-BREAK SPACE, dispensable
    ('\u{1f600}', ""),  // 😀 removed, 1
];

pub(crate) fn make_hashmap() -> HashMap<char, &'static str> {
    let map: HashMap<char, &'static str> = ENTRIES.iter().copied().collect();
    debug_assert_eq!(map.len(), ENTRIES.len());
    tracing::debug!(entries = map.len(), "character map materialized");
    map
}
