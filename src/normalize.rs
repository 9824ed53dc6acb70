// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Canonical decomposition
//!
//! Only the precomposed characters which fonts commonly lack glyphs for are
//! decomposed: the Indic nukta forms, Tibetan stacked letters and Hebrew
//! presentation forms. Decompositions are full (recursively applied) and no
//! longer than [`MAX_DECOMPOSITION_LENGTH`].

use crate::Range;

/// Maximum number of characters a single character decomposes into
pub const MAX_DECOMPOSITION_LENGTH: usize = 3;

#[rustfmt::skip]
static DECOMPOSITIONS: &[(char, &[char])] = &[
    // Devanagari
    ('\u{0929}', &['\u{0928}', '\u{093C}']),
    ('\u{0931}', &['\u{0930}', '\u{093C}']),
    ('\u{0934}', &['\u{0933}', '\u{093C}']),
    ('\u{0958}', &['\u{0915}', '\u{093C}']),
    ('\u{0959}', &['\u{0916}', '\u{093C}']),
    ('\u{095A}', &['\u{0917}', '\u{093C}']),
    ('\u{095B}', &['\u{091C}', '\u{093C}']),
    ('\u{095C}', &['\u{0921}', '\u{093C}']),
    ('\u{095D}', &['\u{0922}', '\u{093C}']),
    ('\u{095E}', &['\u{092B}', '\u{093C}']),
    ('\u{095F}', &['\u{092F}', '\u{093C}']),
    // Bengali
    ('\u{09DC}', &['\u{09A1}', '\u{09BC}']),
    ('\u{09DD}', &['\u{09A2}', '\u{09BC}']),
    ('\u{09DF}', &['\u{09AF}', '\u{09BC}']),
    // Gurmukhi
    ('\u{0A33}', &['\u{0A32}', '\u{0A3C}']),
    ('\u{0A36}', &['\u{0A38}', '\u{0A3C}']),
    ('\u{0A59}', &['\u{0A16}', '\u{0A3C}']),
    ('\u{0A5A}', &['\u{0A17}', '\u{0A3C}']),
    ('\u{0A5B}', &['\u{0A1C}', '\u{0A3C}']),
    ('\u{0A5E}', &['\u{0A2B}', '\u{0A3C}']),
    // Oriya
    ('\u{0B5C}', &['\u{0B21}', '\u{0B3C}']),
    ('\u{0B5D}', &['\u{0B22}', '\u{0B3C}']),
    // Tibetan
    ('\u{0F43}', &['\u{0F42}', '\u{0FB7}']),
    ('\u{0F4D}', &['\u{0F4C}', '\u{0FB7}']),
    ('\u{0F52}', &['\u{0F51}', '\u{0FB7}']),
    ('\u{0F57}', &['\u{0F56}', '\u{0FB7}']),
    ('\u{0F5C}', &['\u{0F5B}', '\u{0FB7}']),
    ('\u{0F69}', &['\u{0F40}', '\u{0FB5}']),
    ('\u{0F73}', &['\u{0F71}', '\u{0F72}']),
    ('\u{0F75}', &['\u{0F71}', '\u{0F74}']),
    ('\u{0F76}', &['\u{0FB2}', '\u{0F80}']),
    ('\u{0F78}', &['\u{0FB3}', '\u{0F80}']),
    ('\u{0F81}', &['\u{0F71}', '\u{0F80}']),
    ('\u{0F93}', &['\u{0F92}', '\u{0FB7}']),
    ('\u{0F9D}', &['\u{0F9C}', '\u{0FB7}']),
    ('\u{0FA2}', &['\u{0FA1}', '\u{0FB7}']),
    ('\u{0FA7}', &['\u{0FA6}', '\u{0FB7}']),
    ('\u{0FAC}', &['\u{0FAB}', '\u{0FB7}']),
    ('\u{0FB9}', &['\u{0F90}', '\u{0FB5}']),
    // Hebrew presentation forms
    ('\u{FB1D}', &['\u{05D9}', '\u{05B4}']),
    ('\u{FB1F}', &['\u{05F2}', '\u{05B7}']),
    ('\u{FB2A}', &['\u{05E9}', '\u{05C1}']),
    ('\u{FB2B}', &['\u{05E9}', '\u{05C2}']),
    ('\u{FB2C}', &['\u{05E9}', '\u{05BC}', '\u{05C1}']),
    ('\u{FB2D}', &['\u{05E9}', '\u{05BC}', '\u{05C2}']),
    ('\u{FB2E}', &['\u{05D0}', '\u{05B7}']),
    ('\u{FB2F}', &['\u{05D0}', '\u{05B8}']),
    ('\u{FB30}', &['\u{05D0}', '\u{05BC}']),
    ('\u{FB31}', &['\u{05D1}', '\u{05BC}']),
    ('\u{FB32}', &['\u{05D2}', '\u{05BC}']),
    ('\u{FB33}', &['\u{05D3}', '\u{05BC}']),
    ('\u{FB34}', &['\u{05D4}', '\u{05BC}']),
    ('\u{FB35}', &['\u{05D5}', '\u{05BC}']),
    ('\u{FB36}', &['\u{05D6}', '\u{05BC}']),
    ('\u{FB38}', &['\u{05D8}', '\u{05BC}']),
    ('\u{FB39}', &['\u{05D9}', '\u{05BC}']),
    ('\u{FB3A}', &['\u{05DA}', '\u{05BC}']),
    ('\u{FB3B}', &['\u{05DB}', '\u{05BC}']),
    ('\u{FB3C}', &['\u{05DC}', '\u{05BC}']),
    ('\u{FB3E}', &['\u{05DE}', '\u{05BC}']),
    ('\u{FB40}', &['\u{05E0}', '\u{05BC}']),
    ('\u{FB41}', &['\u{05E1}', '\u{05BC}']),
    ('\u{FB43}', &['\u{05E3}', '\u{05BC}']),
    ('\u{FB44}', &['\u{05E4}', '\u{05BC}']),
    ('\u{FB46}', &['\u{05E6}', '\u{05BC}']),
    ('\u{FB47}', &['\u{05E7}', '\u{05BC}']),
    ('\u{FB48}', &['\u{05E8}', '\u{05BC}']),
    ('\u{FB49}', &['\u{05E9}', '\u{05BC}']),
    ('\u{FB4A}', &['\u{05EA}', '\u{05BC}']),
    ('\u{FB4B}', &['\u{05D5}', '\u{05B9}']),
    ('\u{FB4C}', &['\u{05D1}', '\u{05BF}']),
    ('\u{FB4D}', &['\u{05DB}', '\u{05BF}']),
    ('\u{FB4E}', &['\u{05E4}', '\u{05BF}']),
];

/// Get the decomposition of `c`, if it has one
pub fn decomposition(c: char) -> Option<&'static [char]> {
    let index = DECOMPOSITIONS.binary_search_by_key(&c, |&(k, _)| k).ok()?;
    Some(DECOMPOSITIONS[index].1)
}

/// True if `c` has a decomposition
pub fn is_decomposable(c: char) -> bool {
    decomposition(c).is_some()
}

/// True if any character of `text` has a decomposition
pub fn has_decomposable(text: &[char]) -> bool {
    text.iter().any(|&c| is_decomposable(c))
}

/// Decompose `text` in place
///
/// Each element of `associations` is the source text range of the character
/// at the same index; decomposed characters inherit the range of the
/// character they replace. Text with nothing to decompose is left untouched.
pub fn decompose(text: &mut Vec<char>, associations: &mut Vec<Range>) {
    debug_assert_eq!(text.len(), associations.len());
    if !has_decomposable(text) {
        return;
    }

    let mut out_text = Vec::with_capacity(text.len() + text.len() / 2);
    let mut out_assoc = Vec::with_capacity(out_text.capacity());
    for (&c, &range) in text.iter().zip(associations.iter()) {
        match decomposition(c) {
            Some(parts) => {
                for &part in parts {
                    out_text.push(part);
                    out_assoc.push(range);
                }
            }
            None => {
                out_text.push(c);
                out_assoc.push(range);
            }
        }
    }
    *text = out_text;
    *associations = out_assoc;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_bounded() {
        assert!(DECOMPOSITIONS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(DECOMPOSITIONS
            .iter()
            .all(|(_, d)| d.len() <= MAX_DECOMPOSITION_LENGTH));
    }

    #[test]
    fn decompose_keeps_associations() {
        let mut text: Vec<char> = "a\u{FB2C}b".chars().collect();
        let mut assoc: Vec<Range> = (0..3usize).map(|i| Range::from(i..i + 1)).collect();
        decompose(&mut text, &mut assoc);
        assert_eq!(text, ['a', '\u{05E9}', '\u{05BC}', '\u{05C1}', 'b']);
        assert_eq!(assoc[1], Range::from(1usize..2));
        assert_eq!(assoc[3], Range::from(1usize..2));
        assert_eq!(assoc[4], Range::from(2usize..3));
    }

    #[test]
    fn nothing_to_decompose() {
        let mut text: Vec<char> = "plain".chars().collect();
        let mut assoc = vec![Range::default(); 5];
        decompose(&mut text, &mut assoc);
        assert_eq!(text.len(), 5);
        assert!(!is_decomposable('é'));
    }
}
