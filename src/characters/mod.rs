// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Character classification
//!
//! Stateless predicates and mappings over Unicode scalar values, consulted
//! throughout glyph mapping and by layout consumers (line breaking, vertical
//! text).
//!
//! Whitespace comes in three overlapping kinds:
//!
//! -   *breaking* whitespace permits a line break (HT, LF, VT, FF, CR, space,
//!     the general punctuation spaces U+2000..U+200B, line separator and
//!     medium mathematical space)
//! -   *non-breaking* whitespace does not (no-break space, narrow no-break
//!     space)
//! -   *zero-width* whitespace contributes no advance (the C0 whitespace
//!     controls, zero-width space and the line and paragraph separators)

mod tables;

use std::fmt;
use unicode_bidi::BidiClass;

const UC_HT: u32 = 0x0009;
const UC_LF: u32 = 0x000A;
const UC_VT: u32 = 0x000B;
const UC_FF: u32 = 0x000C;
const UC_CR: u32 = 0x000D;
const UC_SPACE: u32 = 0x0020;
const UC_HYPHEN_MINUS: u32 = 0x002D;
const UC_NBSP: u32 = 0x00A0;
const UC_SOFT_HYPHEN: u32 = 0x00AD;
const UC_SPACE_EN_QUAD: u32 = 0x2000;
const UC_SPACE_ZWSP: u32 = 0x200B;
const UC_LINE_SEPARATOR: u32 = 0x2028;
const UC_PARA_SEPARATOR: u32 = 0x2029;
const UC_NNBSP: u32 = 0x202F;
const UC_MMSP: u32 = 0x205F;

/// Vertical orientation class, per Unicode UTR #50
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalOrientation {
    /// Upright, same orientation as in the code charts
    U,
    /// Sideways, rotated 90° from the code charts
    R,
    /// Vertical glyph variant if available, else upright
    Tu,
    /// Vertical glyph variant if available, else sideways
    Tr,
}

#[inline]
fn code(c: char) -> u32 {
    u32::from(c)
}

/// Format a character for diagnostics: `'c' (U+XXXX)`
///
/// Supplementary plane characters use six hex digits.
pub fn format_character(c: char) -> String {
    FormatCharacter(c).to_string()
}

struct FormatCharacter(char);

impl fmt::Display for FormatCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        if code(c) < 0x10000 {
            write!(f, "'{c}' (U+{:04X})", code(c))
        } else {
            write!(f, "'{c}' (U+{:06X})", code(c))
        }
    }
}

/// Line separator (U+2028)
pub fn is_line_separator(c: char) -> bool {
    code(c) == UC_LINE_SEPARATOR
}

/// Whitespace at which a line may be broken
pub fn is_breaking_whitespace(c: char) -> bool {
    matches!(
        code(c),
        UC_HT | UC_LF | UC_VT | UC_FF | UC_CR | UC_SPACE | UC_LINE_SEPARATOR | UC_MMSP
    ) || (UC_SPACE_EN_QUAD..=UC_SPACE_ZWSP).contains(&code(c))
}

/// Whitespace at which a line must not be broken
pub fn is_non_breaking_whitespace(c: char) -> bool {
    matches!(code(c), UC_NBSP | UC_NNBSP)
}

/// Breaking or non-breaking whitespace
pub fn is_whitespace(c: char) -> bool {
    is_breaking_whitespace(c) || is_non_breaking_whitespace(c)
}

/// Whitespace which never contributes an advance
pub fn is_zero_width_whitespace(c: char) -> bool {
    matches!(
        code(c),
        UC_HT
            | UC_LF
            | UC_VT
            | UC_FF
            | UC_CR
            | UC_SPACE_ZWSP
            | UC_LINE_SEPARATOR
            | UC_PARA_SEPARATOR
    )
}

/// Hyphen-minus or soft hyphen
pub fn is_hyphenation_point(c: char) -> bool {
    matches!(code(c), UC_HYPHEN_MINUS | UC_SOFT_HYPHEN)
}

/// Combining and formatting characters which occupy no space of their own
pub fn is_non_spacing(c: char) -> bool {
    match code(c) {
        0x0300..=0x036F => true,
        c @ 0x0590..=0x05CF => c != 0x05C0 && c != 0x05C6,
        0x0610..=0x061A | 0x061C => true,
        0x064B..=0x065F => true,
        c @ 0x06D6..=0x06ED => c != 0x06E5 && c != 0x06E6 && c != 0x06E9,
        0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF => true,
        0x2000..=0x200F | 0x2028..=0x202F | 0x205F..=0x206F => true,
        _ => false,
    }
}

/// CJK symbols and punctuation
pub fn is_cjk_symbol(c: char) -> bool {
    (0x3000..=0x303F).contains(&code(c))
}

pub fn is_hiragana(c: char) -> bool {
    (0x3040..=0x309F).contains(&code(c))
}

pub fn is_katakana(c: char) -> bool {
    (0x30A0..=0x30FF).contains(&code(c))
}

/// CJK unified ideographs
pub fn is_cjk_ideograph(c: char) -> bool {
    (0x4E00..=0x9FCC).contains(&code(c))
}

/// CJK vertical forms
pub fn is_cjk_vertical(c: char) -> bool {
    (0xFE10..=0xFE1F).contains(&code(c))
}

/// CJK compatibility forms
pub fn is_cjk_compatibility(c: char) -> bool {
    (0xFE30..=0xFE4F).contains(&code(c))
}

/// Halfwidth and fullwidth forms block
pub fn is_cjk_half_full_width(c: char) -> bool {
    (0xFF00..=0xFFEF).contains(&code(c))
}

/// Member of any CJK block
pub fn is_cjk(c: char) -> bool {
    is_cjk_symbol(c)
        || is_hiragana(c)
        || is_katakana(c)
        || is_cjk_ideograph(c)
        || is_cjk_vertical(c)
        || is_cjk_compatibility(c)
        || is_cjk_half_full_width(c)
}

/// Upright (rather than mixed) orientation in vertical text
///
/// CJK is upright, as is any character with a vertical presentation form.
pub fn is_upright(c: char) -> bool {
    is_cjk(c) || has_vertical(c)
}

/// Look up the UTR #50 vertical orientation of `c`
///
/// Code points the tables do not cover are upright.
pub fn vertical_orientation(c: char) -> VerticalOrientation {
    let c = code(c);
    let ranges = &tables::VERTICAL_ORIENTATION_RANGES;
    let index = ranges.partition_point(|&(_, last, _)| last < c);
    if let Some(&(first, _, vo)) = ranges.get(index) {
        if first <= c {
            return vo;
        }
    }
    let singles = &tables::VERTICAL_ORIENTATION_SINGLES;
    match singles.binary_search_by_key(&c, |&(k, _)| k) {
        Ok(index) => singles[index].1,
        Err(_) => VerticalOrientation::U,
    }
}

/// Upright per UTR #50, honouring vertical presentation forms
pub fn is_upright_orientation(c: char) -> bool {
    match vertical_orientation(c) {
        VerticalOrientation::U | VerticalOrientation::Tu => true,
        VerticalOrientation::Tr => has_vertical(c),
        VerticalOrientation::R => false,
    }
}

fn lookup(table: &[(u32, u32)], c: char) -> Option<char> {
    let index = table.binary_search_by_key(&code(c), |&(k, _)| k).ok()?;
    char::from_u32(table[index].1)
}

/// True if `c` has a half-width form
pub fn has_half_width(c: char) -> bool {
    lookup(&tables::FULL_TO_HALF, c).is_some()
}

/// Map to the half-width form, if any, else return `c`
pub fn to_half_width(c: char) -> char {
    lookup(&tables::FULL_TO_HALF, c).unwrap_or(c)
}

/// True if `c` has a full-width form
pub fn has_full_width(c: char) -> bool {
    lookup(&tables::HALF_TO_FULL, c).is_some()
}

/// Map to the full-width form, if any, else return `c`
pub fn to_full_width(c: char) -> char {
    lookup(&tables::HALF_TO_FULL, c).unwrap_or(c)
}

const HORIZONTAL_TO_VERTICAL: [(u32, u32); 1] = [(0x2026, 0xFE19)];

/// True if `c` has a vertical presentation form
pub fn has_vertical(c: char) -> bool {
    lookup(&HORIZONTAL_TO_VERTICAL, c).is_some()
}

/// Map to the vertical presentation form, if any, else return `c`
pub fn to_vertical(c: char) -> char {
    lookup(&HORIZONTAL_TO_VERTICAL, c).unwrap_or(c)
}

/// True if `c` has a bidi mirrored counterpart
pub fn has_mirror(c: char) -> bool {
    unicode_bidi_mirroring::get_mirrored(c).is_some()
}

/// Map to the bidi mirrored counterpart, if any, else return `c`
pub fn to_mirror(c: char) -> char {
    unicode_bidi_mirroring::get_mirrored(c).unwrap_or(c)
}

/// Explicit bidi embedding, override or isolate control
pub fn is_bidi_control(c: char) -> bool {
    use BidiClass::*;
    matches!(
        unicode_bidi::bidi_class(c),
        LRE | RLE | PDF | LRO | RLO | LRI | RLI | FSI | PDI
    )
}

/// Control and format characters removed from substituted glyph sequences
///
/// These are the C0 and C1 controls, the zero-width and directional marks,
/// the line and paragraph separators, embeddings and overrides, the invisible
/// operators and any explicit bidi control.
pub fn is_elidable_control(c: char) -> bool {
    match code(c) {
        0x0000..=0x001F | 0x0080..=0x009F => true,
        0x200B..=0x200F | 0x2028..=0x202E | 0x2060..=0x2064 | 0x2066..=0x206F => true,
        _ => is_bidi_control(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_kinds() {
        assert!(is_breaking_whitespace(' '));
        assert!(is_breaking_whitespace('\u{2009}'));
        assert!(!is_breaking_whitespace('\u{00A0}'));
        assert!(is_non_breaking_whitespace('\u{202F}'));
        assert!(is_whitespace('\u{00A0}'));
        assert!(is_zero_width_whitespace('\n'));
        assert!(is_zero_width_whitespace('\u{2029}'));
        assert!(!is_zero_width_whitespace(' '));
        // paragraph separator is zero-width but not breaking
        assert!(!is_breaking_whitespace('\u{2029}'));
    }

    #[test]
    fn cjk_and_orientation() {
        assert!(is_cjk('\u{3042}'));
        assert!(is_cjk('\u{FF21}'));
        assert!(!is_cjk('A'));
        assert!(is_upright('\u{4E00}'));
        assert!(is_upright('\u{2026}'));
        assert!(!is_upright('A'));
        assert_eq!(vertical_orientation('A'), VerticalOrientation::R);
        assert_eq!(vertical_orientation('\u{4E00}'), VerticalOrientation::U);
        assert!(is_upright_orientation('\u{AC00}'));
        assert!(!is_upright_orientation('a'));
    }

    #[test]
    fn half_full_width_round_trip() {
        for &(half, full) in tables::HALF_TO_FULL.iter() {
            let half = char::from_u32(half).unwrap();
            let full = char::from_u32(full).unwrap();
            assert_eq!(to_full_width(half), full);
            assert_eq!(to_half_width(to_full_width(half)), half);
            assert!(has_half_width(full));
        }
        assert_eq!(to_full_width('A'), '\u{FF21}');
        assert_eq!(to_half_width('\u{FF21}'), 'A');
        assert_eq!(to_half_width('\u{4E00}'), '\u{4E00}');
        assert_eq!(to_full_width('\u{4E00}'), '\u{4E00}');
    }

    #[test]
    fn tables_are_sorted() {
        let sorted = |t: &[(u32, u32)]| t.windows(2).all(|w| w[0].0 < w[1].0);
        assert!(sorted(&tables::HALF_TO_FULL));
        assert!(sorted(&tables::FULL_TO_HALF));
        assert!(tables::VERTICAL_ORIENTATION_RANGES
            .windows(2)
            .all(|w| w[0].1 < w[1].0));
    }

    #[test]
    fn controls() {
        assert!(is_elidable_control('\u{200D}'));
        assert!(is_elidable_control('\u{202B}'));
        assert!(is_elidable_control('\u{2067}'));
        assert!(!is_elidable_control('\u{2065}'));
        assert!(!is_elidable_control('A'));
        assert!(is_bidi_control('\u{2068}'));
        assert_eq!(to_mirror('('), ')');
        assert!(!has_mirror('a'));
        assert_eq!(format_character('A'), "'A' (U+0041)");
        assert_eq!(format_character('\u{1F600}'), "'\u{1F600}' (U+01F600)");
    }
}
