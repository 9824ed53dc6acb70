// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Script classification
//!
//! A coarse code point range classifier used to resolve the dominant script
//! of a text when none is requested, and the corresponding OpenType script
//! tags used to select layout table features.

/// The OpenType default script tag
pub const DEFAULT_SCRIPT: &str = "DFLT";

/// The OpenType default language system tag
pub const DEFAULT_LANGUAGE: &str = "dflt";

/// Writing script
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Arabic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Thai,
    Lao,
    Tibetan,
    Georgian,
    Hangul,
    Han,
    Kana,
    /// Common, inherited or unknown
    Undetermined,
}

impl Script {
    /// Classify a character
    pub fn of(c: char) -> Script {
        use Script::*;
        match u32::from(c) {
            0x0041..=0x005A | 0x0061..=0x007A => Latin,
            0x00C0..=0x00D6 | 0x00D8..=0x00F6 | 0x00F8..=0x024F => Latin,
            0x1E00..=0x1EFF | 0x2C60..=0x2C7F | 0xA720..=0xA7FF | 0xAB30..=0xAB6F => Latin,
            0xFF21..=0xFF3A | 0xFF41..=0xFF5A => Latin,
            0x0370..=0x03FF | 0x1F00..=0x1FFF => Greek,
            0x0400..=0x052F | 0x2DE0..=0x2DFF | 0xA640..=0xA69F => Cyrillic,
            0x0530..=0x058F => Armenian,
            0x0590..=0x05FF | 0xFB1D..=0xFB4F => Hebrew,
            0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF => Arabic,
            0xFB50..=0xFDFF | 0xFE70..=0xFEFF => Arabic,
            0x0900..=0x097F | 0xA8E0..=0xA8FF => Devanagari,
            0x0980..=0x09FF => Bengali,
            0x0A00..=0x0A7F => Gurmukhi,
            0x0A80..=0x0AFF => Gujarati,
            0x0B00..=0x0B7F => Oriya,
            0x0B80..=0x0BFF => Tamil,
            0x0C00..=0x0C7F => Telugu,
            0x0C80..=0x0CFF => Kannada,
            0x0D00..=0x0D7F => Malayalam,
            0x0D80..=0x0DFF => Sinhala,
            0x0E00..=0x0E7F => Thai,
            0x0E80..=0x0EFF => Lao,
            0x0F00..=0x0FFF => Tibetan,
            0x10A0..=0x10FF | 0x2D00..=0x2D2F => Georgian,
            0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Hangul,
            0x2E80..=0x2FDF | 0x3400..=0x4DBF | 0x4E00..=0x9FFF => Han,
            0xF900..=0xFAFF | 0x20000..=0x2FA1F => Han,
            0x3040..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9F => Kana,
            _ => Undetermined,
        }
    }

    /// The OpenType script tag
    pub fn tag(self) -> &'static str {
        use Script::*;
        match self {
            Latin => "latn",
            Greek => "grek",
            Cyrillic => "cyrl",
            Armenian => "armn",
            Hebrew => "hebr",
            Arabic => "arab",
            Devanagari => "deva",
            Bengali => "beng",
            Gurmukhi => "guru",
            Gujarati => "gujr",
            Oriya => "orya",
            Tamil => "taml",
            Telugu => "telu",
            Kannada => "knda",
            Malayalam => "mlym",
            Sinhala => "sinh",
            Thai => "thai",
            Lao => "lao ",
            Tibetan => "tibt",
            Georgian => "geor",
            Hangul => "hang",
            Han => "hani",
            Kana => "kana",
            Undetermined => DEFAULT_SCRIPT,
        }
    }
}

/// Compute the dominant script of a text
///
/// This is the script with the most characters; ties go to the script seen
/// first. Characters of undetermined script (digits, punctuation, spaces,
/// combining marks) are not counted. A text with no classified character has
/// script [`Script::Undetermined`].
pub fn dominant_script(text: &[char]) -> Script {
    let mut counts: Vec<(Script, usize)> = Vec::new();
    for c in text.iter().copied().map(Script::of) {
        if c == Script::Undetermined {
            continue;
        }
        match counts.iter_mut().find(|(s, _)| *s == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }

    let mut best = (Script::Undetermined, 0);
    for (script, n) in counts {
        if n > best.1 {
            best = (script, n);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn dominant() {
        assert_eq!(dominant_script(&chars("Hello, world")), Script::Latin);
        assert_eq!(dominant_script(&chars("abc שלום")), Script::Hebrew);
        assert_eq!(dominant_script(&chars("ab αβ")), Script::Latin);
        assert_eq!(dominant_script(&chars("123 !?")), Script::Undetermined);
        assert_eq!(dominant_script(&[]), Script::Undetermined);
    }

    #[test]
    fn tags() {
        assert_eq!(Script::of('क').tag(), "deva");
        assert_eq!(Script::of('あ').tag(), "kana");
        assert_eq!(Script::Undetermined.tag(), DEFAULT_SCRIPT);
    }
}
