// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Character data tables
//!
//! All tables are sorted by their first column for binary search.

use super::VerticalOrientation::{self, *};

/// Vertical orientation (Unicode UTR #50) of code point ranges, inclusive
#[rustfmt::skip]
pub(super) static VERTICAL_ORIENTATION_RANGES: [(u32, u32, VerticalOrientation); 142] = [
    (0x0000, 0x00A6, R),
    (0x00AA, 0x00AD, R),
    (0x00AF, 0x00B0, R),
    (0x00B2, 0x00BB, R),
    (0x00BC, 0x00BE, U),
    (0x00BF, 0x00D6, R),
    (0x00D8, 0x00F6, R),
    (0x00F8, 0x02E9, R),
    (0x02EA, 0x02EB, U),
    (0x02EC, 0x10FF, R),
    (0x1100, 0x11FF, U),
    (0x1200, 0x1400, R),
    (0x1401, 0x167F, U),
    (0x1680, 0x18AF, R),
    (0x18B0, 0x18FF, U),
    (0x1900, 0x2015, R),
    (0x2017, 0x201F, R),
    (0x2020, 0x2021, U),
    (0x2022, 0x2025, R),
    (0x2027, 0x202F, R),
    (0x2030, 0x2031, U),
    (0x2032, 0x203A, R),
    (0x203B, 0x203C, U),
    (0x203D, 0x2041, R),
    (0x2043, 0x2046, R),
    (0x2047, 0x2049, U),
    (0x204A, 0x2050, R),
    (0x2052, 0x2064, R),
    (0x2066, 0x20DC, R),
    (0x20DD, 0x20E0, U),
    (0x20E2, 0x20E4, U),
    (0x20E5, 0x20FF, R),
    (0x2100, 0x2101, U),
    (0x2103, 0x2109, U),
    (0x210A, 0x210E, R),
    (0x2110, 0x2112, R),
    (0x2113, 0x2114, U),
    (0x2116, 0x2117, U),
    (0x2118, 0x211D, R),
    (0x211E, 0x2123, U),
    (0x212A, 0x212D, R),
    (0x212F, 0x2134, R),
    (0x2135, 0x213F, U),
    (0x2140, 0x2144, R),
    (0x2145, 0x214A, U),
    (0x214C, 0x214D, U),
    (0x214F, 0x218F, U),
    (0x2190, 0x221D, R),
    (0x221F, 0x2233, R),
    (0x2234, 0x2235, U),
    (0x2236, 0x22FF, R),
    (0x2300, 0x2307, U),
    (0x230C, 0x231F, U),
    (0x2320, 0x2323, R),
    (0x2324, 0x2328, U),
    (0x2329, 0x232A, Tr),
    (0x232C, 0x237C, R),
    (0x237D, 0x239A, U),
    (0x239B, 0x23BD, R),
    (0x23BE, 0x23CD, U),
    (0x23D1, 0x23DB, U),
    (0x23DC, 0x23E1, R),
    (0x23E2, 0x2422, U),
    (0x2424, 0x24FF, U),
    (0x2500, 0x259F, R),
    (0x25A0, 0x2619, U),
    (0x261A, 0x261F, R),
    (0x2620, 0x2767, U),
    (0x2768, 0x2775, R),
    (0x2776, 0x2793, U),
    (0x2794, 0x2B11, R),
    (0x2B12, 0x2B2F, U),
    (0x2B30, 0x2B4F, R),
    (0x2B50, 0x2B59, U),
    (0x2B5A, 0x2BB7, R),
    (0x2BB8, 0x2BFF, U),
    (0x2C00, 0x2E7F, R),
    (0x2E80, 0x3000, U),
    (0x3001, 0x3002, Tu),
    (0x3003, 0x3007, U),
    (0x3008, 0x3011, Tr),
    (0x3012, 0x3013, U),
    (0x3014, 0x301F, Tr),
    (0x3020, 0x302F, U),
    (0x3031, 0x3040, U),
    (0x304A, 0x3062, U),
    (0x3064, 0x3082, U),
    (0x3088, 0x308D, U),
    (0x308F, 0x3094, U),
    (0x3095, 0x3096, Tu),
    (0x3097, 0x309A, U),
    (0x309B, 0x309C, Tu),
    (0x309D, 0x309F, U),
    (0x30AA, 0x30C2, U),
    (0x30C4, 0x30E2, U),
    (0x30E8, 0x30ED, U),
    (0x30EF, 0x30F4, U),
    (0x30F5, 0x30F6, Tu),
    (0x30F7, 0x30FB, U),
    (0x30FD, 0x3126, U),
    (0x3128, 0x31EF, U),
    (0x31F0, 0x31FF, Tu),
    (0x3200, 0x32FF, U),
    (0x3300, 0x3357, Tu),
    (0x3358, 0x337A, U),
    (0x337B, 0x337F, Tu),
    (0x3380, 0xA4CF, U),
    (0xA4D0, 0xA95F, R),
    (0xA960, 0xA97F, U),
    (0xA980, 0xABFF, R),
    (0xAC00, 0xD7FF, U),
    (0xD800, 0xDFFF, R),
    (0xE000, 0xFAFF, U),
    (0xFB00, 0xFE0F, R),
    (0xFE10, 0xFE1F, U),
    (0xFE20, 0xFE2F, R),
    (0xFE30, 0xFE48, U),
    (0xFE49, 0xFE4F, R),
    (0xFE50, 0xFE52, Tu),
    (0xFE53, 0xFE57, U),
    (0xFE59, 0xFE5E, Tr),
    (0xFE5F, 0xFE62, U),
    (0xFE63, 0xFE66, R),
    (0xFE67, 0xFE6F, U),
    (0xFE70, 0xFF00, R),
    (0xFF02, 0xFF07, U),
    (0xFF08, 0xFF09, Tr),
    (0xFF0A, 0xFF0B, U),
    (0xFF0F, 0xFF19, U),
    (0xFF1A, 0xFF1B, Tr),
    (0xFF1C, 0xFF1E, R),
    (0xFF20, 0xFF3A, U),
    (0xFF40, 0xFF5A, U),
    (0xFF5B, 0xFF60, Tr),
    (0xFF61, 0xFFDF, R),
    (0xFFE0, 0xFFE2, U),
    (0xFFE4, 0xFFE7, U),
    (0xFFE8, 0xFFEF, R),
    (0xFFF0, 0xFFF8, U),
    (0xFFF9, 0xFFFB, R),
    (0xFFFC, 0xFFFD, U),
    (0xFFFE, 0xFFFF, R),
];

/// Vertical orientation of code points not covered by a range
#[rustfmt::skip]
pub(super) static VERTICAL_ORIENTATION_SINGLES: [(u32, VerticalOrientation); 50] = [
    (0x2016, Tr),
    (0x2026, Tr),
    (0x3030, Tr),
    (0x3041, Tu),
    (0x3042, U),
    (0x3043, Tu),
    (0x3044, U),
    (0x3045, Tu),
    (0x3046, U),
    (0x3047, Tu),
    (0x3048, U),
    (0x3049, Tu),
    (0x3063, Tu),
    (0x3083, Tu),
    (0x3084, U),
    (0x3085, Tu),
    (0x3086, U),
    (0x3087, Tu),
    (0x308E, Tu),
    (0x30A0, Tr),
    (0x30A1, Tu),
    (0x30A2, U),
    (0x30A3, Tu),
    (0x30A4, U),
    (0x30A5, Tu),
    (0x30A6, U),
    (0x30A7, Tu),
    (0x30A8, U),
    (0x30A9, Tu),
    (0x30C3, Tu),
    (0x30E3, Tu),
    (0x30E4, U),
    (0x30E5, Tu),
    (0x30E6, U),
    (0x30E7, Tu),
    (0x30EE, Tu),
    (0x30FC, Tr),
    (0x3127, Tu),
    (0xFE58, R),
    (0xFF01, Tu),
    (0xFF0C, Tu),
    (0xFF0D, R),
    (0xFF0E, Tu),
    (0xFF1F, Tu),
    (0xFF3B, Tr),
    (0xFF3C, U),
    (0xFF3D, Tr),
    (0xFF3E, U),
    (0xFF3F, Tr),
    (0xFFE3, Tr),
];

/// Half-width (or narrow) form to full-width (or wide) form
#[rustfmt::skip]
pub(super) static HALF_TO_FULL: [(u32, u32); 173] = [
    (0x0021, 0xFF01), (0x0022, 0xFF02), (0x0023, 0xFF03), (0x0024, 0xFF04),
    (0x0025, 0xFF05), (0x0026, 0xFF06), (0x0027, 0xFF07), (0x0028, 0xFF08),
    (0x0029, 0xFF09), (0x002A, 0xFF0A), (0x002B, 0xFF0B), (0x002C, 0xFF0C),
    (0x002D, 0xFF0D), (0x002E, 0xFF0E), (0x002F, 0xFF0F), (0x0030, 0xFF10),
    (0x0031, 0xFF11), (0x0032, 0xFF12), (0x0033, 0xFF13), (0x0034, 0xFF14),
    (0x0035, 0xFF15), (0x0036, 0xFF16), (0x0037, 0xFF17), (0x0038, 0xFF18),
    (0x0039, 0xFF19), (0x003A, 0xFF1A), (0x003B, 0xFF1B), (0x003C, 0xFF1C),
    (0x003D, 0xFF1D), (0x003E, 0xFF1E), (0x003F, 0xFF1F), (0x0040, 0xFF20),
    (0x0041, 0xFF21), (0x0042, 0xFF22), (0x0043, 0xFF23), (0x0044, 0xFF24),
    (0x0045, 0xFF25), (0x0046, 0xFF26), (0x0047, 0xFF27), (0x0048, 0xFF28),
    (0x0049, 0xFF29), (0x004A, 0xFF2A), (0x004B, 0xFF2B), (0x004C, 0xFF2C),
    (0x004D, 0xFF2D), (0x004E, 0xFF2E), (0x004F, 0xFF2F), (0x0050, 0xFF30),
    (0x0051, 0xFF31), (0x0052, 0xFF32), (0x0053, 0xFF33), (0x0054, 0xFF34),
    (0x0055, 0xFF35), (0x0056, 0xFF36), (0x0057, 0xFF37), (0x0058, 0xFF38),
    (0x0059, 0xFF39), (0x005A, 0xFF3A), (0x005B, 0xFF3B), (0x005C, 0xFF3C),
    (0x005D, 0xFF3D), (0x005E, 0xFF3E), (0x005F, 0xFF3F), (0x0060, 0xFF40),
    (0x0061, 0xFF41), (0x0062, 0xFF42), (0x0063, 0xFF43), (0x0064, 0xFF44),
    (0x0065, 0xFF45), (0x0066, 0xFF46), (0x0067, 0xFF47), (0x0068, 0xFF48),
    (0x0069, 0xFF49), (0x006A, 0xFF4A), (0x006B, 0xFF4B), (0x006C, 0xFF4C),
    (0x006D, 0xFF4D), (0x006E, 0xFF4E), (0x006F, 0xFF4F), (0x0070, 0xFF50),
    (0x0071, 0xFF51), (0x0072, 0xFF52), (0x0073, 0xFF53), (0x0074, 0xFF54),
    (0x0075, 0xFF55), (0x0076, 0xFF56), (0x0077, 0xFF57), (0x0078, 0xFF58),
    (0x0079, 0xFF59), (0x007A, 0xFF5A), (0x007B, 0xFF5B), (0x007C, 0xFF5C),
    (0x007D, 0xFF5D), (0x007E, 0xFF5E), (0x00A2, 0xFFE0), (0x00A3, 0xFFE1),
    (0x00A5, 0xFFE5), (0x00A6, 0xFFE4), (0x00AC, 0xFFE2), (0x00AF, 0xFFE3),
    (0x20A9, 0xFFE6), (0x2985, 0xFF5F), (0x2986, 0xFF60), (0x3001, 0xFF64),
    (0x3002, 0xFF61), (0x300C, 0xFF62), (0x300D, 0xFF63), (0xFF65, 0x30FB),
    (0xFF66, 0x30F2), (0xFF67, 0x30A1), (0xFF68, 0x30A3), (0xFF69, 0x30A5),
    (0xFF6A, 0x30A7), (0xFF6B, 0x30A9), (0xFF6C, 0x30E3), (0xFF6D, 0x30E5),
    (0xFF6E, 0x30E7), (0xFF6F, 0x30C3), (0xFF70, 0x30FC), (0xFF71, 0x30A2),
    (0xFF72, 0x30A4), (0xFF73, 0x30A6), (0xFF74, 0x30A8), (0xFF75, 0x30AA),
    (0xFF76, 0x30AB), (0xFF77, 0x30AD), (0xFF78, 0x30AF), (0xFF79, 0x30B1),
    (0xFF7A, 0x30B3), (0xFF7B, 0x30B5), (0xFF7C, 0x30B7), (0xFF7D, 0x30B9),
    (0xFF7E, 0x30BB), (0xFF7F, 0x30BD), (0xFF80, 0x30BF), (0xFF81, 0x30C1),
    (0xFF82, 0x30C4), (0xFF83, 0x30C6), (0xFF84, 0x30C8), (0xFF85, 0x30CA),
    (0xFF86, 0x30CB), (0xFF87, 0x30CC), (0xFF88, 0x30CD), (0xFF89, 0x30CE),
    (0xFF8A, 0x30CF), (0xFF8B, 0x30D2), (0xFF8C, 0x30D5), (0xFF8D, 0x30D8),
    (0xFF8E, 0x30DB), (0xFF8F, 0x30DE), (0xFF90, 0x30DF), (0xFF91, 0x30E0),
    (0xFF92, 0x30E1), (0xFF93, 0x30E2), (0xFF94, 0x30E4), (0xFF95, 0x30E6),
    (0xFF96, 0x30E8), (0xFF97, 0x30E9), (0xFF98, 0x30EA), (0xFF99, 0x30EB),
    (0xFF9A, 0x30EC), (0xFF9B, 0x30ED), (0xFF9C, 0x30EF), (0xFF9D, 0x30F3),
    (0xFF9E, 0x3099), (0xFF9F, 0x309A), (0xFFE8, 0x2502), (0xFFE9, 0x2190),
    (0xFFEA, 0x2191), (0xFFEB, 0x2192), (0xFFEC, 0x2193), (0xFFED, 0x25A0),
    (0xFFEE, 0x25CB),
];

/// Full-width (or wide) form to half-width (or narrow) form
#[rustfmt::skip]
pub(super) static FULL_TO_HALF: [(u32, u32); 173] = [
    (0x2190, 0xFFE9), (0x2191, 0xFFEA), (0x2192, 0xFFEB), (0x2193, 0xFFEC),
    (0x2502, 0xFFE8), (0x25A0, 0xFFED), (0x25CB, 0xFFEE), (0x3099, 0xFF9E),
    (0x309A, 0xFF9F), (0x30A1, 0xFF67), (0x30A2, 0xFF71), (0x30A3, 0xFF68),
    (0x30A4, 0xFF72), (0x30A5, 0xFF69), (0x30A6, 0xFF73), (0x30A7, 0xFF6A),
    (0x30A8, 0xFF74), (0x30A9, 0xFF6B), (0x30AA, 0xFF75), (0x30AB, 0xFF76),
    (0x30AD, 0xFF77), (0x30AF, 0xFF78), (0x30B1, 0xFF79), (0x30B3, 0xFF7A),
    (0x30B5, 0xFF7B), (0x30B7, 0xFF7C), (0x30B9, 0xFF7D), (0x30BB, 0xFF7E),
    (0x30BD, 0xFF7F), (0x30BF, 0xFF80), (0x30C1, 0xFF81), (0x30C3, 0xFF6F),
    (0x30C4, 0xFF82), (0x30C6, 0xFF83), (0x30C8, 0xFF84), (0x30CA, 0xFF85),
    (0x30CB, 0xFF86), (0x30CC, 0xFF87), (0x30CD, 0xFF88), (0x30CE, 0xFF89),
    (0x30CF, 0xFF8A), (0x30D2, 0xFF8B), (0x30D5, 0xFF8C), (0x30D8, 0xFF8D),
    (0x30DB, 0xFF8E), (0x30DE, 0xFF8F), (0x30DF, 0xFF90), (0x30E0, 0xFF91),
    (0x30E1, 0xFF92), (0x30E2, 0xFF93), (0x30E3, 0xFF6C), (0x30E4, 0xFF94),
    (0x30E5, 0xFF6D), (0x30E6, 0xFF95), (0x30E7, 0xFF6E), (0x30E8, 0xFF96),
    (0x30E9, 0xFF97), (0x30EA, 0xFF98), (0x30EB, 0xFF99), (0x30EC, 0xFF9A),
    (0x30ED, 0xFF9B), (0x30EF, 0xFF9C), (0x30F2, 0xFF66), (0x30F3, 0xFF9D),
    (0x30FB, 0xFF65), (0x30FC, 0xFF70), (0xFF01, 0x0021), (0xFF02, 0x0022),
    (0xFF03, 0x0023), (0xFF04, 0x0024), (0xFF05, 0x0025), (0xFF06, 0x0026),
    (0xFF07, 0x0027), (0xFF08, 0x0028), (0xFF09, 0x0029), (0xFF0A, 0x002A),
    (0xFF0B, 0x002B), (0xFF0C, 0x002C), (0xFF0D, 0x002D), (0xFF0E, 0x002E),
    (0xFF0F, 0x002F), (0xFF10, 0x0030), (0xFF11, 0x0031), (0xFF12, 0x0032),
    (0xFF13, 0x0033), (0xFF14, 0x0034), (0xFF15, 0x0035), (0xFF16, 0x0036),
    (0xFF17, 0x0037), (0xFF18, 0x0038), (0xFF19, 0x0039), (0xFF1A, 0x003A),
    (0xFF1B, 0x003B), (0xFF1C, 0x003C), (0xFF1D, 0x003D), (0xFF1E, 0x003E),
    (0xFF1F, 0x003F), (0xFF20, 0x0040), (0xFF21, 0x0041), (0xFF22, 0x0042),
    (0xFF23, 0x0043), (0xFF24, 0x0044), (0xFF25, 0x0045), (0xFF26, 0x0046),
    (0xFF27, 0x0047), (0xFF28, 0x0048), (0xFF29, 0x0049), (0xFF2A, 0x004A),
    (0xFF2B, 0x004B), (0xFF2C, 0x004C), (0xFF2D, 0x004D), (0xFF2E, 0x004E),
    (0xFF2F, 0x004F), (0xFF30, 0x0050), (0xFF31, 0x0051), (0xFF32, 0x0052),
    (0xFF33, 0x0053), (0xFF34, 0x0054), (0xFF35, 0x0055), (0xFF36, 0x0056),
    (0xFF37, 0x0057), (0xFF38, 0x0058), (0xFF39, 0x0059), (0xFF3A, 0x005A),
    (0xFF3B, 0x005B), (0xFF3C, 0x005C), (0xFF3D, 0x005D), (0xFF3E, 0x005E),
    (0xFF3F, 0x005F), (0xFF40, 0x0060), (0xFF41, 0x0061), (0xFF42, 0x0062),
    (0xFF43, 0x0063), (0xFF44, 0x0064), (0xFF45, 0x0065), (0xFF46, 0x0066),
    (0xFF47, 0x0067), (0xFF48, 0x0068), (0xFF49, 0x0069), (0xFF4A, 0x006A),
    (0xFF4B, 0x006B), (0xFF4C, 0x006C), (0xFF4D, 0x006D), (0xFF4E, 0x006E),
    (0xFF4F, 0x006F), (0xFF50, 0x0070), (0xFF51, 0x0071), (0xFF52, 0x0072),
    (0xFF53, 0x0073), (0xFF54, 0x0074), (0xFF55, 0x0075), (0xFF56, 0x0076),
    (0xFF57, 0x0077), (0xFF58, 0x0078), (0xFF59, 0x0079), (0xFF5A, 0x007A),
    (0xFF5B, 0x007B), (0xFF5C, 0x007C), (0xFF5D, 0x007D), (0xFF5E, 0x007E),
    (0xFF5F, 0x2985), (0xFF60, 0x2986), (0xFF61, 0x3002), (0xFF62, 0x300C),
    (0xFF63, 0x300D), (0xFF64, 0x3001), (0xFFE0, 0x00A2), (0xFFE1, 0x00A3),
    (0xFFE2, 0x00AC), (0xFFE3, 0x00AF), (0xFFE4, 0x00A6), (0xFFE5, 0x00A5),
    (0xFFE6, 0x20A9),
];
