//! WinAnsi (Windows-1252) text encoding for simple PDF fonts.

/// unicode scalar for every byte in 0x80..=0x9F, `None` where cp1252 leaves a hole
const HIGH_CONTROL: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

/// readable stand-ins for symbols WinAnsi cannot express
const TRANSLITERATIONS: [(char, &str); 4] = [
    ('\u{2265}', ">="),
    ('\u{2264}', "<="),
    ('\u{2192}', "->"),
    ('\u{2260}', "!="),
];

/// maps a single character to its WinAnsi byte, if there is one
pub fn encode_char(ch: char) -> Option<u8> {
    let code = ch as u32;

    match code {
        0x20..=0x7E => Some(code as u8),
        0xA0..=0xFF => Some(code as u8),
        _ => HIGH_CONTROL
            .iter()
            .position(|slot| *slot == Some(ch))
            .map(|index| 0x80 + index as u8)
    }
}

/// decodes a WinAnsi byte back to unicode, used to look glyphs up in TrueType cmaps
pub fn decode_byte(byte: u8) -> Option<char> {
    match byte {
        0x20..=0x7E | 0xA0..=0xFF => Some(byte as char),
        0x80..=0x9F => HIGH_CONTROL[(byte - 0x80) as usize],
        _ => None
    }
}

/// encodes `text` to WinAnsi bytes; control characters become spaces, anything
/// without a byte or a transliteration becomes `?`
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_control() {
            out.push(b' ');
            continue;
        }

        if let Some(byte) = encode_char(ch) {
            out.push(byte);
        } else if let Some((_, ascii)) = TRANSLITERATIONS.iter().find(|(from, _)| *from == ch) {
            out.extend_from_slice(ascii.as_bytes());
        } else {
            out.push(b'?');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode("sort(v.begin());"), b"sort(v.begin());".to_vec());
    }

    #[test]
    fn dashes_and_bullets_use_high_bytes() {
        assert_eq!(encode("\u{2022} a \u{2014} b"), vec![0x95, b' ', b'a', b' ', 0x97, b' ', b'b']);
    }

    #[test]
    fn greater_equal_is_transliterated() {
        assert_eq!(encode("first \u{2265} key"), b"first >= key".to_vec());
    }

    #[test]
    fn unknown_symbols_become_question_marks() {
        assert_eq!(encode("\u{4E2D}"), b"?".to_vec());
    }

    #[test]
    fn decode_inverts_encode_for_mapped_bytes() {
        for byte in 0x20u8..=0xFF {
            if let Some(ch) = decode_byte(byte) {
                assert_eq!(encode_char(ch), Some(byte));
            }
        }
        assert_eq!(decode_byte(0x81), None);
    }
}
