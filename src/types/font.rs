use std::sync::Arc;

use crate::{ traits::FontType, types::encoding };

/// Helvetica advance widths for ASCII 32..=126
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;

/// Base-14 fonts every PDF reader ships with; these are never embedded
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl FontType for StandardFont {
    fn base_font(&self) -> &str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
        }
    }

    fn advance(&self, byte: u8) -> u16 {
        let table = match self {
            StandardFont::Courier => return COURIER_WIDTH,
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold => &HELVETICA_BOLD,
        };

        match byte {
            0x20..=0x7E => table[(byte - 0x20) as usize],
            0x95 => 350,          // bullet
            0x96 => 556,          // en dash
            0x97 => 1000,         // em dash
            _ => 556
        }
    }
}

/// A TrueType program loaded from disk, with the metrics a simple WinAnsi font dictionary needs
#[derive(Debug)]
pub struct TrueTypeFont {
    pub name: String,
    pub data: Vec<u8>,
    /// advance widths for codes `FIRST_CHAR..=LAST_CHAR`
    pub widths: Vec<u16>,
    pub ascent: f32,
    pub descent: f32,
    pub cap_height: f32,
    pub italic_angle: f32,
    pub bbox: [f32; 4],
    pub fixed_pitch: bool,
    pub bold: bool,
}

impl TrueTypeFont {
    pub const FIRST_CHAR: u8 = 32;
    pub const LAST_CHAR: u8 = 255;

    /// parses `data` and extracts metrics; registered under `name` rather than the font's own name
    pub fn parse(name: &str, data: Vec<u8>) -> Result<Self, ttf_parser::FaceParsingError> {
        let face = ttf_parser::Face::parse(&data, 0)?;
        let scale = 1000.0 / face.units_per_em().max(1) as f32;

        let mut widths = Vec::with_capacity((Self::LAST_CHAR - Self::FIRST_CHAR) as usize + 1);
        for code in Self::FIRST_CHAR..=Self::LAST_CHAR {
            let width = encoding::decode_byte(code)
                .and_then(|ch| face.glyph_index(ch))
                .and_then(|id| face.glyph_hor_advance(id))
                .unwrap_or(0);
            widths.push((width as f32 * scale).round().clamp(0.0, u16::MAX as f32) as u16);
        }

        let ascent = face.ascender() as f32 * scale;
        let descent = face.descender() as f32 * scale;
        let cap_height = face.capital_height().map(|value| value as f32 * scale).unwrap_or(ascent);
        let italic_angle = face.italic_angle().unwrap_or(0.0);
        let fixed_pitch = face.is_monospaced();
        let bold = face.is_bold();
        let bbox = face.global_bounding_box();
        let bbox = [
            bbox.x_min as f32 * scale,
            bbox.y_min as f32 * scale,
            bbox.x_max as f32 * scale,
            bbox.y_max as f32 * scale,
        ];

        Ok(TrueTypeFont {
            name: name.to_string(),
            data,
            widths,
            ascent,
            descent,
            cap_height,
            italic_angle,
            bbox,
            fixed_pitch,
            bold,
        })
    }
}

impl FontType for TrueTypeFont {
    fn base_font(&self) -> &str {
        &self.name
    }

    fn advance(&self, byte: u8) -> u16 {
        if byte < Self::FIRST_CHAR {
            return 0;
        }
        self.widths.get((byte - Self::FIRST_CHAR) as usize).copied().unwrap_or(0)
    }
}

/// The font a style resolves to: a base-14 fallback or a registered TrueType font
#[derive(Debug,Clone)]
pub enum FontFace {
    Standard(StandardFont),
    TrueType(Arc<TrueTypeFont>),
}

impl FontType for FontFace {
    fn base_font(&self) -> &str {
        match self {
            FontFace::Standard(font) => font.base_font(),
            FontFace::TrueType(font) => font.base_font(),
        }
    }

    fn advance(&self, byte: u8) -> u16 {
        match self {
            FontFace::Standard(font) => font.advance(byte),
            FontFace::TrueType(font) => font.advance(byte),
        }
    }
}

impl From<StandardFont> for FontFace {
    fn from(font: StandardFont) -> Self {
        FontFace::Standard(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_monospaced() {
        let courier = StandardFont::Courier;
        assert_eq!(courier.text_width(b"iiii", 10.0), courier.text_width(b"WWWW", 10.0));
        assert_eq!(courier.text_width(b"ab", 10.0), 12.0);
    }

    #[test]
    fn helvetica_widths_scale_with_size() {
        let helvetica = StandardFont::Helvetica;
        assert_eq!(helvetica.char_width(b'A', 1000.0), 667.0);
        assert_eq!(helvetica.char_width(b' ', 9.0), 278.0 * 9.0 / 1000.0);
    }

    #[test]
    fn bold_is_wider_for_lowercase() {
        let text = b"lower_bound";
        assert!(StandardFont::HelveticaBold.text_width(text, 12.0) > StandardFont::Helvetica.text_width(text, 12.0));
    }

    #[test]
    fn garbage_is_not_a_truetype_font() {
        let result = TrueTypeFont::parse("Broken", b"not a font".to_vec());
        assert!(result.is_err());
    }

    #[test]
    fn truetype_widths_come_from_hmtx() {
        let data = include_bytes!("../../tests/fixtures/demo.ttf").to_vec();
        let font = TrueTypeFont::parse("Demo", data).unwrap();

        assert_eq!(font.base_font(), "Demo");
        assert_eq!(font.advance(b'A'), 540);
        assert_eq!(font.advance(b'B'), 0);
        assert_eq!(font.widths.len(), 224);
    }

    #[test]
    fn face_delegates_to_standard_font() {
        let face = FontFace::from(StandardFont::HelveticaBold);
        assert_eq!(face.base_font(), "Helvetica-Bold");
        assert_eq!(face.advance(b'A'), 722);
    }
}
