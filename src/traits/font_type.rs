/// Metrics every font in a document has to provide. Widths are looked up per WinAnsi byte
/// in glyph space (1/1000 em), then scaled to the requested font size.
pub trait FontType {
    /// name written as `/BaseFont` and used in log output
    fn base_font(&self) -> &str;

    /// advance width of `byte` in 1/1000 em
    fn advance(&self, byte: u8) -> u16;

    fn standardize(width: f32, font_size: f32) -> f32 {
        width * font_size / 1000.0
    }

    fn char_width(&self, byte: u8, font_size: f32) -> f32 {
        Self::standardize(self.advance(byte) as f32, font_size)
    }

    fn text_width(&self, bytes: &[u8], font_size: f32) -> f32 {
        let total: u32 = bytes.iter().map(|byte| self.advance(*byte) as u32).sum();
        Self::standardize(total as f32, font_size)
    }
}
