use crate::{ traits::FontType, types::TextAlignment };

/// block level container the layout engine pushes `Line` objects into
/// ```ignore
/// let text_block = TextBlock::new()
///     .with_font_size(font_size) // f32
///     .and_alignment(alignment)  // TextAlignment
///     .and_indent(indent);       // f32
/// ```
#[derive(Debug)]
pub struct TextBlock {
    pub alignment: TextAlignment,
    pub lines: Vec<Line>,
    pub font_size: f32,
    // which `Line` `push_word` currently appends to
    pub index: usize,
    pub indent: f32
}

impl TextBlock {
    /// default settings:
    /// - Font size: 12.0
    /// - Text alignment: Left
    /// - Indentation: 0.0
    pub fn new() -> Self {
        TextBlock::default()
    }

    /// builder function setting font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// builder function setting block alignment
    pub fn and_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// builder function setting block indentation
    pub fn and_indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    /// creates a new, empty, `Line` and makes it current
    pub fn next(&mut self) {
        self.lines.push(Line::default());
        self.index = self.lines.len() - 1;
    }

    fn current(&mut self) -> &mut Line {
        &mut self.lines[self.index]
    }

    /// Greedy word wrap of WinAnsi `text` into lines no wider than `writeable_area`.
    /// Words wider than a whole line are split between bytes.
    pub fn wrap<F: FontType>(mut self, text: &[u8], font: &F, writeable_area: f32) -> Self {
        let font_size = self.font_size;
        let space_width = font.char_width(b' ', font_size);

        for word in text.split(|byte| *byte == b' ').filter(|word| !word.is_empty()) {
            let width = font.text_width(word, font_size);

            if width > writeable_area {
                for piece in split_to_fit(word, font, font_size, writeable_area) {
                    let piece_width = font.text_width(&piece, font_size);
                    self.push_word(piece, piece_width, space_width, writeable_area);
                }
            } else {
                self.push_word(word.to_vec(), width, space_width, writeable_area);
            }
        }

        for line in &mut self.lines {
            line.offset = self.alignment.offset(line.width, writeable_area);
        }

        self
    }

    fn push_word(&mut self, text: Vec<u8>, width: f32, space_width: f32, writeable_area: f32) {
        let line = self.current();
        let offset = if line.body.is_empty() { 0.0 } else { space_width };

        if !line.body.is_empty() && line.width + offset + width > writeable_area {
            self.next();
            let line = self.current();
            line.width = width;
            line.body.push(Word { text, width, offset: 0.0 });
            return;
        }

        line.width += offset + width;
        line.body.push(Word { text, width, offset });
    }
}

/// chops an overlong word into pieces that each fit `writeable_area`, one byte minimum
fn split_to_fit<F: FontType>(word: &[u8], font: &F, font_size: f32, writeable_area: f32) -> Vec<Vec<u8>> {
    let mut pieces = Vec::new();
    let mut piece = Vec::new();
    let mut width = 0.0;

    for byte in word {
        let char_width = font.char_width(*byte, font_size);

        if !piece.is_empty() && width + char_width > writeable_area {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }

        piece.push(*byte);
        width += char_width;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
}

/// Wrapper for `Word` objects that fit the frame width
#[derive(Debug,Default)]
pub struct Line {
    pub body: Vec<Word>,
    pub width: f32,
    pub offset: f32,
}

impl Line {
    /// the words joined by single spaces, ready for a `Tj`
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.body.iter().map(|word| word.text.len() + 1).sum());

        for (index, word) in self.body.iter().enumerate() {
            if index > 0 {
                out.push(b' ');
            }
            out.extend_from_slice(&word.text);
        }

        out
    }
}

/// encoded word with its width and the space width in front of it
#[derive(Debug)]
pub struct Word {
    pub offset: f32,
    pub text: Vec<u8>,
    pub width: f32,
}

impl Default for TextBlock {
    /// default settings:
    /// - Font size: 12.0
    /// - Text alignment: Left
    /// - Indentation: 0.0
    fn default() -> Self {
        TextBlock {
            alignment: TextAlignment::Left,
            font_size: 12.0,
            lines: Vec::from([Line::default()]),
            index: 0,
            indent: 0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StandardFont;

    #[test]
    fn short_text_stays_on_one_line() {
        let block = TextBlock::new().with_font_size(10.0).wrap(b"sort(v.begin(), v.end());", &StandardFont::Courier, 500.0);

        assert_eq!(block.lines.len(), 1);
        assert_eq!(block.lines[0].bytes(), b"sort(v.begin(), v.end());".to_vec());
    }

    #[test]
    fn wraps_at_word_boundaries() {
        // courier 10pt: 6pt per byte, so 60pt holds ten bytes
        let block = TextBlock::new().with_font_size(10.0).wrap(b"aaaa bbbb cccc", &StandardFont::Courier, 60.0);
        let lines: Vec<Vec<u8>> = block.lines.iter().map(Line::bytes).collect();

        assert_eq!(lines, vec![b"aaaa bbbb".to_vec(), b"cccc".to_vec()]);
    }

    #[test]
    fn overlong_words_are_split() {
        let block = TextBlock::new().with_font_size(10.0).wrap(b"abcdefghijkl", &StandardFont::Courier, 30.0);
        let lines: Vec<Vec<u8>> = block.lines.iter().map(Line::bytes).collect();

        assert_eq!(lines, vec![b"abcde".to_vec(), b"fghij".to_vec(), b"kl".to_vec()]);
    }

    #[test]
    fn repeated_spaces_collapse() {
        let block = TextBlock::new().with_font_size(10.0).wrap(b"a   b", &StandardFont::Courier, 100.0);
        assert_eq!(block.lines[0].bytes(), b"a b".to_vec());
        assert_eq!(block.lines[0].width, 18.0);
    }

    #[test]
    fn centered_lines_get_an_offset() {
        let block = TextBlock::new()
            .with_font_size(10.0)
            .and_alignment(TextAlignment::Center)
            .wrap(b"ab", &StandardFont::Courier, 100.0);

        assert_eq!(block.lines[0].offset, 44.0);
    }
}
