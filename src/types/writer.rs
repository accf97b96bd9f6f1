use pdf_writer::{ Content, Rect, Ref, Str };

use crate::{
    traits::FontType,
    types::{
        encoding,
        FontFace,
        FontReference,
        LinkAnnotation,
        Page,
        Rgb,
}};

/// the rendering engine
/// contains
/// - page references
/// - ref allocator
/// - fonts in order of first use
/// - page geometry and the write head position
pub struct Writer {
    pub x: f32,
    pub y: f32,
    pub alloc: Ref,
    pub page_tree_id: Ref,
    pub font_refs: Vec<FontReference>,
    pub pages: Vec<Page>,
    pub page_height: f32,
    pub page_width: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    /// nothing has been placed on the current page yet
    pub at_top: bool,
}

impl Writer {
    /// allocates the page tree and the first page, with the write head at the top-left of the frame
    pub fn new(page_width: f32, page_height: f32, margins: [f32; 4]) -> Self {
        let [left_margin, right_margin, top_margin, bottom_margin] = margins;
        let mut alloc = Ref::new(1);
        let page_tree_id = alloc.bump();
        let first_page = Page::new(alloc.bump(), alloc.bump());

        Writer {
            x: left_margin,
            y: page_height - top_margin,
            alloc,
            page_tree_id,
            font_refs: Vec::with_capacity(4),
            pages: Vec::from([first_page]),
            page_height,
            page_width,
            left_margin,
            right_margin,
            top_margin,
            bottom_margin,
            at_top: true,
        }
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// scrolls the writer down the page
    pub fn feed(&mut self, num: f32) {
        self.y -= num;
    }

    /// moves the writer to a new position
    pub fn go_to(&mut self, num_x: f32, num_y: f32) {
        self.x = num_x;
        self.y = num_y;
    }

    pub fn frame_top(&self) -> f32 {
        self.page_height - self.top_margin
    }

    pub fn frame_width(&self) -> f32 {
        self.page_width - self.left_margin - self.right_margin
    }

    /// true when `height` more points fit above the bottom margin
    pub fn fits(&self, height: f32) -> bool {
        self.y - height >= self.bottom_margin - 0.001
    }

    /// number of the page being written, starting at 1
    pub fn page_number(&self) -> usize {
        self.pages.len()
    }

    /// appends a fresh page and moves the write head to the top of its frame
    pub fn add_page(&mut self) {
        let page = Page::new(self.bump(), self.bump());
        self.pages.push(page);
        self.go_to(self.left_margin, self.frame_top());
        self.at_top = true;
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.last_mut()
    }

    fn content(&mut self) -> Option<&mut Content> {
        self.pages.last_mut().map(|page| &mut page.content)
    }

    /// returns the resource name for `face`, adding the font to the document on first use
    pub fn font_name(&mut self, face: &FontFace) -> String {
        if let Some(existing) = self.font_refs.iter().find(|font| font.label == face.base_font()) {
            return existing.name.clone();
        }

        let font = FontReference {
            id: self.bump(),
            label: face.base_font().to_string(),
            name: format!("F{}", self.font_refs.len() + 1),
            face: face.clone(),
        };
        let name = font.name.clone();
        self.font_refs.push(font);

        name
    }

    /// draws one line of already encoded text with its baseline starting at (`x`, `baseline`)
    pub fn show_text(&mut self, face: &FontFace, font_size: f32, color: Rgb, x: f32, baseline: f32, text: &[u8]) {
        if text.is_empty() {
            return;
        }

        // a page must exist by now
        debug_assert!(!self.pages.is_empty());

        let name = self.font_name(face);

        if let Some(target) = self.content() {
            target.set_fill_rgb(color.0, color.1, color.2);
            target.begin_text();
            target.set_font(pdf_writer::Name(name.as_bytes()), font_size);
            target.next_line(x, baseline);
            target.show(Str(text));
            target.end_text();
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        if let Some(target) = self.content() {
            target.set_fill_rgb(color.0, color.1, color.2);
            target.rect(x, y, width, height);
            target.fill_nonzero();
        }
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, line_width: f32, color: Rgb) {
        if let Some(target) = self.content() {
            target.set_stroke_rgb(color.0, color.1, color.2);
            target.set_line_width(line_width);
            target.rect(x, y, width, height);
            target.stroke();
        }
    }

    /// registers a link over `rect` on the current page
    pub fn link(&mut self, rect: Rect, url: &str) {
        if let Some(page) = self.current_page_mut() {
            page.links.push(LinkAnnotation { rect, url: url.to_string() });
        }
    }

    pub fn save_state(&mut self) {
        if let Some(target) = self.content() {
            target.save_state();
        }
    }

    pub fn restore_state(&mut self) {
        if let Some(target) = self.content() {
            target.restore_state();
        }
    }
}

/// The drawing surface handed to page decorators: the current page's content stream plus
/// the document's font table. Graphics state saved through the canvas and not restored is
/// unwound when the canvas is dropped.
pub struct PageCanvas<'a> {
    writer: &'a mut Writer,
    depth: usize,
    font: Option<(FontFace, f32)>,
}

impl<'a> PageCanvas<'a> {
    pub fn new(writer: &'a mut Writer) -> Self {
        PageCanvas {
            writer,
            depth: 0,
            font: None,
        }
    }

    pub fn page_width(&self) -> f32 {
        self.writer.page_width
    }

    pub fn save_state(&mut self) {
        self.writer.save_state();
        self.depth += 1;
    }

    pub fn restore_state(&mut self) {
        debug_assert!(self.depth > 0, "restore_state without save_state");

        if self.depth > 0 {
            self.writer.restore_state();
            self.depth -= 1;
        }
    }

    pub fn set_font(&mut self, face: &FontFace, font_size: f32) {
        self.font = Some((face.clone(), font_size));
    }

    /// draws `text` centred horizontally on `x` with its baseline at `y`
    pub fn draw_centred_string(&mut self, x: f32, y: f32, text: &str) {
        let (face, font_size) = match &self.font {
            Some((face, size)) => (face.clone(), *size),
            None => (FontFace::Standard(crate::types::StandardFont::Helvetica), 12.0),
        };

        let bytes = encoding::encode(text);
        let width = face.text_width(&bytes, font_size);
        self.writer.show_text(&face, font_size, Rgb::BLACK, x - width / 2.0, y, &bytes);
    }
}

impl Drop for PageCanvas<'_> {
    fn drop(&mut self) {
        while self.depth > 0 {
            self.writer.restore_state();
            self.depth -= 1;
        }
    }
}
