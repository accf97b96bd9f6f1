use std::io::Write;

use flate2::{ write::ZlibEncoder, Compression };
use pdf_writer::{
    types::{ ActionType, AnnotationType, FontFlags },
    Filter, Finish, Name, Pdf, Rect, Str, TextStr,
};

use crate::{
    traits::FontType,
    types::{
        encoding,
        DocumentElement,
        FontFace,
        PageCanvas,
        Paragraph,
        Result,
        StyleSet,
        Table,
        TextBlock,
        Writer,
}};

/// points per centimetre
pub const CM: f32 = 28.346457;
/// A4 width and height in points
pub const A4: (f32, f32) = (595.2756, 841.8898);

/// called once per finished page with the 1-based page number
pub type PageDecorator<'a> = &'a dyn Fn(&mut PageCanvas<'_>, usize);

/// # Page geometry and document metadata for one build
///
/// `build` flows a sequence of `DocumentElement`s through a single frame per page and
/// serializes the result. Output never contains timestamps or random ids, so the same
/// story, styles and fonts always produce the same bytes.
#[derive(Debug,Clone)]
pub struct DocTemplate {
    pub page_width: f32,
    pub page_height: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub title: String,
    pub author: String,
    /// flate-compress content and font streams
    pub compress: bool,
}

impl DocTemplate {
    /// A4 with 1.4cm margins on every side
    pub fn a4(title: &str) -> Self {
        DocTemplate {
            page_width: A4.0,
            page_height: A4.1,
            left_margin: 1.4 * CM,
            right_margin: 1.4 * CM,
            top_margin: 1.4 * CM,
            bottom_margin: 1.4 * CM,
            title: title.to_string(),
            author: String::new(),
            compress: true,
        }
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Entry point: lays `story` out page by page, calling `on_first_page` for page 1 and
    /// `on_later_pages` for every other page once each page is complete, then returns the PDF.
    pub fn build(
        &self,
        story: &[DocumentElement],
        styles: &StyleSet,
        on_first_page: PageDecorator<'_>,
        on_later_pages: PageDecorator<'_>,
    ) -> Result<Vec<u8>> {
        let writer = Writer::new(
            self.page_width,
            self.page_height,
            [self.left_margin, self.right_margin, self.top_margin, self.bottom_margin],
        );

        let mut layout = Layout {
            writer,
            styles,
            on_first_page,
            on_later_pages,
            break_pending: false,
        };

        for element in story {
            match element {
                DocumentElement::Paragraph(paragraph) => layout.render_paragraph(paragraph),
                DocumentElement::Spacer { height } => layout.render_spacer(*height),
                DocumentElement::Table(table) => layout.render_table(table),
                DocumentElement::PageBreak => layout.break_pending = true,
            }
        }

        let writer = layout.finish();

        log::info!("laid out {} elements on {} pages", story.len(), writer.pages.len());

        self.serialize(writer)
    }

    fn serialize(&self, mut writer: Writer) -> Result<Vec<u8>> {
        let mut pdf = Pdf::new();
        let page_tree_id = writer.page_tree_id;
        let font_refs = std::mem::take(&mut writer.font_refs);
        let pages = std::mem::take(&mut writer.pages);

        for font in font_refs.iter() {
            match &font.face {
                FontFace::Standard(_) => {
                    pdf.type1_font(font.id)
                        .base_font(Name(font.label.as_bytes()))
                        .encoding_predefined(Name(b"WinAnsiEncoding"));
                },
                FontFace::TrueType(true_type) => {
                    let descriptor_id = writer.bump();
                    let file_id = writer.bump();

                    {
                        let mut dict = pdf.indirect(font.id).dict();
                        dict.pair(Name(b"Type"), Name(b"Font"));
                        dict.pair(Name(b"Subtype"), Name(b"TrueType"));
                        dict.pair(Name(b"BaseFont"), Name(font.label.as_bytes()));
                        dict.pair(Name(b"FirstChar"), crate::types::TrueTypeFont::FIRST_CHAR as i32);
                        dict.pair(Name(b"LastChar"), crate::types::TrueTypeFont::LAST_CHAR as i32);
                        dict.insert(Name(b"Widths")).array().items(true_type.widths.iter().map(|width| *width as i32));
                        dict.pair(Name(b"FontDescriptor"), descriptor_id);
                        dict.pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
                        dict.finish();
                    }

                    let mut flags = FontFlags::NON_SYMBOLIC;
                    if true_type.fixed_pitch {
                        flags |= FontFlags::FIXED_PITCH;
                    }
                    if true_type.bold {
                        flags |= FontFlags::FORCE_BOLD;
                    }

                    let [x_min, y_min, x_max, y_max] = true_type.bbox;
                    pdf.font_descriptor(descriptor_id)
                        .name(Name(font.label.as_bytes()))
                        .flags(flags)
                        .bbox(Rect::new(x_min, y_min, x_max, y_max))
                        .italic_angle(true_type.italic_angle)
                        .ascent(true_type.ascent)
                        .descent(true_type.descent)
                        .cap_height(true_type.cap_height)
                        .stem_v(if true_type.bold { 120.0 } else { 80.0 })
                        .font_file2(file_id);

                    let data = self.encode_stream(&true_type.data)?;
                    let mut stream = pdf.stream(file_id, &data);
                    stream.pair(Name(b"Length1"), true_type.data.len() as i32);
                    if self.compress {
                        stream.filter(Filter::FlateDecode);
                    }
                    stream.finish();
                }
            }
        }

        let mut page_ids = Vec::with_capacity(pages.len());

        for page in pages {
            let annotation_ids: Vec<_> = page.links.iter().map(|_| writer.bump()).collect();

            let data = self.encode_stream(&page.content.finish())?;
            {
                let mut stream = pdf.stream(page.content_id, &data);
                if self.compress {
                    stream.filter(Filter::FlateDecode);
                }
            }

            {
                let mut pdf_page = pdf.page(page.page_id);
                pdf_page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height));
                pdf_page.parent(page_tree_id);
                pdf_page.contents(page.content_id);

                if !annotation_ids.is_empty() {
                    pdf_page.annotations(annotation_ids.iter().copied());
                }

                let mut resources = pdf_page.resources();
                let mut fonts = resources.fonts();
                for font in font_refs.iter() {
                    fonts.pair(font.resource_name(), font.id);
                }
            }

            for (link, id) in page.links.iter().zip(annotation_ids) {
                let mut annotation = pdf.annotation(id);
                annotation.subtype(AnnotationType::Link);
                annotation.rect(link.rect);
                annotation.insert(Name(b"Border")).array().items([0, 0, 0]);
                annotation.action()
                    .action_type(ActionType::Uri)
                    .uri(Str(link.url.as_bytes()));
            }

            page_ids.push(page.page_id);
        }

        // Write the root of the page tree.
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        let info_id = writer.bump();
        {
            let mut info = pdf.document_info(info_id);
            info.title(TextStr(&self.title));
            if !self.author.is_empty() {
                info.author(TextStr(&self.author));
            }
            info.creator(TextStr(env!("CARGO_PKG_NAME")));
        }

        // Write the document catalog.
        pdf.catalog(writer.bump()).pages(page_tree_id);

        Ok(pdf.finish())
    }

    fn encode_stream(&self, data: &[u8]) -> Result<Vec<u8>> {
        if !self.compress {
            return Ok(data.to_vec());
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)?;
        Ok(encoder.finish()?)
    }
}

/// flow state for one `DocTemplate::build`
struct Layout<'a> {
    writer: Writer,
    styles: &'a StyleSet,
    on_first_page: PageDecorator<'a>,
    on_later_pages: PageDecorator<'a>,
    /// a page break was requested; the next page is started lazily so a trailing break
    /// never leaves a blank page behind
    break_pending: bool,
}

impl Layout<'_> {
    /// runs the page decorator for the page being written
    fn decorate(&mut self) {
        let page_number = self.writer.page_number();
        let decorator = if page_number == 1 { self.on_first_page } else { self.on_later_pages };
        let mut canvas = PageCanvas::new(&mut self.writer);

        decorator(&mut canvas, page_number);
    }

    fn new_page(&mut self) {
        self.decorate();
        self.writer.add_page();
        self.break_pending = false;
    }

    /// starts a new page when a break is pending or `height` does not fit below the write head
    fn ensure_room(&mut self, height: f32) {
        // a break on a page with nothing on it yet is already satisfied
        if self.break_pending && self.writer.at_top {
            self.break_pending = false;
        }

        if self.break_pending || (!self.writer.fits(height) && !self.writer.at_top) {
            self.new_page();
        }
    }

    fn render_spacer(&mut self, height: f32) {
        if self.break_pending {
            return;
        }

        if self.writer.fits(height) {
            self.writer.feed(height);
        } else {
            // a spacer that runs off the page ends it and is dropped
            self.new_page();
        }
    }

    /// wraps the paragraph to the frame and writes it line by line, breaking pages as needed
    fn render_paragraph(&mut self, paragraph: &Paragraph) {
        let styles = self.styles;
        let style = styles.get(paragraph.style);

        let text = if paragraph.bullet {
            format!("\u{2022} {}", paragraph.text)
        } else {
            paragraph.text.clone()
        };
        let bytes = encoding::encode(&text);

        let writeable_area = self.writer.frame_width() - style.left_indent - style.right_indent;
        let text_block = TextBlock::new()
            .with_font_size(style.font_size)
            .and_alignment(style.alignment)
            .and_indent(style.left_indent)
            .wrap(&bytes, &style.font, writeable_area);

        self.ensure_room(style.space_before + style.leading);
        if !self.writer.at_top {
            self.writer.feed(style.space_before);
        }

        let left = self.writer.left_margin + text_block.indent;

        for (index, line) in text_block.lines.iter().enumerate() {
            self.ensure_room(style.leading);

            let top = self.writer.y;
            let baseline = top - style.font_size;

            if let Some(back_color) = style.back_color {
                self.writer.fill_rect(left, top - style.leading, writeable_area, style.leading, back_color);
            }

            let x = left + line.offset;
            self.writer.show_text(&style.font, style.font_size, style.text_color, x, baseline, &line.bytes());

            if index == 0 {
                if let Some(link) = &paragraph.link {
                    let anchor = style.font.text_width(&encoding::encode(&link.anchor), style.font_size);
                    let width = anchor.min(line.width);
                    let rect = Rect::new(x, baseline - style.font_size * 0.25, x + width, baseline + style.font_size * 0.85);
                    self.writer.link(rect, &link.url);
                }
            }

            self.writer.feed(style.leading);
            self.writer.at_top = false;
        }

        self.writer.feed(style.space_after);
    }

    /// fixed-width columns, single-line cells, centred in the frame
    fn render_table(&mut self, table: &Table) {
        let styles = self.styles;
        let style = &styles.table;
        let row_height = style.leading + style.padding_top + style.padding_bottom;
        let left = self.writer.left_margin + ((self.writer.frame_width() - table.width()).max(0.0) / 2.0);

        for (row_index, row) in table.rows.iter().enumerate() {
            self.ensure_room(row_height);

            let top = self.writer.y;
            let bottom = top - row_height;
            let background = if row_index == 0 {
                style.header_background
            } else {
                style.row_backgrounds[(row_index - 1) % style.row_backgrounds.len()]
            };

            self.writer.fill_rect(left, bottom, table.width(), row_height, background);

            // vertically centred baseline
            let baseline = bottom + (row_height - style.font_size) / 2.0 + style.font_size * 0.22;
            let mut x = left;

            for (cell, width) in row.iter().zip(table.col_widths.iter()) {
                let available = width - style.padding_left - style.padding_right;
                let bytes = clip(encoding::encode(cell), &style.font, style.font_size, available);

                self.writer.show_text(&style.font, style.font_size, style.text_color, x + style.padding_left, baseline, &bytes);
                self.writer.stroke_rect(x, bottom, *width, row_height, style.grid_width, style.grid_color);

                x += width;
            }

            self.writer.feed(row_height);
            self.writer.at_top = false;
        }
    }

    /// decorates the last page and hands the writer back for serialization
    fn finish(mut self) -> Writer {
        self.decorate();
        self.writer
    }
}

/// drops trailing bytes until `bytes` fits `available` points
fn clip(mut bytes: Vec<u8>, font: &FontFace, font_size: f32, available: f32) -> Vec<u8> {
    while !bytes.is_empty() && font.text_width(&bytes, font_size) > available {
        bytes.pop();
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ FontRegistration, StandardFont, StyleKind };
    use std::cell::RefCell;

    fn styles() -> StyleSet {
        StyleSet::build(&FontRegistration::new())
    }

    fn template() -> DocTemplate {
        DocTemplate::a4("Test").with_compression(false)
    }

    fn no_op(_: &mut PageCanvas<'_>, _: usize) {}

    fn page_count(pdf: &[u8]) -> usize {
        lopdf::Document::load_mem(pdf).unwrap().get_pages().len()
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|window| *window == needle).count()
    }

    #[test]
    fn single_paragraph_makes_one_page() {
        let story = vec![DocumentElement::paragraph(StyleKind::Title, "Hello")];
        let pdf = template().build(&story, &styles(), &no_op, &no_op).unwrap();

        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(page_count(&pdf), 1);
        assert_eq!(count(&pdf, b"(Hello) Tj"), 1);
    }

    #[test]
    fn page_break_starts_a_new_page_and_trailing_breaks_are_dropped() {
        let story = vec![
            DocumentElement::paragraph(StyleKind::Title, "one"),
            DocumentElement::PageBreak,
            DocumentElement::paragraph(StyleKind::Title, "two"),
            DocumentElement::PageBreak,
        ];
        let seen = RefCell::new(Vec::new());
        let record = |_: &mut PageCanvas<'_>, page: usize| seen.borrow_mut().push(page);

        template().build(&story, &styles(), &record, &record).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn breaks_on_an_empty_page_do_not_add_blank_pages() {
        let story = vec![
            DocumentElement::PageBreak,
            DocumentElement::paragraph(StyleKind::Title, "one"),
            DocumentElement::spacer(2000.0),
            DocumentElement::PageBreak,
            DocumentElement::paragraph(StyleKind::Title, "two"),
        ];
        let seen = RefCell::new(Vec::new());
        let record = |_: &mut PageCanvas<'_>, page: usize| seen.borrow_mut().push(page);

        let pdf = template().build(&story, &styles(), &record, &record).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(page_count(&pdf), 2);
    }

    #[test]
    fn first_and_later_decorators_are_distinguished() {
        let story = vec![
            DocumentElement::paragraph(StyleKind::Title, "one"),
            DocumentElement::PageBreak,
            DocumentElement::paragraph(StyleKind::Title, "two"),
            DocumentElement::PageBreak,
            DocumentElement::paragraph(StyleKind::Title, "three"),
        ];
        let first = RefCell::new(Vec::new());
        let later = RefCell::new(Vec::new());
        let on_first = |_: &mut PageCanvas<'_>, page: usize| first.borrow_mut().push(page);
        let on_later = |_: &mut PageCanvas<'_>, page: usize| later.borrow_mut().push(page);

        template().build(&story, &styles(), &on_first, &on_later).unwrap();

        assert_eq!(*first.borrow(), vec![1]);
        assert_eq!(*later.borrow(), vec![2, 3]);
    }

    #[test]
    fn long_flows_overflow_onto_more_pages() {
        let story: Vec<_> = (0..200)
            .map(|index| DocumentElement::paragraph(StyleKind::Bullet, format!("line {index}")))
            .collect();
        let pdf = template().build(&story, &styles(), &no_op, &no_op).unwrap();

        // 14pt per bullet against ~762pt of frame
        assert_eq!(page_count(&pdf), 4);
        assert_eq!(count(&pdf, b"(line 199) Tj"), 1);
    }

    #[test]
    fn links_become_annotations() {
        let paragraph = Paragraph::new(StyleKind::Resource, "CSES - Practice problems").with_link("https://cses.fi/", "CSES");
        let story = vec![DocumentElement::Paragraph(paragraph)];
        let pdf = template().build(&story, &styles(), &no_op, &no_op).unwrap();

        assert_eq!(count(&pdf, b"/Subtype /Link"), 1);
        assert_eq!(count(&pdf, b"(https://cses.fi/)"), 1);
    }

    #[test]
    fn standard_fonts_are_not_embedded() {
        let story = vec![DocumentElement::bullet(StyleKind::Bullet, "x")];
        let pdf = template().build(&story, &styles(), &no_op, &no_op).unwrap();

        assert_eq!(count(&pdf, b"/BaseFont /Courier"), 1);
        assert_eq!(count(&pdf, b"/FontFile2"), 0);
    }

    #[test]
    fn clip_trims_to_width() {
        let courier = FontFace::from(StandardFont::Courier);
        assert_eq!(clip(b"abcdef".to_vec(), &courier, 10.0, 24.0), b"abcd".to_vec());
        assert_eq!(clip(b"ab".to_vec(), &courier, 10.0, 24.0), b"ab".to_vec());
    }

    #[test]
    fn compressed_output_is_smaller_than_plain() {
        let story: Vec<_> = (0..50)
            .map(|index| DocumentElement::bullet(StyleKind::Bullet, format!("repeated line {index}")))
            .collect();
        let plain = template().build(&story, &styles(), &no_op, &no_op).unwrap();
        let packed = template().with_compression(true).build(&story, &styles(), &no_op, &no_op).unwrap();

        assert!(packed.len() < plain.len());
        assert_eq!(count(&packed, b"/FlateDecode"), 1);
    }
}
