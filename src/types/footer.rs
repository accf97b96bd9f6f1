use crate::types::{
    doc::CM,
    font_registration::BODY_FONT,
    FontFace,
    FontRegistration,
    PageCanvas,
    StandardFont,
};

pub const FOOTER_FONT_SIZE: f32 = 9.0;

/// Builds the per-page footer: the body font when registered, Helvetica otherwise.
/// The returned closure only carries the chosen font.
pub fn page_number_footer(fonts: &FontRegistration) -> impl Fn(&mut PageCanvas<'_>, usize) {
    let font = fonts.resolve(&[BODY_FONT], StandardFont::Helvetica);

    move |canvas: &mut PageCanvas<'_>, page: usize| draw_page_number(canvas, page, &font)
}

/// draws a centred `Page N` half a centimetre above the bottom edge
pub fn draw_page_number(canvas: &mut PageCanvas<'_>, page: usize, font: &FontFace) {
    let text = format!("Page {page}");

    canvas.save_state();
    canvas.set_font(font, FOOTER_FONT_SIZE);
    let x = canvas.page_width() / 2.0;
    canvas.draw_centred_string(x, CM / 2.0, &text);
    canvas.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Writer;

    #[test]
    fn footer_draws_page_number_inside_saved_state() {
        let mut writer = Writer::new(595.0, 842.0, [40.0; 4]);
        let footer = page_number_footer(&FontRegistration::new());
        {
            let mut canvas = PageCanvas::new(&mut writer);
            footer(&mut canvas, 7);
        }

        let page = writer.pages.pop().unwrap();
        let bytes = page.content.finish().to_vec();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.starts_with("q\n"));
        assert!(text.contains("(Page 7) Tj"));
        assert!(text.trim_end().ends_with('Q'));
        assert_eq!(writer.font_refs[0].label, "Helvetica");
    }
}
