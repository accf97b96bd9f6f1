use serde::Serialize;

use crate::types::{
    font_registration::{ BODY_FONT, BOLD_FONT, CODE_FONT },
    FontFace,
    FontRegistration,
    StandardFont,
    TextAlignment,
};

/// device RGB, components in 0.0..=1.0
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const GREY: Rgb = Rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GREY: Rgb = Rgb(0.827, 0.827, 0.827);
    pub const WHITESMOKE: Rgb = Rgb(0.961, 0.961, 0.961);
    pub const LIGHT_YELLOW: Rgb = Rgb(1.0, 1.0, 0.878);
}

/// heading colour, `#1f4e79`
pub const HEADING_BLUE: Rgb = Rgb(31.0 / 255.0, 78.0 / 255.0, 121.0 / 255.0);

/// names the paragraph style an element is drawn with
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub enum StyleKind {
    Title,
    Subtitle,
    Heading,
    Bullet,
    Code,
    Resource,
}

#[derive(Debug,Clone)]
pub struct ParagraphStyle {
    pub name: &'static str,
    pub font: FontFace,
    pub font_size: f32,
    pub leading: f32,
    pub text_color: Rgb,
    pub alignment: TextAlignment,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub right_indent: f32,
    pub back_color: Option<Rgb>,
}

impl ParagraphStyle {
    /// body-text defaults: 10pt on 12pt, black, left aligned, no spacing
    fn body(name: &'static str, font: FontFace) -> Self {
        ParagraphStyle {
            name,
            font,
            font_size: 10.0,
            leading: 12.0,
            text_color: Rgb::BLACK,
            alignment: TextAlignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            right_indent: 0.0,
            back_color: None,
        }
    }
}

#[derive(Debug,Clone)]
pub struct TableStyle {
    pub font: FontFace,
    pub font_size: f32,
    pub leading: f32,
    pub text_color: Rgb,
    pub header_background: Rgb,
    /// body rows cycle through these
    pub row_backgrounds: [Rgb; 2],
    pub grid_width: f32,
    pub grid_color: Rgb,
    pub padding_left: f32,
    pub padding_right: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,
}

/// The fixed set of styles for one build, derived from which fonts were registered
#[derive(Debug,Clone)]
pub struct StyleSet {
    pub title: ParagraphStyle,
    pub subtitle: ParagraphStyle,
    pub heading: ParagraphStyle,
    pub bullet: ParagraphStyle,
    pub code: ParagraphStyle,
    pub resource: ParagraphStyle,
    pub table: TableStyle,
}

impl StyleSet {
    pub fn build(fonts: &FontRegistration) -> Self {
        let bold = fonts.resolve(&[BOLD_FONT, BODY_FONT], StandardFont::HelveticaBold);
        let body = fonts.resolve(&[BODY_FONT], StandardFont::Helvetica);
        let mono = fonts.resolve(&[CODE_FONT], StandardFont::Courier);

        let title = ParagraphStyle {
            font_size: 20.0,
            leading: 24.0,
            alignment: TextAlignment::Center,
            space_after: 12.0,
            ..ParagraphStyle::body("Title", bold.clone())
        };

        let subtitle = ParagraphStyle {
            text_color: Rgb::GREY,
            alignment: TextAlignment::Center,
            space_after: 18.0,
            ..ParagraphStyle::body("Subtitle", body.clone())
        };

        let heading = ParagraphStyle {
            font_size: 13.0,
            leading: 18.0,
            text_color: HEADING_BLUE,
            space_before: 8.0,
            space_after: 6.0,
            ..ParagraphStyle::body("Header", bold)
        };

        let bullet = ParagraphStyle {
            font_size: 9.5,
            leading: 12.0,
            left_indent: 10.0,
            space_after: 2.0,
            ..ParagraphStyle::body("Bullets", mono.clone())
        };

        let code = ParagraphStyle {
            font_size: 9.5,
            leading: 12.0,
            left_indent: 6.0,
            right_indent: 6.0,
            space_before: 4.0,
            space_after: 4.0,
            back_color: Some(Rgb::WHITESMOKE),
            ..ParagraphStyle::body("Code", mono)
        };

        let resource = ParagraphStyle {
            left_indent: 6.0,
            space_after: 6.0,
            ..ParagraphStyle::body("Res", body)
        };

        let table = TableStyle {
            font: FontFace::Standard(StandardFont::Helvetica),
            font_size: 9.0,
            leading: 10.8,
            text_color: Rgb::BLACK,
            header_background: Rgb::LIGHT_GREY,
            row_backgrounds: [Rgb::WHITESMOKE, Rgb::LIGHT_YELLOW],
            grid_width: 0.25,
            grid_color: Rgb::GREY,
            padding_left: 6.0,
            padding_right: 6.0,
            padding_top: 3.0,
            padding_bottom: 3.0,
        };

        StyleSet { title, subtitle, heading, bullet, code, resource, table }
    }

    pub fn get(&self, kind: StyleKind) -> &ParagraphStyle {
        match kind {
            StyleKind::Title => &self.title,
            StyleKind::Subtitle => &self.subtitle,
            StyleKind::Heading => &self.heading,
            StyleKind::Bullet => &self.bullet,
            StyleKind::Code => &self.code,
            StyleKind::Resource => &self.resource,
        }
    }
}
