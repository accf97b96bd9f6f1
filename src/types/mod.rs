mod builder;
mod catalog;
mod config;
mod doc;
mod element;
mod error;
mod font;
mod font_reference;
mod page;
mod style;
mod text;
mod text_alignment;
mod writer;

pub mod encoding;
pub mod font_registration;
pub mod footer;
pub mod story;

pub use builder::{ BuildContext, DocumentBuilder };
pub use catalog::{ ContentCatalog, Resource, Section, AUTHOR, COMMON_HEADERS, NOTES, RESOURCES, SUBTITLE, TITLE };
pub use config::{ default_font_dir, BuildConfig, DEFAULT_OUTPUT };
pub use doc::{ DocTemplate, PageDecorator, A4, CM };
pub use element::{ DocumentElement, Hyperlink, Paragraph, Table };
pub use error::{ Error, Result };
pub use font::{ FontFace, StandardFont, TrueTypeFont };
pub use font_reference::FontReference;
pub use font_registration::FontRegistration;
pub use page::{ LinkAnnotation, Page };
pub use style::{ ParagraphStyle, Rgb, StyleKind, StyleSet, TableStyle };
pub use text::{ Line, TextBlock, Word };
pub use text_alignment::TextAlignment;
pub use writer::{ PageCanvas, Writer };
