//! Integration tests for the full document build.

use std::path::{ Path, PathBuf };

use cp_cheatsheet::types::{
    font_registration::{ BODY_FONT, BOLD_FONT, CODE_FONT },
    BuildConfig,
    BuildContext,
    ContentCatalog,
    DocumentBuilder,
    DocumentElement,
    Error,
    Section,
};

fn config(dir: &Path) -> BuildConfig {
    BuildConfig::default()
        .with_font_dir(dir)
        .with_output(dir.join("cpp_cp_cheatsheet.pdf"))
        .with_compression(false)
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|window| *window == needle).count()
}

fn page_count(pdf: &[u8]) -> usize {
    lopdf::Document::load_mem(pdf).unwrap().get_pages().len()
}

/// a two-glyph TrueType font checked into the repository
fn fixture_font() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("demo.ttf")
}

#[test]
fn test_builds_without_any_fonts() {
    let dir = tempfile::tempdir().unwrap();
    let path = DocumentBuilder::new(config(dir.path())).build().unwrap();
    let pdf = std::fs::read(&path).unwrap();

    assert_eq!(path, dir.path().join("cpp_cp_cheatsheet.pdf"));
    assert!(page_count(&pdf) >= 5);
    assert_eq!(count(&pdf, b"/FontFile2"), 0);
    assert_eq!(count(&pdf, b"/BaseFont /Helvetica-Bold"), 1);
    assert_eq!(count(&pdf, b"/BaseFont /Courier"), 1);
}

#[test]
fn test_every_page_has_one_footer() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = DocumentBuilder::new(config(dir.path())).render().unwrap();
    let pages = page_count(&pdf);

    for page in 1..=pages {
        let footer = format!("(Page {page}) Tj");
        assert_eq!(count(&pdf, footer.as_bytes()), 1, "{footer}");
    }
    assert_eq!(count(&pdf, format!("(Page {}) Tj", pages + 1).as_bytes()), 0);
}

#[test]
fn test_output_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let builder = DocumentBuilder::new(config(dir.path()).with_compression(true));

    assert_eq!(builder.render().unwrap(), builder.render().unwrap());
}

#[test]
fn test_element_sequence_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let builder = DocumentBuilder::new(config(dir.path()));
    let first = builder.elements().unwrap();
    let second = builder.elements().unwrap();

    assert_eq!(first.len(), second.len());
    let texts = |elements: &[DocumentElement]| elements.iter().map(DocumentElement::text).collect::<Vec<_>>();
    assert_eq!(texts(&first), texts(&second));
}

#[test]
fn test_two_section_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ContentCatalog::new(vec![
        Section::new("A", ["x", "y"]),
        Section::new("B", ["z"]),
    ]);
    let builder = DocumentBuilder::new(config(dir.path())).with_catalog(catalog);

    let pdf = std::fs::read(builder.build().unwrap()).unwrap();

    assert_eq!(count(&pdf, b"(1. A) Tj"), 1);
    assert_eq!(count(&pdf, b"(2. B) Tj"), 1);
    // non-ASCII text is written as a hex string: bullet 0x95, space, 'x'
    assert_eq!(count(&pdf, b"<952078> Tj"), 1);
    assert_eq!(count(&pdf, b"<952079> Tj"), 1);
    assert_eq!(count(&pdf, b"(A) Tj"), 1);
    assert_eq!(count(&pdf, b"(B) Tj"), 1);
}

#[test]
fn test_resources_page_links() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = DocumentBuilder::new(config(dir.path())).render().unwrap();

    assert_eq!(count(&pdf, b"/Subtype /Link"), 3);
    assert_eq!(count(&pdf, b"(https://codeforces.com/)"), 1);
}

#[test]
fn test_corrupt_font_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("consola.ttf"), b"\0\x01\0\0 truncated").unwrap();

    let context = BuildContext::new(&config(dir.path()));
    assert!(!context.fonts.is_registered(CODE_FONT));

    let pdf = DocumentBuilder::new(config(dir.path())).render_with(&context).unwrap();
    assert_eq!(count(&pdf, b"/BaseFont /Courier"), 1);
}

#[test]
fn test_registered_font_is_embedded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(fixture_font(), dir.path().join("segoeui.ttf")).unwrap();

    let context = BuildContext::new(&config(dir.path()));
    assert!(context.fonts.is_registered(BODY_FONT));
    assert!(!context.fonts.is_registered(BOLD_FONT));
    assert!(!context.fonts.is_registered(CODE_FONT));

    let pdf = DocumentBuilder::new(config(dir.path())).render_with(&context).unwrap();

    // headings fall back from SegoeUI-Bold to SegoeUI, so Helvetica-Bold is never used
    assert_eq!(count(&pdf, b"/BaseFont /SegoeUI"), 1);
    assert_eq!(count(&pdf, b"/BaseFont /Helvetica-Bold"), 0);
    assert_eq!(count(&pdf, b"/FontFile2"), 1);
}

#[test]
fn test_missing_output_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path()).with_output(dir.path().join("nope").join("out.pdf"));

    assert!(matches!(DocumentBuilder::new(config).build(), Err(Error::Io(_))));
}
