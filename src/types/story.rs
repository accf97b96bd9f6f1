use crate::types::{
    catalog::{ AUTHOR, COMMON_HEADERS, NOTES, QUICK_TIPS, RESOURCES, SUBTITLE, TITLE },
    doc::CM,
    ContentCatalog,
    DocumentElement,
    Paragraph,
    Result,
    StyleKind,
    Table,
};

/// Lays the catalog out as a flow of elements: title page, contents, one block per section,
/// the header table, notes and the resources page.
///
/// Elements refer to styles by `StyleKind`, so the same catalog always yields the same
/// sequence whichever fonts end up backing those styles.
pub fn build_story(catalog: &ContentCatalog) -> Result<Vec<DocumentElement>> {
    let mut story = Vec::with_capacity(64 + catalog.sections().iter().map(|s| s.lines.len() + 2).sum::<usize>());

    // title page
    story.push(DocumentElement::paragraph(StyleKind::Title, TITLE));
    story.push(DocumentElement::paragraph(StyleKind::Subtitle, SUBTITLE));
    story.push(DocumentElement::spacer(6.0));
    story.push(DocumentElement::paragraph(StyleKind::Subtitle, AUTHOR));
    story.push(DocumentElement::spacer(40.0));
    story.push(DocumentElement::paragraph(StyleKind::Heading, "Quick Tips:"));
    story.push(DocumentElement::paragraph(StyleKind::Bullet, QUICK_TIPS));
    story.push(DocumentElement::spacer(20.0));
    story.push(DocumentElement::PageBreak);

    // contents
    story.push(DocumentElement::paragraph(StyleKind::Title, "Contents"));
    for line in catalog.contents_lines() {
        story.push(DocumentElement::paragraph(StyleKind::Bullet, line));
    }
    story.push(DocumentElement::PageBreak);

    for section in catalog.sections() {
        story.push(DocumentElement::paragraph(StyleKind::Heading, section.title.as_str()));
        for line in &section.lines {
            story.push(DocumentElement::bullet(StyleKind::Bullet, line.as_str()));
        }
        story.push(DocumentElement::spacer(4.0));
    }

    story.push(DocumentElement::spacer(8.0));
    story.push(DocumentElement::paragraph(StyleKind::Heading, "Common Headers"));
    story.push(DocumentElement::Table(common_headers_table()?));

    story.push(DocumentElement::spacer(10.0));
    story.push(DocumentElement::paragraph(StyleKind::Heading, "Notes"));
    for note in NOTES {
        story.push(DocumentElement::paragraph(StyleKind::Bullet, note));
    }

    story.push(DocumentElement::PageBreak);
    story.push(DocumentElement::paragraph(StyleKind::Title, "Resources"));
    for resource in RESOURCES {
        let text = format!("{}{}", resource.label, resource.description);
        let mut paragraph = Paragraph::new(StyleKind::Resource, text);

        if let Some(url) = resource.url {
            paragraph = paragraph.with_link(url, resource.label);
        }

        story.push(DocumentElement::Paragraph(paragraph));
    }

    Ok(story)
}

/// the `<header>` -> symbols reference table
pub fn common_headers_table() -> Result<Table> {
    let rows = COMMON_HEADERS
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    Table::new(rows, vec![4.5 * CM, 11.0 * CM])
}
