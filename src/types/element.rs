use serde::Serialize;

use crate::types::{ Error, Result, StyleKind };

/// one unit of flow handed to `DocTemplate::build`
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentElement {
    Paragraph(Paragraph),
    Spacer { height: f32 },
    Table(Table),
    PageBreak,
}

impl DocumentElement {
    pub fn paragraph(style: StyleKind, text: impl Into<String>) -> Self {
        DocumentElement::Paragraph(Paragraph::new(style, text))
    }

    pub fn bullet(style: StyleKind, text: impl Into<String>) -> Self {
        DocumentElement::Paragraph(Paragraph::new(style, text).with_bullet())
    }

    pub fn spacer(height: f32) -> Self {
        DocumentElement::Spacer { height }
    }

    /// the text the element contributes to the page, if any
    pub fn text(&self) -> Option<String> {
        match self {
            DocumentElement::Paragraph(paragraph) => Some(paragraph.text.clone()),
            DocumentElement::Table(table) => Some(
                table.rows.iter().map(|row| row.join(" | ")).collect::<Vec<_>>().join("\n")
            ),
            DocumentElement::Spacer { .. } | DocumentElement::PageBreak => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            DocumentElement::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }
}

/// a URI link over the leading `anchor` of a paragraph
#[derive(Debug,Clone,PartialEq,Eq,Serialize)]
pub struct Hyperlink {
    pub url: String,
    pub anchor: String,
}

#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct Paragraph {
    pub style: StyleKind,
    pub text: String,
    /// draw a bullet glyph ahead of the first line
    pub bullet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Hyperlink>,
}

impl Paragraph {
    pub fn new(style: StyleKind, text: impl Into<String>) -> Self {
        Paragraph {
            style,
            text: text.into(),
            bullet: false,
            link: None,
        }
    }

    pub fn with_bullet(mut self) -> Self {
        self.bullet = true;
        self
    }

    /// links the leading `anchor` text of the paragraph to `url`
    pub fn with_link(mut self, url: impl Into<String>, anchor: impl Into<String>) -> Self {
        self.link = Some(Hyperlink { url: url.into(), anchor: anchor.into() });
        self
    }
}

/// Rows of plain-text cells with fixed column widths; the first row is drawn as the header
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub col_widths: Vec<f32>,
}

impl Table {
    /// every row must have one cell per column
    pub fn new(rows: Vec<Vec<String>>, col_widths: Vec<f32>) -> Result<Self> {
        if rows.is_empty() || col_widths.is_empty() {
            return Err(Error::EmptyTable);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != col_widths.len() {
                return Err(Error::ColumnMismatch {
                    row,
                    expected: col_widths.len(),
                    found: cells.len(),
                });
            }
        }

        Ok(Table { rows, col_widths })
    }

    pub fn width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// left column of every row
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|row| row.first().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn table_rejects_ragged_rows() {
        let result = Table::new(vec![row(&["a", "b"]), row(&["c"])], vec![10.0, 20.0]);
        assert!(matches!(result, Err(Error::ColumnMismatch { row: 1, expected: 2, found: 1 })));
    }

    #[test]
    fn table_rejects_empty_input() {
        assert!(matches!(Table::new(Vec::new(), vec![10.0]), Err(Error::EmptyTable)));
        assert!(matches!(Table::new(vec![row(&["a"])], Vec::new()), Err(Error::EmptyTable)));
    }

    #[test]
    fn element_text_covers_paragraphs_and_tables() {
        let table = Table::new(vec![row(&["<set>", "std::set"])], vec![10.0, 20.0]).unwrap();

        assert_eq!(DocumentElement::Table(table).text().as_deref(), Some("<set> | std::set"));
        assert_eq!(DocumentElement::paragraph(StyleKind::Title, "T").text().as_deref(), Some("T"));
        assert_eq!(DocumentElement::PageBreak.text(), None);
    }

    #[test]
    fn elements_serialize_with_a_type_tag() {
        let json = serde_json::to_value(DocumentElement::spacer(4.0)).unwrap();
        assert_eq!(json["type"], "spacer");
        assert_eq!(json["height"], 4.0);

        let json = serde_json::to_value(DocumentElement::bullet(StyleKind::Bullet, "x")).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["bullet"], true);
        assert!(json.get("link").is_none());
    }
}
