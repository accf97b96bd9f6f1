use pdf_writer::{ Name, Ref };

use crate::types::FontFace;

/// a font as it appears in the document: object id, `/BaseFont` label and page resource name
#[derive(Debug)]
pub struct FontReference {
    pub id: Ref,
    pub label: String,
    pub name: String,
    pub face: FontFace,
}

impl FontReference {
    pub fn resource_name(&self) -> Name<'_> {
        Name(self.name.as_bytes())
    }
}
