use pdf_writer::{ Content, Rect, Ref };

/// container for pdf_writer page references; each page gets a single `Content` stream
pub struct Page {
    pub page_id: Ref,
    pub content_id: Ref,
    pub content: Content,
    pub links: Vec<LinkAnnotation>,
}

impl Page {
    pub fn new(page_id: Ref, content_id: Ref) -> Self {
        Page {
            page_id,
            content_id,
            content: Content::new(),
            links: Vec::new(),
        }
    }
}

/// clickable area pointing at an external URI
#[derive(Debug,Clone,PartialEq)]
pub struct LinkAnnotation {
    pub rect: Rect,
    pub url: String,
}
