//! # Introduction
//!
//! cp-cheatsheet renders a fixed C++ competitive-programming reference (STL containers,
//! algorithms, bit tricks, a header table and a few links) to an A4 PDF. Built on top of
//! pdf_writer (Typst), this is a no frills crate: one document, one layout, no templating.
//!
//! Pipeline:
//! - [X] Optional TrueType fonts (Segoe UI, Segoe UI Bold, Consolas) probed from a font directory
//! - [X] Base-14 fallbacks (Helvetica, Helvetica-Bold, Courier) when a font is missing or broken
//! - [X] Title page, contents, one block per topic, header table, notes, resources
//! - [X] Word wrap, page overflow and page breaks
//! - [X] Centred `Page N` footer on every page
//! - [X] URI link annotations on the resources page
//! - [X] Byte-for-byte reproducible output
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! # Basic Usage
//! The main entry point is the `DocumentBuilder` struct. `.build()` registers fonts, builds
//! styles, renders the catalog to `DocumentElement`s, lays them out and writes the file.
//!
//! ### Simple render
//! ```ignore
//! use cp_cheatsheet::types::{ BuildConfig, DocumentBuilder };
//!
//! let config = BuildConfig::default().with_output("cheatsheet.pdf");
//! let path = DocumentBuilder::new(config).build()?;
//!
//! println!("Generated {}", path.display());
//! ```
pub mod traits;
pub mod types;
