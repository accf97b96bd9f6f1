use std::path::PathBuf;

use crate::types::{
    catalog::{ AUTHOR, TITLE },
    story::build_story,
    footer::page_number_footer,
    BuildConfig,
    ContentCatalog,
    DocTemplate,
    DocumentElement,
    Error,
    FontRegistration,
    Result,
    StyleSet,
};

/// Per-build state: the fonts found for this run and the styles derived from them.
/// Nothing here is shared between builds.
#[derive(Debug)]
pub struct BuildContext {
    pub fonts: FontRegistration,
    pub styles: StyleSet,
}

impl BuildContext {
    /// registers whatever optional fonts `config.font_dir` holds and builds the styles
    pub fn new(config: &BuildConfig) -> Self {
        let fonts = FontRegistration::discover(&config.font_dir);
        let styles = StyleSet::build(&fonts);

        BuildContext { fonts, styles }
    }
}

/// # Main entry point of the library
/// Runs the pipeline: register fonts, build styles, render the catalog to elements,
/// lay the elements out with the page-number footer and write the PDF.
///
/// ```ignore
/// let output = DocumentBuilder::new(BuildConfig::default()).build()?;
/// println!("Generated {}", output.display());
/// ```
#[derive(Debug,Clone)]
pub struct DocumentBuilder {
    pub config: BuildConfig,
    pub catalog: ContentCatalog,
}

impl DocumentBuilder {
    /// builder for the C++ cheat sheet content
    pub fn new(config: BuildConfig) -> Self {
        DocumentBuilder {
            config,
            catalog: ContentCatalog::cheat_sheet(),
        }
    }

    /// builder function replacing the catalog
    pub fn with_catalog(mut self, catalog: ContentCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// the element sequence the layout engine receives
    pub fn elements(&self) -> Result<Vec<DocumentElement>> {
        build_story(&self.catalog)
    }

    /// the element sequence as pretty JSON, for `--dump-elements`
    pub fn elements_json(&self) -> Result<String> {
        let elements = self.elements()?;
        serde_json::to_string_pretty(&elements).map_err(Error::Dump)
    }

    pub fn template(&self) -> DocTemplate {
        DocTemplate::a4(TITLE)
            .with_author(AUTHOR.trim_start_matches("Author: "))
            .with_compression(self.config.compress)
    }

    /// renders the document in memory
    pub fn render(&self) -> Result<Vec<u8>> {
        let context = BuildContext::new(&self.config);
        self.render_with(&context)
    }

    /// renders the document in memory with an existing context
    pub fn render_with(&self, context: &BuildContext) -> Result<Vec<u8>> {
        let story = self.elements()?;
        let footer = page_number_footer(&context.fonts);

        self.template().build(&story, &context.styles, &footer, &footer)
    }

    /// renders and writes the document to `config.output`, returning that path
    pub fn build(&self) -> Result<PathBuf> {
        let pdf = self.render()?;
        std::fs::write(&self.config.output, &pdf)?;

        log::info!("wrote {} bytes to {}", pdf.len(), self.config.output.display());

        Ok(self.config.output.clone())
    }
}
