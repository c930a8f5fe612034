use crate::DocumentError;
use blockframe_layout::{
    ApproximateMetrics, Block, LayoutConfig, LayoutEnv, PageDriver, PageTemplate, Pipe,
    StandardPages,
};
use blockframe_render_lopdf::PdfSink;
use blockframe_traits::{PageSink, TextMetrics};
use blockframe_types::PageGeometry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page size and pagination limits for one document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default)]
    pub page: PageGeometry,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl DocumentConfig {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// The root of a document: a pipe of top-level blocks plus the template that
/// decides how each page is set up.
pub struct Document<T: PageTemplate = StandardPages> {
    config: DocumentConfig,
    pipe: Pipe,
    template: T,
    metrics: Box<dyn TextMetrics>,
}

impl Document<StandardPages> {
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            pipe: Pipe::named("document"),
            template: StandardPages,
            metrics: Box::new(ApproximateMetrics),
        }
    }
}

impl<T: PageTemplate> Document<T> {
    pub fn with_template<U: PageTemplate>(self, template: U) -> Document<U> {
        Document {
            config: self.config,
            pipe: self.pipe,
            template,
            metrics: self.metrics,
        }
    }

    /// Replaces the metrics text is measured with. Defaults to estimates for
    /// the standard PDF fonts.
    pub fn with_metrics(mut self, metrics: impl TextMetrics + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Appends a top-level block. Returns `false` once the document has been
    /// finalized.
    pub fn write<B: Block + 'static>(&mut self, block: B) -> bool {
        self.pipe.write(block)
    }

    pub fn write_boxed(&mut self, block: Box<dyn Block>) -> bool {
        self.pipe.write_boxed(block)
    }

    pub fn template_mut(&mut self) -> &mut T {
        &mut self.template
    }

    /// Paginates everything written so far into `sink`. Returns the number of
    /// pages produced.
    pub fn finalize<S: PageSink>(mut self, sink: &mut S) -> Result<usize, DocumentError> {
        log::info!("Paginating {} top-level blocks", self.pipe.len());
        let env = LayoutEnv::new(self.metrics.as_ref());
        let driver = PageDriver::new(env, self.config.page, self.config.layout);
        Ok(driver.run(&mut self.pipe, &mut self.template, sink)?)
    }

    pub fn render_pdf(self) -> Result<Vec<u8>, DocumentError> {
        let mut sink = PdfSink::new();
        self.finalize(&mut sink)?;
        Ok(sink.finish()?)
    }

    /// Renders to PDF and writes the file. Returns the number of pages.
    pub fn write_file(self, path: impl AsRef<Path>) -> Result<usize, DocumentError> {
        let path = path.as_ref();
        let mut sink = PdfSink::new();
        let pages = self.finalize(&mut sink)?;
        let mut file = fs::File::create(path)?;
        sink.write_to(&mut file)?;
        log::info!("Wrote {} pages to {}", pages, path.display());
        Ok(pages)
    }
}
