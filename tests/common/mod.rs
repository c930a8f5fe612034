#![allow(dead_code)]

use blockframe::{Document, DocumentConfig, FixedMetrics, Frame, StandardPages, TextBlock};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A document measured with fixed metrics: at the default 10pt every
/// character is 5 points wide and every line 12 points high.
pub fn fixed_document(config: DocumentConfig) -> Document<StandardPages> {
    init_logging();
    Document::new(config).with_metrics(FixedMetrics::default())
}

/// A paragraph of `count` four-letter words.
pub fn paragraph_of(count: usize) -> Frame {
    let mut frame = Frame::wrap();
    for index in 0..count {
        frame.write(TextBlock::new(format!("w{:03}", index % 1000)));
    }
    frame
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// The decoded content stream of every page, in page order.
    pub fn page_contents(&self) -> Vec<String> {
        self.doc
            .get_pages()
            .values()
            .map(|id| {
                self.doc
                    .get_page_content(*id)
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }
}
