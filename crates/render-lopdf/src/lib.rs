//! PDF output for blockframe using lopdf.
//!
//! [`PdfSink`] builds the document object graph in memory, one page per
//! `begin_page`/`finish_page` pair, and serializes it when finished. Text is
//! set in the fourteen standard Type1 fonts, so no font data is embedded.

mod fonts;
mod page;
mod sink;

pub use page::PdfPage;
pub use sink::PdfSink;
