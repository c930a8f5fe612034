//! Block-and-frame pagination.
//!
//! Content is written as a stream of blocks into a [`Document`]. On
//! [`Document::finalize`] the stream is paginated: every page gets a root
//! frame that takes as much of the stream as fits and gives back the rest,
//! and each filled page is handed to a page sink such as the PDF backend.
//!
//! ```no_run
//! use blockframe::{Document, DocumentConfig, Frame, TextBlock};
//!
//! let mut document = Document::new(DocumentConfig::default());
//! let mut paragraph = Frame::wrap();
//! for word in "Hello paginated world".split_whitespace() {
//!     paragraph.write(TextBlock::new(word));
//! }
//! document.write(paragraph);
//! document.write_file("hello.pdf")?;
//! # Ok::<(), blockframe::DocumentError>(())
//! ```

pub mod document;
pub mod error;
pub mod markup;

pub use document::{Document, DocumentConfig};
pub use error::DocumentError;

pub use blockframe_layout::{
    Alignment, ApproximateMetrics, Block, BorderKind, BorderSide, ColumnFrame, FixedMetrics, Flow,
    Frame, HorizontalGap, Justification, Layout, LayoutConfig, LayoutEnv, LayoutError, Overlay, PageDriver, PageFrame,
    PageSetup, PageTemplate, Pipe, PlacedContent, Placement, PlainTable, Quill, RectBlock, Spacer,
    StandardPages, TableBlock, TableStyle, TextBlock, TrueTypeMetrics,
};
pub use blockframe_render_core::{RecordedPage, RecordingSink};
pub use blockframe_render_lopdf::PdfSink;
pub use blockframe_traits::{PageSink, RenderError, RenderTarget, TextMetrics};
pub use blockframe_types::{
    Color, FontFamily, FontSpec, FontStyle, Margins, Offset, PageGeometry, Rect, Size,
};
