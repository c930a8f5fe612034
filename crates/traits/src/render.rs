//! Drawing contracts used by the render pass.
//!
//! All coordinates are in points with the origin at the top-left corner of the
//! page and y growing downwards. Backends with another convention (PDF puts the
//! origin bottom-left) invert coordinates themselves.

use blockframe_types::{Color, FontSpec, Offset, PageGeometry, Rect, Size};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

/// A surface that blocks paint onto during the render pass.
pub trait RenderTarget {
    /// Places a single run of text. `origin` and `size` describe the box the
    /// text was measured into; the baseline sits on the bottom edge.
    fn draw_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        origin: Offset,
        size: Size,
    ) -> Result<(), RenderError>;

    /// Fills `rect` with the current colour.
    fn fill_rect(&mut self, rect: Rect) -> Result<(), RenderError>;

    /// Strokes a straight line with the current colour.
    fn stroke_line(&mut self, from: Offset, to: Offset, thickness: f32)
    -> Result<(), RenderError>;

    /// Makes `color` current (`None` means the backend default, black) and
    /// returns the previously requested colour for `restore_color`.
    fn set_color(&mut self, color: Option<Color>) -> Option<Color>;

    /// Restores a colour returned by `set_color`.
    fn restore_color(&mut self, previous: Option<Color>);
}

/// Produces one render target per page and finalizes it once painted.
pub trait PageSink {
    type Page: RenderTarget;

    fn begin_page(
        &mut self,
        number: usize,
        geometry: &PageGeometry,
    ) -> Result<Self::Page, RenderError>;

    fn finish_page(&mut self, page: Self::Page) -> Result<(), RenderError>;
}
