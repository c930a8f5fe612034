use crate::ColorState;
use blockframe_traits::{PageSink, RenderError, RenderTarget};
use blockframe_types::{Color, FontSpec, Offset, PageGeometry, Rect, Size};

/// One drawing operation, in page coordinates, with the colour it was drawn in.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        font: FontSpec,
        origin: Offset,
        size: Size,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Offset,
        to: Offset,
        thickness: f32,
        color: Color,
    },
}

/// A render target that keeps every operation instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    number: usize,
    geometry: PageGeometry,
    ops: Vec<DrawOp>,
    colors: ColorState,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl RenderTarget for RecordingCanvas {
    fn draw_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        origin: Offset,
        size: Size,
    ) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            font: font.clone(),
            origin,
            size,
            color: self.colors.effective(),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Rect {
            rect,
            color: self.colors.effective(),
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Offset, to: Offset, thickness: f32) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Line {
            from,
            to,
            thickness,
            color: self.colors.effective(),
        });
        Ok(())
    }

    fn set_color(&mut self, color: Option<Color>) -> Option<Color> {
        self.colors.request(color)
    }

    fn restore_color(&mut self, previous: Option<Color>) {
        self.colors.restore(previous);
    }
}

#[derive(Debug, Clone)]
pub struct RecordedPage {
    pub number: usize,
    pub geometry: PageGeometry,
    pub ops: Vec<DrawOp>,
}

impl RecordedPage {
    /// Every text run on the page, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Where the first run equal to `wanted` was drawn.
    pub fn text_origin(&self, wanted: &str) -> Option<Offset> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { text, origin, .. } if text == wanted => Some(*origin),
            _ => None,
        })
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

/// Collects recorded pages in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pages: Vec<RecordedPage>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<RecordedPage> {
        self.pages
    }
}

impl PageSink for RecordingSink {
    type Page = RecordingCanvas;

    fn begin_page(
        &mut self,
        number: usize,
        geometry: &PageGeometry,
    ) -> Result<RecordingCanvas, RenderError> {
        Ok(RecordingCanvas {
            number,
            geometry: *geometry,
            ..RecordingCanvas::default()
        })
    }

    fn finish_page(&mut self, page: RecordingCanvas) -> Result<(), RenderError> {
        log::trace!("Recorded page {} with {} ops", page.number, page.ops.len());
        self.pages.push(RecordedPage {
            number: page.number,
            geometry: page.geometry,
            ops: page.ops,
        });
        Ok(())
    }
}
