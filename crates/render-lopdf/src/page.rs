use crate::fonts::{resource_name, to_win_ansi};
use blockframe_render_core::ColorState;
use blockframe_render_core::utils::flip_y;
use blockframe_traits::{RenderError, RenderTarget};
use blockframe_types::{Color, FontFamily, FontSpec, Offset, PageGeometry, Rect, Size};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::BTreeSet;

/// The content stream of one page under construction.
pub struct PdfPage {
    pub(crate) number: usize,
    pub(crate) geometry: PageGeometry,
    content: Content,
    colors: ColorState,
    /// Custom families drawn in a standard font instead.
    pub(crate) substituted: BTreeSet<String>,
}

impl PdfPage {
    pub(crate) fn new(number: usize, geometry: PageGeometry) -> Self {
        Self {
            number,
            geometry,
            content: Content { operations: vec![] },
            colors: ColorState::new(),
            substituted: BTreeSet::new(),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub(crate) fn encode(&self) -> Result<Vec<u8>, RenderError> {
        self.content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    /// Emits fill and stroke colour operators if the colour changed since the
    /// last drawing operation.
    fn sync_color(&mut self) {
        if let Some(color) = self.colors.take_change() {
            let (r, g, b) = color.unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.push("RG", vec![r.into(), g.into(), b.into()]);
        }
    }

    fn y(&self, y: f32) -> f32 {
        flip_y(y, self.geometry.height)
    }
}

impl RenderTarget for PdfPage {
    fn draw_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        origin: Offset,
        size: Size,
    ) -> Result<(), RenderError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        if let FontFamily::Custom(name) = &font.family {
            if !self.substituted.contains(name.as_ref()) {
                self.substituted.insert(name.to_string());
            }
        }
        self.sync_color();
        // The baseline sits on the bottom edge of the text box.
        let baseline = self.y(origin.y + size.height);
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(resource_name(font)), font.size.into()],
        );
        self.push("Td", vec![origin.x.into(), baseline.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), RenderError> {
        self.sync_color();
        let bottom = self.y(rect.bottom());
        self.push(
            "re",
            vec![
                rect.x.into(),
                bottom.into(),
                rect.width.into(),
                rect.height.into(),
            ],
        );
        self.push("f", vec![]);
        Ok(())
    }

    fn stroke_line(&mut self, from: Offset, to: Offset, thickness: f32) -> Result<(), RenderError> {
        self.sync_color();
        let (from_y, to_y) = (self.y(from.y), self.y(to.y));
        self.push("w", vec![thickness.into()]);
        self.push("m", vec![from.x.into(), from_y.into()]);
        self.push("l", vec![to.x.into(), to_y.into()]);
        self.push("S", vec![]);
        Ok(())
    }

    fn set_color(&mut self, color: Option<Color>) -> Option<Color> {
        self.colors.request(color)
    }

    fn restore_color(&mut self, previous: Option<Color>) {
        self.colors.restore(previous);
    }
}
