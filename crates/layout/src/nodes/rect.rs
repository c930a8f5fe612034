use crate::{Block, Layout, LayoutEnv, LayoutError, Placement, Quill};
use blockframe_traits::RenderTarget;
use blockframe_types::{BlockId, Color, Offset, Rect, Size};

/// A fixed-size box, optionally filled, outlined or crossed through.
///
/// Useful for rules, placeholders and for showing where a box landed while
/// tuning a layout.
#[derive(Debug, Clone)]
pub struct RectBlock {
    id: BlockId,
    size: Size,
    fill: Option<Color>,
    border: Option<(Color, f32)>,
    cross: Option<Color>,
}

impl RectBlock {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            id: BlockId::next(),
            size: Size::new(width, height),
            fill: None,
            border: None,
            cross: None,
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_border(mut self, color: Color, thickness: f32) -> Self {
        self.border = Some((color, thickness));
        self
    }

    /// Draws both diagonals.
    pub fn with_cross(mut self, color: Color) -> Self {
        self.cross = Some(color);
        self
    }
}

impl Block for RectBlock {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "Rect"
    }

    fn measure(
        &mut self,
        _env: &LayoutEnv<'_>,
        _quill: &Quill,
        _layout: &Layout,
    ) -> Result<Placement, LayoutError> {
        Ok(Placement::leaf(self.id, self.size))
    }

    fn render(
        &self,
        placement: &Placement,
        origin: Offset,
        target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError> {
        let size = placement.size();
        let bounds = Rect::new(origin.x, origin.y, size.width, size.height);

        if let Some(fill) = self.fill {
            let previous = target.set_color(Some(fill));
            target.fill_rect(bounds)?;
            target.restore_color(previous);
        }
        if let Some((color, thickness)) = self.border {
            let previous = target.set_color(Some(color));
            let corners = [
                Offset::new(bounds.x, bounds.y),
                Offset::new(bounds.right(), bounds.y),
                Offset::new(bounds.right(), bounds.bottom()),
                Offset::new(bounds.x, bounds.bottom()),
            ];
            for (index, from) in corners.iter().enumerate() {
                target.stroke_line(*from, corners[(index + 1) % corners.len()], thickness)?;
            }
            target.restore_color(previous);
        }
        if let Some(color) = self.cross {
            let previous = target.set_color(Some(color));
            target.stroke_line(
                Offset::new(bounds.x, bounds.y),
                Offset::new(bounds.right(), bounds.bottom()),
                0.5,
            )?;
            target.stroke_line(
                Offset::new(bounds.right(), bounds.y),
                Offset::new(bounds.x, bounds.bottom()),
                0.5,
            )?;
            target.restore_color(previous);
        }
        Ok(())
    }
}
