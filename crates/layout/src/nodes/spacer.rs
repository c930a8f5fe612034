use crate::block::Overrides;
use crate::quill::FontMemo;
use crate::{Block, Layout, LayoutEnv, LayoutError, Placement, Quill};
use blockframe_traits::RenderTarget;
use blockframe_types::{BlockId, Offset, Size};

#[derive(Debug, Clone, PartialEq)]
enum SpacerKind {
    Width(f32),
    WidthOf(String),
    Height(f32),
    Lines(f32),
    FullWidth,
}

/// Invisible block that only takes up space.
#[derive(Debug)]
pub struct Spacer {
    id: BlockId,
    kind: SpacerKind,
    overrides: Overrides,
    memo: FontMemo<f32>,
}

impl Spacer {
    fn new(kind: SpacerKind) -> Self {
        Self {
            id: BlockId::next(),
            kind,
            overrides: Overrides::default(),
            memo: FontMemo::default(),
        }
    }

    /// A fixed horizontal space.
    pub fn width(width: f32) -> Self {
        Self::new(SpacerKind::Width(width))
    }

    /// Horizontal space as wide as `template` in the current font.
    pub fn width_of(template: impl Into<String>) -> Self {
        Self::new(SpacerKind::WidthOf(template.into()))
    }

    /// A fixed vertical space.
    pub fn height(height: f32) -> Self {
        Self::new(SpacerKind::Height(height))
    }

    /// Vertical space measured in lines of the current font.
    pub fn lines(multiple: f32) -> Self {
        Self::new(SpacerKind::Lines(multiple))
    }

    /// Takes all remaining width. In a wrap frame this forces a line break.
    pub fn full_width() -> Self {
        Self::new(SpacerKind::FullWidth)
    }

    /// Adjusts the quill that template and line spacers are measured in.
    pub fn with_quill(mut self, f: impl Fn(&Quill) -> Quill + 'static) -> Self {
        self.overrides.set_quill(f);
        self
    }

    pub fn with_layout(mut self, f: impl Fn(&Layout) -> Layout + 'static) -> Self {
        self.overrides.set_layout(f);
        self
    }
}

impl Block for Spacer {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "Spacer"
    }

    fn measure(
        &mut self,
        env: &LayoutEnv<'_>,
        quill: &Quill,
        layout: &Layout,
    ) -> Result<Placement, LayoutError> {
        let quill = self.overrides.quill(quill);
        let layout = self.overrides.layout(layout);
        let size = match &self.kind {
            SpacerKind::Width(width) => Size::new(*width, 0.0),
            SpacerKind::WidthOf(template) => {
                let width = self.memo.get_or_try_insert(&quill.font, || {
                    quill.text_width(env.metrics, template)
                })?;
                Size::new(width, 0.0)
            }
            SpacerKind::Height(height) => Size::new(0.0, *height),
            SpacerKind::Lines(multiple) => {
                let line = self
                    .memo
                    .get_or_try_insert(&quill.font, || quill.line_height(env.metrics))?;
                Size::new(0.0, line * multiple)
            }
            SpacerKind::FullWidth => Size::new(layout.max_width, 0.0),
        };
        Ok(Placement::leaf(self.id, size))
    }

    fn render(
        &self,
        _placement: &Placement,
        _origin: Offset,
        _target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError> {
        Ok(())
    }
}
