use crate::block::Overrides;
use crate::quill::FontMemo;
use crate::{Block, Layout, LayoutEnv, LayoutError, Placement, Quill};
use blockframe_traits::{MetricsError, RenderTarget};
use blockframe_types::{BlockId, Offset, Size};

/// A single unbreakable run of text, one line high.
///
/// Paragraphs are built by writing one `TextBlock` per word into a wrap frame.
#[derive(Debug)]
pub struct TextBlock {
    id: BlockId,
    text: String,
    overrides: Overrides,
    quill: Quill,
    measured: FontMemo<Size>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: BlockId::next(),
            text: text.into(),
            overrides: Overrides::default(),
            quill: Quill::default(),
            measured: FontMemo::default(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text).with_quill(Quill::bold)
    }

    pub fn with_quill(mut self, f: impl Fn(&Quill) -> Quill + 'static) -> Self {
        self.overrides.set_quill(f);
        self
    }

    /// Text never wraps; the adjusted constraints only decide whether an
    /// overflow is reported.
    pub fn with_layout(mut self, f: impl Fn(&Layout) -> Layout + 'static) -> Self {
        self.overrides.set_layout(f);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Block for TextBlock {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "Text"
    }

    fn log_name(&self) -> String {
        let excerpt: String = self.text.chars().take(16).collect();
        format!("Text-{} \"{}\"", self.id, excerpt)
    }

    fn measure(
        &mut self,
        env: &LayoutEnv<'_>,
        quill: &Quill,
        layout: &Layout,
    ) -> Result<Placement, LayoutError> {
        let quill = self.overrides.quill(quill);
        let layout = self.overrides.layout(layout);
        let text = &self.text;
        let size = self.measured.get_or_try_insert(&quill.font, || {
            Ok::<_, MetricsError>(Size::new(
                quill.text_width(env.metrics, text)?,
                quill.line_height(env.metrics)?,
            ))
        })?;
        if size.width > layout.max_width {
            log::trace!(
                "{} is {:.2} wide with {:.2} available",
                self.log_name(),
                size.width,
                layout.max_width
            );
        }
        self.quill = quill;
        Ok(Placement::leaf(self.id, size))
    }

    fn render(
        &self,
        placement: &Placement,
        origin: Offset,
        target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError> {
        let previous = target.set_color(self.quill.color);
        let drawn = target.draw_text(&self.text, &self.quill.font, origin, placement.size());
        target.restore_color(previous);
        Ok(drawn?)
    }
}
