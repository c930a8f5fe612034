//! The style context: which font and colour content is set in.

use blockframe_traits::{MetricsError, TextMetrics};
use blockframe_types::{Color, FontFamily, FontSpec, FontStyle};

/// Font and colour in effect for a subtree. Copied with overrides when a
/// subtree needs different styling; never mutated once shared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quill {
    pub font: FontSpec,
    /// `None` renders in the target's default colour.
    pub color: Option<Color>,
}

impl Quill {
    pub fn new(font: FontSpec) -> Self {
        Self { font, color: None }
    }

    pub fn with_family(&self, family: FontFamily) -> Self {
        let mut quill = self.clone();
        quill.font.family = family;
        quill
    }

    pub fn with_style(&self, style: FontStyle) -> Self {
        let mut quill = self.clone();
        quill.font.style = style;
        quill
    }

    pub fn with_size(&self, size: f32) -> Self {
        let mut quill = self.clone();
        quill.font.size = size;
        quill
    }

    pub fn with_color(&self, color: Option<Color>) -> Self {
        let mut quill = self.clone();
        quill.color = color;
        quill
    }

    /// Same quill with bold switched on, keeping any italic.
    pub fn bold(&self) -> Self {
        self.with_style(FontStyle::from_flags(true, self.font.style.is_italic()))
    }

    /// Same quill with italic switched on, keeping any bold.
    pub fn italic(&self) -> Self {
        self.with_style(FontStyle::from_flags(self.font.style.is_bold(), true))
    }

    pub fn text_width(&self, metrics: &dyn TextMetrics, text: &str) -> Result<f32, MetricsError> {
        metrics.text_width(&self.font, text)
    }

    pub fn line_height(&self, metrics: &dyn TextMetrics) -> Result<f32, MetricsError> {
        metrics.line_height(&self.font)
    }
}

/// Single-entry cache for a value derived from a font. Last font wins.
#[derive(Debug, Clone)]
pub(crate) struct FontMemo<T> {
    entry: Option<(FontSpec, T)>,
}

impl<T> Default for FontMemo<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T: Copy> FontMemo<T> {
    pub(crate) fn get_or_try_insert<E>(
        &mut self,
        font: &FontSpec,
        compute: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        match &self.entry {
            Some((key, value)) if key == font => return Ok(*value),
            _ => {}
        }
        let value = compute()?;
        self.entry = Some((font.clone(), value));
        Ok(value)
    }
}
