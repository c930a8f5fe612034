//! TextMetrics trait for abstracting font measurement.
//!
//! The layout engine only ever asks two questions about text: how wide a run
//! is and how tall one line is. Answering them is left to a provider so the
//! engine is not tied to any font technology.

use blockframe_types::FontSpec;
use thiserror::Error;

/// Error type for text measurement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Unknown font family: {0}")]
    UnknownFamily(String),

    #[error("Font data could not be parsed: {0}")]
    InvalidFont(String),

    #[error("Font has no usable metrics: {0}")]
    MissingMetrics(String),
}

/// Measures text for a given font.
///
/// Results must be pure for a given input within one document build: the
/// engine memoizes them and relies on repeated calls agreeing.
pub trait TextMetrics {
    /// Horizontal extent of `text` set in `font`, in points.
    fn text_width(&self, font: &FontSpec, text: &str) -> Result<f32, MetricsError>;

    /// Vertical extent of one line set in `font`, in points.
    fn line_height(&self, font: &FontSpec) -> Result<f32, MetricsError>;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn text_width(&self, font: &FontSpec, text: &str) -> Result<f32, MetricsError> {
        (**self).text_width(font, text)
    }

    fn line_height(&self, font: &FontSpec) -> Result<f32, MetricsError> {
        (**self).line_height(font)
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn text_width(&self, font: &FontSpec, text: &str) -> Result<f32, MetricsError> {
        (**self).text_width(font, text)
    }

    fn line_height(&self, font: &FontSpec) -> Result<f32, MetricsError> {
        (**self).line_height(font)
    }
}
