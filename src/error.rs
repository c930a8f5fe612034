use blockframe_layout::LayoutError;
use blockframe_traits::RenderError;
use thiserror::Error;

/// Everything that can go wrong between writing content and holding a PDF.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),
}
