use blockframe_traits::{MetricsError, RenderError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Contract violation: {0}")]
    ContractViolation(String),
    #[error("Text measurement failed: {0}")]
    Metrics(#[from] MetricsError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("Page limit exceeded: content did not finish within {0} pages.")]
    PageLimitExceeded(usize),
}

impl LayoutError {
    pub(crate) fn contract(message: impl Into<String>) -> Self {
        LayoutError::ContractViolation(message.into())
    }
}

pub mod block;
pub mod config;
pub mod constraints;
pub mod driver;
pub mod fonts;
pub mod frame;
pub mod nodes;
pub mod pipe;
pub mod placement;
pub mod quill;

mod flow;

pub use self::block::{Block, LayoutEnv};
pub use self::config::LayoutConfig;
pub use self::constraints::{Alignment, Justification, Layout};
pub use self::driver::{Overlay, PageDriver, PageFrame, PageSetup, PageTemplate, StandardPages};
pub use self::fonts::{ApproximateMetrics, FixedMetrics, TrueTypeMetrics};
pub use self::frame::{Flow, Frame, HorizontalGap, render_children};
pub use self::nodes::{
    ColumnFrame, RectBlock, Spacer, TableBlock, TableStyle, TextBlock,
    table::{BorderKind, BorderSegment, BorderSide, GridExtents, PlainTable},
};
pub use self::pipe::Pipe;
pub use self::placement::{PlacedContent, Placement};
pub use self::quill::Quill;

pub use blockframe_types::{BlockId, Color, FontFamily, FontSpec, FontStyle, Offset, Rect, Size};

#[cfg(test)]
mod driver_test;
#[cfg(test)]
mod test_utils;
