pub mod metrics;
pub mod render;

pub use metrics::{MetricsError, TextMetrics};
pub use render::{PageSink, RenderError, RenderTarget};
