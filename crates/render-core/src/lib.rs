//! Core rendering abstractions shared by render targets.
//!
//! - `ColorState`: requested-versus-emitted colour bookkeeping, so backends
//!   only emit colour changes that matter
//! - `RecordingCanvas` / `RecordingSink`: a display-list target that keeps
//!   every drawing operation, used for tests and for inspecting layouts

mod color;
mod recording;
pub mod utils;

pub use color::ColorState;
pub use recording::{DrawOp, RecordedPage, RecordingCanvas, RecordingSink};
