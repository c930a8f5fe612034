//! The measurement contract every piece of content implements.

use crate::{Layout, LayoutError, Placement, Quill};
use blockframe_traits::{RenderTarget, TextMetrics};
use blockframe_types::{BlockId, Offset};
use std::fmt;

/// Read-only environment shared across one measurement pass.
#[derive(Clone, Copy)]
pub struct LayoutEnv<'a> {
    pub metrics: &'a dyn TextMetrics,
}

impl<'a> LayoutEnv<'a> {
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self { metrics }
    }
}

/// A unit of content.
///
/// Layout is two-pass. `measure` decides how much of the block fits the given
/// constraints and returns a [`Placement`] describing the resulting box; the
/// parent positions that placement and later hands it back to `render`.
/// A container that could not fit everything reports `is_fill_complete() ==
/// false`, and the next `measure` continues where the previous one stopped.
pub trait Block {
    fn id(&self) -> BlockId;

    /// Short kind name used in log messages.
    fn kind(&self) -> &'static str;

    fn log_name(&self) -> String {
        format!("{}-{}", self.kind(), self.id())
    }

    fn measure(
        &mut self,
        env: &LayoutEnv<'_>,
        quill: &Quill,
        layout: &Layout,
    ) -> Result<Placement, LayoutError>;

    /// False while the most recent `measure` left content for a later call.
    fn is_fill_complete(&self) -> bool {
        true
    }

    /// Undoes the `measure` call that produced `placement`, so the next
    /// `measure` starts from the same point again. Leaves have nothing to undo.
    fn revert_to_start(&mut self, _placement: &Placement) {}

    /// Paints `placement` with its top-left corner at `origin`, in page
    /// coordinates.
    fn render(
        &self,
        placement: &Placement,
        origin: Offset,
        target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError>;
}

pub type QuillOverride = Box<dyn Fn(&Quill) -> Quill>;
pub type LayoutOverride = Box<dyn Fn(&Layout) -> Layout>;

/// Optional per-block adjustments applied to the contexts a block receives
/// before it lays itself out.
#[derive(Default)]
pub struct Overrides {
    quill: Option<QuillOverride>,
    layout: Option<LayoutOverride>,
}

impl Overrides {
    pub fn set_quill(&mut self, f: impl Fn(&Quill) -> Quill + 'static) {
        self.quill = Some(Box::new(f));
    }

    pub fn set_layout(&mut self, f: impl Fn(&Layout) -> Layout + 'static) {
        self.layout = Some(Box::new(f));
    }

    pub fn quill(&self, received: &Quill) -> Quill {
        match &self.quill {
            Some(f) => f(received),
            None => received.clone(),
        }
    }

    pub fn layout(&self, received: &Layout) -> Layout {
        match &self.layout {
            Some(f) => f(received),
            None => *received,
        }
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("quill", &self.quill.is_some())
            .field("layout", &self.layout.is_some())
            .finish()
    }
}
