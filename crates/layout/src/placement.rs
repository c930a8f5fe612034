//! Measured boxes produced by `Block::measure`.

use crate::LayoutError;
use crate::nodes::table::GridExtents;
use crate::pipe::Cursor;
use blockframe_types::{BlockId, Offset, Size};

/// Per-frame fill progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FillState {
    #[default]
    NotStarted,
    Partial,
    Complete,
}

/// Everything needed to put a frame back the way it was before a measure call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rewind {
    pub(crate) cursor: Cursor,
    pub(crate) state: FillState,
}

#[derive(Debug, Clone)]
pub enum PlacedContent {
    Leaf,
    /// Children taken from the owning frame's pipe. A child without a slot is
    /// an anonymous group whose own children come from the same pipe.
    Group {
        children: Vec<Placement>,
        rewind: Option<Rewind>,
    },
    /// Table cells in row-major order, slot = cell index.
    Grid {
        cells: Vec<Placement>,
        extents: GridExtents,
    },
}

/// The result of one `measure` call: a size, and once the parent has decided,
/// an offset from the parent's origin. Immutable once positioned.
#[derive(Debug, Clone)]
pub struct Placement {
    block: BlockId,
    slot: Option<usize>,
    size: Size,
    offset: Option<Offset>,
    content: PlacedContent,
}

impl Placement {
    pub fn leaf(block: BlockId, size: Size) -> Self {
        Self::with_content(block, size, PlacedContent::Leaf)
    }

    pub fn group(
        block: BlockId,
        size: Size,
        children: Vec<Placement>,
        rewind: Option<Rewind>,
    ) -> Self {
        Self::with_content(block, size, PlacedContent::Group { children, rewind })
    }

    pub fn grid(block: BlockId, cells: Vec<Placement>, extents: GridExtents) -> Self {
        let size = Size::new(extents.width, extents.height);
        Self::with_content(block, size, PlacedContent::Grid { cells, extents })
    }

    fn with_content(block: BlockId, size: Size, content: PlacedContent) -> Self {
        Self {
            block,
            slot: None,
            size,
            offset: None,
            content,
        }
    }

    pub fn block(&self) -> BlockId {
        self.block
    }

    /// Index of the block inside its container's storage.
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub(crate) fn with_slot(mut self, slot: usize) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// Positions the placement relative to its parent. A second call is
    /// ignored with a warning.
    pub fn set_offset(&mut self, offset: Offset) {
        match self.offset {
            Some(existing) => log::warn!(
                "Placement of block {} already positioned at {:?}, ignoring {:?}",
                self.block,
                existing,
                offset
            ),
            None => self.offset = Some(offset),
        }
    }

    /// The offset, or a contract violation if the parent never positioned it.
    pub fn position(&self) -> Result<Offset, LayoutError> {
        self.offset.ok_or_else(|| {
            LayoutError::contract(format!(
                "placement of block {} rendered before being positioned",
                self.block
            ))
        })
    }

    pub fn content(&self) -> &PlacedContent {
        &self.content
    }

    /// Child placements of a frame or table; empty for leaves.
    pub fn children(&self) -> &[Placement] {
        match &self.content {
            PlacedContent::Leaf => &[],
            PlacedContent::Group { children, .. } => children,
            PlacedContent::Grid { cells, .. } => cells,
        }
    }
}
