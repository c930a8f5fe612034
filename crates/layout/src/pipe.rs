//! The rewindable stream of blocks a frame consumes.
//!
//! A pipe is append-only: the writer side pushes blocks onto the end until the
//! stream is closed, the reader side walks them in order. The reader can be
//! moved back to any block it has already handed out, which is how frames give
//! back content that did not fit.
//!
//! The cursor after a block is resolved lazily. While the last block read still
//! has unconsumed content of its own (a partially filled frame), the next read
//! returns that same block again; otherwise it moves on to the block written
//! after it.

use crate::{Block, Layout, LayoutEnv, LayoutError, Placement, Quill};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PIPE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    /// The next read returns this slot.
    At(usize),
    /// The last read returned this slot; resolved when the next read happens.
    After(usize),
}

pub struct Pipe {
    id: u64,
    name: String,
    blocks: Vec<Box<dyn Block>>,
    cursor: Cursor,
    furthest_read: Option<usize>,
    closed: bool,
}

impl Default for Pipe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe")
            .field("name", &self.name)
            .field("len", &self.blocks.len())
            .field("cursor", &self.cursor)
            .field("closed", &self.closed)
            .finish()
    }
}

impl Pipe {
    pub fn new() -> Self {
        Self::named("pipe")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: NEXT_PIPE_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            blocks: Vec::new(),
            cursor: Cursor::At(0),
            furthest_read: None,
            closed: false,
        }
    }

    /// Identity of this pipe, unique within the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // --- Writer side ---

    /// Appends a block. Returns `false`, dropping the block, if the pipe has
    /// already been closed.
    pub fn write<B: Block + 'static>(&mut self, block: B) -> bool {
        self.write_boxed(Box::new(block))
    }

    pub fn write_boxed(&mut self, block: Box<dyn Block>) -> bool {
        if self.closed {
            log::warn!(
                "{}: write of {} after the pipe was closed, block dropped",
                self.name,
                block.log_name()
            );
            return false;
        }
        log::trace!("{}: wrote {}", self.name, block.log_name());
        self.blocks.push(block);
        true
    }

    pub fn close(&mut self) {
        if !self.closed {
            log::trace!("{}: closed", self.name);
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // --- Reader side ---

    /// Slot the next `read` would return, without side effects.
    pub fn peek(&self) -> Option<usize> {
        let next = match self.cursor {
            Cursor::At(slot) => slot,
            Cursor::After(slot) => match self.blocks.get(slot) {
                Some(block) if !block.is_fill_complete() => slot,
                _ => slot + 1,
            },
        };
        (next < self.blocks.len()).then_some(next)
    }

    /// Whether another block is available. Observing the end closes the writer.
    pub fn has_more(&mut self) -> bool {
        let more = self.peek().is_some();
        if !more {
            self.close();
        }
        more
    }

    /// Consumes the next block and returns its slot.
    pub fn read(&mut self) -> Option<usize> {
        let Some(slot) = self.peek() else {
            self.close();
            return None;
        };
        self.cursor = Cursor::After(slot);
        self.furthest_read = Some(self.furthest_read.map_or(slot, |f| f.max(slot)));
        Some(slot)
    }

    /// Makes a previously read block the next one returned.
    pub fn revert_to(&mut self, slot: usize) -> Result<(), LayoutError> {
        match self.furthest_read {
            Some(furthest) if slot <= furthest => {
                log::trace!("{}: reverted to slot {}", self.name, slot);
                self.cursor = Cursor::At(slot);
                Ok(())
            }
            _ => Err(LayoutError::contract(format!(
                "{}: cannot revert to slot {} which was never read",
                self.name, slot
            ))),
        }
    }

    pub(crate) fn mark(&self) -> Cursor {
        self.cursor
    }

    pub(crate) fn rewind(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    // --- Block access ---

    pub fn block(&self, slot: usize) -> Option<&dyn Block> {
        self.blocks.get(slot).map(|block| block.as_ref())
    }

    pub fn block_mut(&mut self, slot: usize) -> Option<&mut (dyn Block + 'static)> {
        self.blocks.get_mut(slot).map(|block| block.as_mut())
    }

    pub(crate) fn is_complete(&self, slot: usize) -> bool {
        self.blocks
            .get(slot)
            .is_none_or(|block| block.is_fill_complete())
    }

    pub(crate) fn describe(&self, slot: usize) -> String {
        self.blocks
            .get(slot)
            .map_or_else(|| format!("<slot {}>", slot), |block| block.log_name())
    }

    /// Measures the block in `slot` and tags the placement with the slot.
    pub(crate) fn measure(
        &mut self,
        slot: usize,
        env: &LayoutEnv<'_>,
        quill: &Quill,
        layout: &Layout,
    ) -> Result<Placement, LayoutError> {
        let name = &self.name;
        let block = self.blocks.get_mut(slot).ok_or_else(|| {
            LayoutError::contract(format!("{}: no block in slot {}", name, slot))
        })?;
        Ok(block.measure(env, quill, layout)?.with_slot(slot))
    }
}
