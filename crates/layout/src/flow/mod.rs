//! The three flow algorithms a frame can use, plus the shared accept/reject
//! helpers they are built from.

use crate::{LayoutError, Pipe, Placement};
use blockframe_types::Size;

pub(crate) mod row;
pub(crate) mod stack;
pub(crate) mod wrap;

#[cfg(test)]
mod stack_test;

/// Tolerance for floating point noise when comparing an extent to the space
/// left for it.
const EPSILON: f32 = 0.01;

pub(crate) fn exceeds(extent: f32, available: f32) -> bool {
    extent > available + EPSILON
}

/// What one fill pass accepted, already positioned relative to the frame.
#[derive(Debug)]
pub(crate) struct Filled {
    pub children: Vec<Placement>,
    pub size: Size,
}

/// Restores the block behind `placement` to its state before it was measured.
pub(crate) fn revert_child(pipe: &mut Pipe, placement: &Placement) {
    match placement.slot() {
        Some(slot) => {
            if let Some(block) = pipe.block_mut(slot) {
                block.revert_to_start(placement);
            }
        }
        None => {
            for child in placement.children().iter().rev() {
                revert_child(pipe, child);
            }
        }
    }
}

/// Gives a single measured child back to the pipe.
pub(crate) fn reject(pipe: &mut Pipe, placement: &Placement) -> Result<(), LayoutError> {
    revert_child(pipe, placement);
    match placement.slot() {
        Some(slot) => pipe.revert_to(slot),
        None => Ok(()),
    }
}

/// Gives a run of measured children back to the pipe as one unit, reverting
/// them last-first and leaving the pipe on the first.
pub(crate) fn reject_batch(pipe: &mut Pipe, batch: &[Placement]) -> Result<(), LayoutError> {
    for placement in batch.iter().rev() {
        revert_child(pipe, placement);
    }
    match batch.first().and_then(Placement::slot) {
        Some(slot) => pipe.revert_to(slot),
        None => Ok(()),
    }
}
