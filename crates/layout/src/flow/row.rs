use super::{Filled, exceeds, reject};
use crate::{Layout, LayoutEnv, LayoutError, Pipe, Placement, Quill};
use blockframe_types::{Offset, Size};

/// Lays children out left to right on one line until the width runs out.
///
/// Unless the width is tight, spare width is shared out between the gaps so
/// the last child ends on the right edge.
pub(crate) fn fill(
    pipe: &mut Pipe,
    env: &LayoutEnv<'_>,
    quill: &Quill,
    layout: &Layout,
    gap: f32,
) -> Result<Filled, LayoutError> {
    let mut eaten = *layout;
    let mut accepted: Vec<Placement> = Vec::new();
    let mut used = 0.0f32;
    let mut tallest = 0.0f32;

    while pipe.has_more() {
        let Some(slot) = pipe.read() else { break };
        let gap_before = if accepted.is_empty() { 0.0 } else { gap };
        let available = (eaten.max_width - gap_before).max(0.0);
        let child = pipe.measure(slot, env, quill, &eaten.with_max_width(available))?;

        if layout.allow_splitting && !accepted.is_empty() && exceeds(child.width(), available) {
            log::debug!(
                "{} is {:.2} wide with {:.2} left, deferring",
                pipe.describe(slot),
                child.width(),
                available
            );
            reject(pipe, &child)?;
            break;
        }

        eaten.reduce_width(gap_before + child.width());
        used += gap_before + child.width();
        tallest = tallest.max(child.height());
        let complete = pipe.is_complete(slot);
        log::trace!(
            "Accepted {} ({:.2} x {:.2})",
            pipe.describe(slot),
            child.width(),
            child.height()
        );
        accepted.push(child);
        if !complete {
            break;
        }
    }

    let count = accepted.len();
    let mut gap = gap;
    if !layout.width_tight && count > 1 {
        gap += (layout.max_width - used) / (count - 1) as f32;
    }
    let height = if layout.height_tight {
        tallest
    } else {
        layout.max_height
    };
    let drop = layout.alignment.drop_factor();

    let mut left = 0.0;
    for (index, child) in accepted.iter_mut().enumerate() {
        if index > 0 {
            left += gap;
        }
        let top = (tallest - child.height()) * drop;
        child.set_offset(Offset::new(left, top));
        left += child.width();
    }

    Ok(Filled {
        children: accepted,
        size: Size::new(left, height),
    })
}
