use super::{Filled, exceeds, reject};
use crate::{Justification, Layout, LayoutEnv, LayoutError, Pipe, Placement, Quill};
use blockframe_types::{Offset, Size};

/// Lays children out top to bottom until the height runs out.
pub(crate) fn fill(
    pipe: &mut Pipe,
    env: &LayoutEnv<'_>,
    quill: &Quill,
    layout: &Layout,
) -> Result<Filled, LayoutError> {
    let mut eaten = *layout;
    let mut accepted: Vec<Placement> = Vec::new();
    let mut widest = 0.0f32;

    while pipe.has_more() {
        let Some(slot) = pipe.read() else { break };
        let child = pipe.measure(slot, env, quill, &eaten)?;

        // The first child is kept even when it overflows, otherwise an
        // oversized block would be deferred forever.
        if layout.allow_splitting
            && !accepted.is_empty()
            && exceeds(child.height(), eaten.max_height)
        {
            log::debug!(
                "{} is {:.2} high with {:.2} left, deferring",
                pipe.describe(slot),
                child.height(),
                eaten.max_height
            );
            reject(pipe, &child)?;
            break;
        }

        eaten.reduce_height(child.height());
        widest = widest.max(child.width());
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

    let width = if layout.width_tight {
        widest
    } else {
        layout.max_width
    };
    let mut top = 0.0;
    for child in &mut accepted {
        let left = match layout.justification {
            Justification::Left | Justification::Full => 0.0,
            Justification::Right => width - child.width(),
            Justification::Centre => (width - child.width()) / 2.0,
        };
        child.set_offset(Offset::new(left, top));
        top += child.height();
    }

    Ok(Filled {
        children: accepted,
        size: Size::new(width, top),
    })
}
