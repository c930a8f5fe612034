use super::{Filled, exceeds, reject, reject_batch};
use crate::{Justification, Layout, LayoutEnv, LayoutError, Pipe, Placement, Quill};
use blockframe_types::{Offset, Size};

/// Children accepted onto one line, not yet positioned.
struct Line {
    children: Vec<Placement>,
    /// Child widths plus the unstretched gaps between them.
    width: f32,
    height: f32,
    top: f32,
    /// Set when the line ended on a child that still has content to give.
    ends_fill: bool,
    last: bool,
}

/// Lays children out in reading order: left to right, wrapping onto a new line
/// when the width runs out, until the height runs out.
///
/// Lines are only positioned once all of them are known, because the last
/// line of a fully justified block is set ragged.
pub(crate) fn fill(
    pipe: &mut Pipe,
    env: &LayoutEnv<'_>,
    quill: &Quill,
    layout: &Layout,
    gap: f32,
) -> Result<Filled, LayoutError> {
    let mut eaten = *layout;
    let mut lines: Vec<Line> = Vec::new();
    let mut top = 0.0f32;

    while pipe.has_more() {
        let first_line = lines.is_empty();
        let Some(mut line) = fill_line(pipe, env, quill, &mut eaten, gap, first_line)? else {
            break;
        };
        eaten.max_width = layout.max_width;
        eaten.reduce_height(line.height);
        line.top = top;
        top += line.height;
        let ends_fill = line.ends_fill;
        lines.push(line);
        if ends_fill {
            break;
        }
    }
    if !pipe.has_more() {
        if let Some(line) = lines.last_mut() {
            line.last = true;
        }
    }

    let width = if layout.width_tight {
        lines.iter().map(|line| line.width).fold(0.0, f32::max)
    } else {
        layout.max_width
    };
    let height = if layout.height_tight {
        top
    } else {
        layout.max_height
    };

    let drop = layout.alignment.drop_factor();
    let mut children = Vec::new();
    for line in lines {
        let spare = width - line.width;
        let count = line.children.len();
        let mut line_gap = gap;
        if layout.justification == Justification::Full && !line.last && count > 1 {
            line_gap += spare / (count - 1) as f32;
        }
        let mut left = match layout.justification {
            Justification::Left | Justification::Full => 0.0,
            Justification::Centre => spare / 2.0,
            Justification::Right => spare,
        };
        for mut child in line.children {
            let child_top = line.top + (line.height - child.height()) * drop;
            child.set_offset(Offset::new(left, child_top));
            left += child.width() + line_gap;
            children.push(child);
        }
    }

    Ok(Filled {
        children,
        size: Size::new(width, height),
    })
}

/// Fills one line. Returns `None` when the line would not fit in the remaining
/// height, in which case everything it read has already been given back.
fn fill_line(
    pipe: &mut Pipe,
    env: &LayoutEnv<'_>,
    quill: &Quill,
    eaten: &mut Layout,
    gap: f32,
    first_line: bool,
) -> Result<Option<Line>, LayoutError> {
    let mut line = Line {
        children: Vec::new(),
        width: 0.0,
        height: 0.0,
        top: 0.0,
        ends_fill: false,
        last: false,
    };

    while pipe.has_more() {
        let Some(slot) = pipe.read() else { break };
        let gap_before = if line.children.is_empty() { 0.0 } else { gap };
        let available = (eaten.max_width - gap_before).max(0.0);
        let child = pipe.measure(slot, env, quill, &eaten.with_max_width(available))?;
        let complete = pipe.is_complete(slot);

        // Too wide, or needing more room than this line can give: start the
        // next line with it.
        if !line.children.is_empty() && (exceeds(child.width(), available) || !complete) {
            reject(pipe, &child)?;
            break;
        }

        if eaten.allow_splitting && exceeds(child.height(), eaten.max_height) {
            if first_line && line.children.is_empty() {
                log::debug!(
                    "{} overflows the remaining height but opens the frame, keeping it",
                    pipe.describe(slot)
                );
            } else if first_line {
                reject(pipe, &child)?;
                break;
            } else {
                log::debug!(
                    "Line rejected, {} children reverted",
                    line.children.len() + 1
                );
                line.children.push(child);
                reject_batch(pipe, &line.children)?;
                return Ok(None);
            }
        }

        if !complete {
            if !eaten.allow_splitting {
                return Err(LayoutError::contract(format!(
                    "{} could not be measured in full and splitting is disallowed",
                    pipe.describe(slot)
                )));
            }
            line.ends_fill = true;
        }

        line.height = line.height.max(child.height());
        eaten.reduce_width(gap_before + child.width());
        line.width += gap_before + child.width();
        log::trace!(
            "Accepted {} ({:.2} x {:.2})",
            pipe.describe(slot),
            child.width(),
            child.height()
        );
        line.children.push(child);
        if line.ends_fill {
            break;
        }
    }

    Ok(Some(line))
}
