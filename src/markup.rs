//! Plain text to blocks, for the command line tool.
//!
//! Paragraphs are separated by blank lines and become wrap frames with one
//! text block per word. A paragraph starting with `# ` is a heading: bold,
//! larger, and set ragged.

use blockframe_layout::{Block, Frame, Justification, Quill, Spacer, TextBlock};

const HEADING_SCALE: f32 = 1.4;

pub fn paragraph(text: &str) -> Frame {
    let mut frame = Frame::wrap();
    for word in text.split_whitespace() {
        frame.write(TextBlock::new(word));
    }
    frame
}

pub fn heading(text: &str) -> Frame {
    let mut frame = Frame::wrap()
        .with_quill(|q: &Quill| q.with_size(q.font.size * HEADING_SCALE).bold())
        .with_layout(|l| l.with_justification(Justification::Left));
    for word in text.split_whitespace() {
        frame.write(TextBlock::new(word));
    }
    frame
}

/// Splits `input` into headings and paragraphs, each followed by half a line
/// of space.
pub fn blocks_from_text(input: &str) -> Vec<Box<dyn Block>> {
    let mut blocks: Vec<Box<dyn Block>> = Vec::new();
    let mut current = String::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut blocks);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    flush(&mut current, &mut blocks);
    log::debug!("Parsed {} blocks from text input", blocks.len());
    blocks
}

fn flush(current: &mut String, blocks: &mut Vec<Box<dyn Block>>) {
    let text = current.trim();
    if !text.is_empty() {
        match text.strip_prefix("# ") {
            Some(title) => blocks.push(Box::new(heading(title))),
            None => blocks.push(Box::new(paragraph(text))),
        }
        blocks.push(Box::new(Spacer::lines(0.5)));
    }
    current.clear();
}
