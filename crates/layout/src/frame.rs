//! Containers: blocks that lay out the contents of their own pipe.

use crate::block::Overrides;
use crate::flow;
use crate::placement::{FillState, PlacedContent, Rewind};
use crate::quill::FontMemo;
use crate::{Block, Layout, LayoutEnv, LayoutError, Pipe, Placement, Quill};
use blockframe_traits::RenderTarget;
use blockframe_types::{BlockId, Offset};

/// How a frame arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Top to bottom, one child per line.
    Stack,
    /// Left to right on a single line.
    Row,
    /// Left to right, wrapping onto new lines, like words in a paragraph.
    Wrap,
}

/// Space left between horizontally adjacent children.
#[derive(Debug, Clone, PartialEq)]
pub enum HorizontalGap {
    Fixed(f32),
    /// The width of this text in the frame's font.
    Template(String),
}

impl Default for HorizontalGap {
    fn default() -> Self {
        HorizontalGap::Template(" ".to_string())
    }
}

impl HorizontalGap {
    pub(crate) fn resolve(
        &self,
        memo: &mut FontMemo<f32>,
        env: &LayoutEnv<'_>,
        quill: &Quill,
    ) -> Result<f32, LayoutError> {
        match self {
            HorizontalGap::Fixed(size) => Ok(*size),
            HorizontalGap::Template(text) => Ok(memo
                .get_or_try_insert(&quill.font, || quill.text_width(env.metrics, text))?),
        }
    }
}

pub struct Frame {
    id: BlockId,
    pipe: Pipe,
    flow: Flow,
    gap: HorizontalGap,
    gap_memo: FontMemo<f32>,
    overrides: Overrides,
    state: FillState,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("id", &self.id)
            .field("flow", &self.flow)
            .field("gap", &self.gap)
            .field("pipe", &self.pipe)
            .field("state", &self.state)
            .finish()
    }
}

impl Frame {
    pub fn new(flow: Flow) -> Self {
        let id = BlockId::next();
        Self::with_pipe(flow, Pipe::named(format!("pipe-{}", id)))
    }

    pub fn stack() -> Self {
        Self::new(Flow::Stack)
    }

    pub fn row() -> Self {
        Self::new(Flow::Row)
    }

    pub fn wrap() -> Self {
        Self::new(Flow::Wrap)
    }

    /// A frame reading from an existing pipe. Used by the page driver to put a
    /// fresh root frame over the document pipe on every page.
    pub fn with_pipe(flow: Flow, pipe: Pipe) -> Self {
        Self {
            id: BlockId::next(),
            pipe,
            flow,
            gap: HorizontalGap::default(),
            gap_memo: FontMemo::default(),
            overrides: Overrides::default(),
            state: FillState::NotStarted,
        }
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = HorizontalGap::Fixed(gap);
        self
    }

    pub fn with_gap_template(mut self, template: impl Into<String>) -> Self {
        self.gap = HorizontalGap::Template(template.into());
        self
    }

    /// Adjusts the quill this frame and its children are measured with.
    pub fn with_quill(mut self, f: impl Fn(&Quill) -> Quill + 'static) -> Self {
        self.overrides.set_quill(f);
        self
    }

    /// Adjusts the constraints this frame is measured against.
    pub fn with_layout(mut self, f: impl Fn(&Layout) -> Layout + 'static) -> Self {
        self.overrides.set_layout(f);
        self
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn write<B: Block + 'static>(&mut self, block: B) -> bool {
        self.pipe.write(block)
    }

    pub fn write_boxed(&mut self, block: Box<dyn Block>) -> bool {
        self.pipe.write_boxed(block)
    }

    pub fn pipe(&self) -> &Pipe {
        &self.pipe
    }

    pub fn pipe_mut(&mut self) -> &mut Pipe {
        &mut self.pipe
    }

    pub fn into_pipe(self) -> Pipe {
        self.pipe
    }
}

impl Block for Frame {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> &'static str {
        match self.flow {
            Flow::Stack => "Stack",
            Flow::Row => "Row",
            Flow::Wrap => "Wrap",
        }
    }

    fn measure(
        &mut self,
        env: &LayoutEnv<'_>,
        quill: &Quill,
        layout: &Layout,
    ) -> Result<Placement, LayoutError> {
        if self.state == FillState::Complete {
            return Err(LayoutError::contract(format!(
                "{} measured again after completing",
                self.log_name()
            )));
        }
        let quill = self.overrides.quill(quill);
        let layout = self.overrides.layout(layout);
        let rewind = Rewind {
            cursor: self.pipe.mark(),
            state: self.state,
        };
        log::debug!(
            "Entering {} with {:.2} x {:.2}",
            self.log_name(),
            layout.max_width,
            layout.max_height
        );

        let filled = match self.flow {
            Flow::Stack => flow::stack::fill(&mut self.pipe, env, &quill, &layout)?,
            Flow::Row => {
                let gap = self.gap.resolve(&mut self.gap_memo, env, &quill)?;
                flow::row::fill(&mut self.pipe, env, &quill, &layout, gap)?
            }
            Flow::Wrap => {
                let gap = self.gap.resolve(&mut self.gap_memo, env, &quill)?;
                flow::wrap::fill(&mut self.pipe, env, &quill, &layout, gap)?
            }
        };

        self.state = if self.pipe.peek().is_none() {
            FillState::Complete
        } else {
            FillState::Partial
        };
        log::debug!(
            "Leaving {} with {} children, {:.2} x {:.2}, {:?}",
            self.log_name(),
            filled.children.len(),
            filled.size.width,
            filled.size.height,
            self.state
        );
        Ok(Placement::group(
            self.id,
            filled.size,
            filled.children,
            Some(rewind),
        ))
    }

    fn is_fill_complete(&self) -> bool {
        self.pipe.peek().is_none()
    }

    fn revert_to_start(&mut self, placement: &Placement) {
        revert_group(&mut self.pipe, placement, &mut self.state);
    }

    fn render(
        &self,
        placement: &Placement,
        origin: Offset,
        target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError> {
        render_children(&self.pipe, placement, origin, target)
    }
}

/// Rolls a frame's pipe back to where it stood before `placement` was
/// measured. Children are reverted last-accepted first, so when one block
/// appears several times the earliest state wins.
pub(crate) fn revert_group(pipe: &mut Pipe, placement: &Placement, state: &mut FillState) {
    if let PlacedContent::Group { children, rewind } = placement.content() {
        for child in children.iter().rev() {
            flow::revert_child(pipe, child);
        }
        if let Some(rewind) = rewind {
            pipe.rewind(rewind.cursor);
            *state = rewind.state;
        }
    }
}

/// Renders every child placement of `placement`, looking the blocks up in
/// `pipe`. Anonymous groups recurse with the same pipe.
pub fn render_children(
    pipe: &Pipe,
    placement: &Placement,
    origin: Offset,
    target: &mut dyn RenderTarget,
) -> Result<(), LayoutError> {
    for child in placement.children() {
        let at = origin + child.position()?;
        match child.slot() {
            Some(slot) => {
                let block = pipe.block(slot).ok_or_else(|| {
                    LayoutError::contract(format!(
                        "{}: placement refers to missing slot {}",
                        pipe.name(),
                        slot
                    ))
                })?;
                block.render(child, at, target)?;
            }
            None => render_children(pipe, child, at, target)?,
        }
    }
    Ok(())
}
