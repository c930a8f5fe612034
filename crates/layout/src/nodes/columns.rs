use crate::block::Overrides;
use crate::flow;
use crate::frame::{HorizontalGap, render_children, revert_group};
use crate::placement::{FillState, Rewind};
use crate::quill::FontMemo;
use crate::{Block, Layout, LayoutEnv, LayoutError, PageFrame, Pipe, Placement, Quill};
use blockframe_traits::RenderTarget;
use blockframe_types::{BlockId, Offset, Size};

/// Newspaper-style columns over a single pipe: content runs down the first
/// column, then continues at the top of the next.
///
/// Mostly used as a page frame, in place of the default single stack.
#[derive(Debug)]
pub struct ColumnFrame {
    id: BlockId,
    pipe: Pipe,
    columns: usize,
    gap: HorizontalGap,
    gap_memo: FontMemo<f32>,
    overrides: Overrides,
    state: FillState,
}

impl ColumnFrame {
    pub fn new(pipe: Pipe, columns: usize) -> Self {
        Self {
            id: BlockId::next(),
            pipe,
            columns: columns.max(1),
            gap: HorizontalGap::Template("WWWWWWWW".to_string()),
            gap_memo: FontMemo::default(),
            overrides: Overrides::default(),
            state: FillState::NotStarted,
        }
    }

    pub fn two_columns(pipe: Pipe) -> Self {
        Self::new(pipe, 2)
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = HorizontalGap::Fixed(gap);
        self
    }

    pub fn with_quill(mut self, f: impl Fn(&Quill) -> Quill + 'static) -> Self {
        self.overrides.set_quill(f);
        self
    }

    pub fn with_layout(mut self, f: impl Fn(&Layout) -> Layout + 'static) -> Self {
        self.overrides.set_layout(f);
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Block for ColumnFrame {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "Columns"
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
        let quill = &self.overrides.quill(quill);
        let layout = &self.overrides.layout(layout);
        let rewind = Rewind {
            cursor: self.pipe.mark(),
            state: self.state,
        };
        let gap = self.gap.resolve(&mut self.gap_memo, env, quill)?;
        let gaps = gap * (self.columns - 1) as f32;
        let column_width = ((layout.max_width - gaps) / self.columns as f32).max(0.0);
        let column_layout = layout.with_max_width(column_width);

        let mut columns = Vec::with_capacity(self.columns);
        let mut tallest = 0.0f32;
        for index in 0..self.columns {
            if !self.pipe.has_more() {
                break;
            }
            let filled = flow::stack::fill(&mut self.pipe, env, quill, &column_layout)?;
            tallest = tallest.max(filled.size.height);
            let mut column = Placement::group(self.id, filled.size, filled.children, None);
            column.set_offset(Offset::new(index as f32 * (column_width + gap), 0.0));
            columns.push(column);
        }

        self.state = if self.pipe.peek().is_none() {
            FillState::Complete
        } else {
            FillState::Partial
        };
        log::debug!(
            "{} filled {} of {} columns",
            self.log_name(),
            columns.len(),
            self.columns
        );
        let height = if layout.height_tight {
            tallest
        } else {
            layout.max_height
        };
        Ok(Placement::group(
            self.id,
            Size::new(layout.max_width, height),
            columns,
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

impl PageFrame for ColumnFrame {
    fn release(self: Box<Self>) -> Pipe {
        self.pipe
    }
}
