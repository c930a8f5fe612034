use crate::{Block, FixedMetrics, Layout, LayoutEnv, LayoutError, Placement, Quill, RectBlock};
use blockframe_traits::RenderTarget;
use blockframe_types::{BlockId, Offset, Size};

/// Five points per character and twelve per line at the default 10pt quill.
pub static METRICS: FixedMetrics = FixedMetrics::new(0.5, 1.2);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn env() -> LayoutEnv<'static> {
    init_logging();
    LayoutEnv::new(&METRICS)
}

pub fn fixed(width: f32, height: f32) -> RectBlock {
    RectBlock::new(width, height)
}

pub fn boxed<B: Block + 'static>(block: B) -> Box<dyn Block> {
    Box::new(block)
}

/// Measures a block as a page root would, positioning it at the origin.
pub fn measure_root(block: &mut dyn Block, layout: &Layout) -> Result<Placement, LayoutError> {
    let mut placement = block.measure(&env(), &Quill::default(), layout)?;
    placement.set_offset(Offset::zero());
    Ok(placement)
}

pub fn offsets(placement: &Placement) -> Vec<(f32, f32)> {
    placement
        .children()
        .iter()
        .map(|child| {
            let offset = child.offset().unwrap_or_default();
            (offset.x, offset.y)
        })
        .collect()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

/// A leaf that always claims to have more to give.
#[derive(Debug)]
pub struct Endless {
    id: BlockId,
    size: Size,
}

impl Endless {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            id: BlockId::next(),
            size: Size::new(width, height),
        }
    }
}

impl Block for Endless {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "Endless"
    }

    fn measure(
        &mut self,
        _env: &LayoutEnv<'_>,
        _quill: &Quill,
        _layout: &Layout,
    ) -> Result<Placement, LayoutError> {
        Ok(Placement::leaf(self.id, self.size))
    }

    fn is_fill_complete(&self) -> bool {
        false
    }

    fn render(
        &self,
        _placement: &Placement,
        _origin: Offset,
        _target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError> {
        Ok(())
    }
}
