//! The constraint context threaded down the block tree during measurement.

/// Horizontal placement of content that does not fill its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    Left,
    Right,
    Centre,
    /// Stretch gaps so content reaches both edges. Falls back to left-aligned
    /// where stretching does not apply.
    #[default]
    Full,
}

impl Justification {
    /// Offset of content inside a box with `slack` spare width when every
    /// mode other than LEFT and RIGHT centres.
    pub fn centring_offset(self, slack: f32) -> f32 {
        match self {
            Justification::Left => 0.0,
            Justification::Right => slack,
            Justification::Centre | Justification::Full => slack / 2.0,
        }
    }
}

/// Vertical placement of content that does not fill its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Top,
    Centre,
    #[default]
    Bottom,
}

impl Alignment {
    /// Fraction of the spare height placed above the content.
    pub fn drop_factor(self) -> f32 {
        match self {
            Alignment::Top => 0.0,
            Alignment::Centre => 0.5,
            Alignment::Bottom => 1.0,
        }
    }
}

/// Space available to a block plus the rules for how it should use it.
///
/// Copied and narrowed on the way down the tree. The only in-place mutation is
/// on a frame's private working copy ("eaten" constraints) as children consume
/// space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub max_width: f32,
    pub max_height: f32,
    /// Shrink the width to the content instead of expanding to `max_width`.
    pub width_tight: bool,
    /// Shrink the height to the content instead of expanding to `max_height`.
    pub height_tight: bool,
    /// Allow a container to stop early and continue in a later placement.
    pub allow_splitting: bool,
    pub justification: Justification,
    pub alignment: Alignment,
}

impl Layout {
    pub fn new(max_width: f32, max_height: f32) -> Self {
        Self {
            max_width,
            max_height,
            width_tight: false,
            height_tight: true,
            allow_splitting: true,
            justification: Justification::default(),
            alignment: Alignment::default(),
        }
    }

    pub fn with_size(mut self, max_width: Option<f32>, max_height: Option<f32>) -> Self {
        if let Some(width) = max_width {
            self.max_width = width;
        }
        if let Some(height) = max_height {
            self.max_height = height;
        }
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_width_tight(mut self, tight: bool) -> Self {
        self.width_tight = tight;
        self
    }

    pub fn with_height_tight(mut self, tight: bool) -> Self {
        self.height_tight = tight;
        self
    }

    pub fn with_splitting(mut self, allow: bool) -> Self {
        self.allow_splitting = allow;
        self
    }

    pub fn with_justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Consumes `by` points of width, clamping at zero.
    pub fn reduce_width(&mut self, by: f32) {
        self.max_width -= by;
        if self.max_width < 0.0 {
            log::warn!(
                "Remaining width went negative ({:.2}), clamping to zero",
                self.max_width
            );
            self.max_width = 0.0;
        }
    }

    /// Consumes `by` points of height, clamping at zero.
    pub fn reduce_height(&mut self, by: f32) {
        self.max_height -= by;
        if self.max_height < 0.0 {
            log::warn!(
                "Remaining height went negative ({:.2}), clamping to zero",
                self.max_height
            );
            self.max_height = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_reading_conventions() {
        let layout = Layout::new(100.0, 200.0);
        assert!(!layout.width_tight);
        assert!(layout.height_tight);
        assert!(layout.allow_splitting);
        assert_eq!(layout.justification, Justification::Full);
        assert_eq!(layout.alignment, Alignment::Bottom);
    }

    #[test]
    fn reductions_clamp_at_zero() {
        let mut layout = Layout::new(10.0, 10.0);
        layout.reduce_width(4.0);
        assert_eq!(layout.max_width, 6.0);
        layout.reduce_width(7.0);
        assert_eq!(layout.max_width, 0.0);
        layout.reduce_height(12.0);
        assert_eq!(layout.max_height, 0.0);
    }

    #[test]
    fn with_size_only_overrides_given_axes() {
        let layout = Layout::new(10.0, 20.0).with_size(None, Some(5.0));
        assert_eq!(layout.max_width, 10.0);
        assert_eq!(layout.max_height, 5.0);
    }

    #[test]
    fn offsets_follow_mode() {
        assert_eq!(Justification::Left.centring_offset(10.0), 0.0);
        assert_eq!(Justification::Right.centring_offset(10.0), 10.0);
        assert_eq!(Justification::Full.centring_offset(10.0), 5.0);
        assert_eq!(Alignment::Top.drop_factor(), 0.0);
        assert_eq!(Alignment::Centre.drop_factor(), 0.5);
        assert_eq!(Alignment::Bottom.drop_factor(), 1.0);
    }
}
