use serde::{Deserialize, Serialize};

fn default_max_pages() -> usize {
    1000
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// The maximum number of pages the page driver will produce before giving up.
    ///
    /// Content that can never be completed (a block that always reports more to
    /// come, or one that never fits) would otherwise paginate forever. Exceeding
    /// the bound aborts the build with `LayoutError::PageLimitExceeded`.
    ///
    /// Defaults to `1000`.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
        }
    }
}

impl LayoutConfig {
    pub fn with_max_pages(max_pages: usize) -> Self {
        Self { max_pages }
    }
}
