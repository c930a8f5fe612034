use blockframe_types::Color;

/// Tracks the colour blocks asked for separately from the colour last sent to
/// the backend, so a backend only emits a colour operator when the two differ
/// at the moment something is actually drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    requested: Option<Color>,
    emitted: Color,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorState {
    /// A fresh page: nothing requested, backend drawing in black.
    pub fn new() -> Self {
        Self {
            requested: None,
            emitted: Color::BLACK,
        }
    }

    /// Records a request and returns the previous one.
    pub fn request(&mut self, color: Option<Color>) -> Option<Color> {
        std::mem::replace(&mut self.requested, color)
    }

    pub fn restore(&mut self, previous: Option<Color>) {
        self.requested = previous;
    }

    /// The colour drawing should happen in right now.
    pub fn effective(&self) -> Color {
        self.requested.unwrap_or(Color::BLACK)
    }

    /// The colour to emit before the next drawing operation, if it changed.
    pub fn take_change(&mut self) -> Option<Color> {
        let wanted = self.effective();
        if wanted == self.emitted {
            None
        } else {
            self.emitted = wanted;
            Some(wanted)
        }
    }
}
