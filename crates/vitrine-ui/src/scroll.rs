/// Vertical offset past which the back-to-top control is shown.
pub const BACK_TO_TOP_THRESHOLD: f64 = 100.0;

/// Tracks scroll offset and the back-to-top control's visibility.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    offset: f64,
    back_to_top_visible: bool,
}

impl ScrollTracker {
    /// Records a new offset. Returns `Some(visible)` when the control's
    /// visibility changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        self.offset = offset.max(0.0);
        let visible = back_to_top_visible(self.offset);
        (visible != self.back_to_top_visible).then(|| {
            self.back_to_top_visible = visible;
            visible
        })
    }

    /// Smooth scroll to the top of the page.
    pub fn scroll_to_top(&mut self) -> Option<bool> {
        self.on_scroll(0.0)
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }
}

#[must_use]
pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}
