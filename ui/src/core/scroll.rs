//! Scroll-position hint for the navbar border.

/// Vertical offset (px) past which the bar counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Coalesces scroll events into at most one recomputation per animation frame.
///
/// The event handler calls `request`; only when it returns `true` does the
/// caller schedule a frame, and that frame calls `run`.
#[derive(Debug, Default, Clone)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn run(&mut self, offset: f64) -> bool {
        self.pending = false;
        is_scrolled(offset)
    }
}

pub fn border_class(scrolled: bool) -> &'static str {
    if scrolled {
        "navbar--scrolled"
    } else {
        "navbar--top"
    }
}
