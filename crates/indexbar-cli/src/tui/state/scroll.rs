//! Scroll State - list scroll position and bounds

/// Manages scroll state for the directory list
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset in rows (0 = top)
    pub offset: usize,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: usize,
}

impl ScrollState {
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
    }

    /// Scroll to a specific line, clamped to the valid range
    pub fn scroll_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_scroll);
    }

    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_scroll;
    }

    /// Update the maximum scroll value based on total lines and viewport height
    pub fn update_max_scroll(&mut self, total_lines: usize, viewport_height: u16) {
        self.max_scroll = total_lines.saturating_sub(viewport_height as usize);
        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
    }

    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_down(&self) -> bool {
        self.offset < self.max_scroll
    }
}
