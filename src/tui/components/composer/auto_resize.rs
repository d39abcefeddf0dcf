//! Visible height of the composer's text area.
//!
//! The field grows with its content between `min_lines` and `max_lines`;
//! anything beyond `max_lines` scrolls inside the field.

#[derive(Debug, Clone)]
pub struct AutoResize {
    min_lines: u16,
    max_lines: u16,
    visible_lines: u16,
}

impl AutoResize {
    /// Bounds are normalized so that `1 <= min_lines <= max_lines`.
    pub fn new(min_lines: u16, max_lines: u16) -> Self {
        let min_lines = min_lines.max(1);
        let max_lines = max_lines.max(min_lines);
        Self {
            min_lines,
            max_lines,
            visible_lines: min_lines,
        }
    }

    pub fn min_lines(&self) -> u16 {
        self.min_lines
    }

    pub fn max_lines(&self) -> u16 {
        self.max_lines
    }

    pub fn visible_lines(&self) -> u16 {
        self.visible_lines
    }

    /// Recompute the visible height for content that needs `content_lines` rows.
    pub fn fit(&mut self, content_lines: u16) -> u16 {
        self.visible_lines = content_lines.clamp(self.min_lines, self.max_lines);
        self.visible_lines
    }

    /// Collapse back to the minimum height.
    pub fn reset(&mut self) {
        self.visible_lines = self.min_lines;
    }

    pub fn overflows(&self, content_lines: u16) -> bool {
        content_lines > self.max_lines
    }
}
