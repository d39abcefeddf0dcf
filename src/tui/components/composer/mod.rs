//! # Composer Component
//!
//! The hero's search-style text field.
//!
//! ## Responsibilities
//!
//! - Capture and edit text (cursor movement, paste, multi-line via Shift+Enter)
//! - Grow with its content between the configured line bounds
//! - Show the typing placeholder while empty
//! - Emit `Submit` for non-blank text, plus the Search toggle and attach affordances
//!
//! ## State Management
//!
//! The text and cursor are internal state. The placeholder and focus flag are
//! props refreshed by the page every frame.
//!
//! The composer renders as a `Widget` so the landing page can draw it into its
//! scroll view; the page then asks for [`Composer::cursor_position`] and places
//! the terminal cursor itself.

mod auto_resize;
mod text_wrap;

pub use auto_resize::AutoResize;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    StatefulWidget, Widget,
};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use text_wrap::{
    BORDER_OFFSET, VERTICAL_OVERHEAD, inner_width, locate, next_char_boundary, offset_at,
    prev_char_boundary, row_count, wrap_rows,
};

/// High-level events emitted by the Composer
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerEvent {
    /// Non-blank text was submitted (untrimmed)
    Submit(String),
    /// The Search pill was toggled (Ctrl+T); carries the new state
    SearchToggled(bool),
    /// The attach affordance was used (Ctrl+U)
    AttachRequested,
    ContentChanged,
}

pub struct Composer {
    text: String,
    /// Cursor position as byte offset in `text`
    cursor: usize,
    /// First visible row when content overflows
    scroll_offset: u16,
    /// Width from the last layout pass
    last_width: u16,
    resize: AutoResize,
    search_enabled: bool,
    /// Shown dimmed while the field is empty (Prop)
    pub placeholder: String,
    /// Whether keys currently go to the field (Prop)
    pub focused: bool,
}

impl Composer {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new(min_lines: u16, max_lines: u16) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            scroll_offset: 0,
            last_width: Self::DEFAULT_WIDTH,
            resize: AutoResize::new(min_lines, max_lines),
            search_enabled: false,
            placeholder: String::new(),
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    pub fn visible_lines(&self) -> u16 {
        self.resize.visible_lines()
    }

    /// Total height including borders.
    pub fn height(&self) -> u16 {
        self.resize.visible_lines() + VERTICAL_OVERHEAD
    }

    /// Lay out for `width` before measuring or rendering.
    pub fn prepare(&mut self, width: u16) {
        self.last_width = width;
        self.refit();
    }

    fn content_rows(&self) -> u16 {
        row_count(&self.text, inner_width(self.last_width))
    }

    /// Re-run auto-resize and keep the cursor row inside the visible window.
    fn refit(&mut self) {
        let rows = self.content_rows();
        let visible = self.resize.fit(rows);
        if rows <= visible {
            self.scroll_offset = 0;
            return;
        }
        let width = inner_width(self.last_width);
        let (cursor_row, _) = locate(&self.text, &wrap_rows(&self.text, width), self.cursor);
        let cursor_row = u16::try_from(cursor_row).unwrap_or(u16::MAX);
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset + visible {
            self.scroll_offset = cursor_row + 1 - visible;
        }
        self.scroll_offset = self.scroll_offset.min(rows - visible);
    }

    fn changed(&mut self) -> Option<ComposerEvent> {
        self.refit();
        Some(ComposerEvent::ContentChanged)
    }

    /// Screen position of the cursor when the composer is drawn at `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        let rows = wrap_rows(&self.text, width.max(1));
        let (row, col) = locate(&self.text, &rows, self.cursor);
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        let visible_row = row.saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + col.min(width),
            area.y + BORDER_OFFSET + visible_row,
        )
    }

    fn submit(&mut self) -> Option<ComposerEvent> {
        if self.text.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.scroll_offset = 0;
        self.resize.reset();
        Some(ComposerEvent::Submit(text))
    }

    fn insert(&mut self, s: &str) -> Option<ComposerEvent> {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.changed()
    }

    fn move_vertically(&mut self, down: bool) -> Option<ComposerEvent> {
        let rows = wrap_rows(&self.text, inner_width(self.last_width).max(1));
        let (row, col) = locate(&self.text, &rows, self.cursor);
        let target = if down {
            row + 1
        } else {
            row.checked_sub(1)?
        };
        let target_row = rows.get(target)?;
        self.cursor = offset_at(&self.text, target_row, col);
        self.changed()
    }

    fn render_scrollbar(&self, area: Rect, buf: &mut Buffer) {
        let rows = self.content_rows();
        if !self.resize.overflows(rows) {
            return;
        }
        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = rows.saturating_sub(self.resize.visible_lines());
        let mut state = ScrollbarState::default()
            .content_length(usize::from(max_scroll))
            .position(usize::from(self.scroll_offset));
        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };
        Scrollbar::new(ScrollbarOrientation::VerticalRight).render(
            scrollbar_area,
            buf,
            &mut state,
        );
    }
}

fn pill(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!(" {label} "), style)
}

impl Widget for &Composer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        let has_text = !self.text.is_empty();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_bottom(
                Line::from(vec![pill("+", false), pill("Search", self.search_enabled)])
                    .left_aligned(),
            )
            .title_bottom(Line::from(pill("➤ Send", has_text)).right_aligned());
        block.render(area, buf);

        let width = inner_width(area.width);
        let text_area = Rect {
            x: area.x + BORDER_OFFSET,
            y: area.y + BORDER_OFFSET,
            width,
            height: area.height.saturating_sub(VERTICAL_OVERHEAD),
        };

        if has_text {
            let rows = wrap_rows(&self.text, width.max(1));
            let lines: Vec<Line> = rows
                .iter()
                .skip(usize::from(self.scroll_offset))
                .take(usize::from(text_area.height))
                .map(|r| Line::raw(&self.text[r.clone()]))
                .collect();
            Paragraph::new(lines)
                .style(Style::default().fg(Color::White))
                .render(text_area, buf);
        } else {
            Paragraph::new(Line::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .render(text_area, buf);
        }

        self.render_scrollbar(area, buf);
    }
}

impl EventHandler for Composer {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert(c.encode_utf8(&mut buf))
            }
            TuiEvent::Paste(text) => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&normalized)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.text, self.cursor);
                self.text.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.text.len() {
                    return None;
                }
                let next = next_char_boundary(&self.text, self.cursor);
                self.text.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor = prev_char_boundary(&self.text, self.cursor);
                self.changed()
            }
            TuiEvent::CursorRight => {
                if self.cursor >= self.text.len() {
                    return None;
                }
                self.cursor = next_char_boundary(&self.text, self.cursor);
                self.changed()
            }
            TuiEvent::CursorHome => {
                let line_start = self.text[..self.cursor]
                    .rfind('\n')
                    .map_or(0, |i| i + 1);
                if line_start == self.cursor {
                    return None;
                }
                self.cursor = line_start;
                self.changed()
            }
            TuiEvent::CursorEnd => {
                let line_end = self.text[self.cursor..]
                    .find('\n')
                    .map_or(self.text.len(), |i| self.cursor + i);
                if line_end == self.cursor {
                    return None;
                }
                self.cursor = line_end;
                self.changed()
            }
            TuiEvent::CursorUp => self.move_vertically(false),
            TuiEvent::CursorDown => self.move_vertically(true),
            TuiEvent::Submit => self.submit(),
            TuiEvent::ToggleSearch => {
                self.search_enabled = !self.search_enabled;
                Some(ComposerEvent::SearchToggled(self.search_enabled))
            }
            TuiEvent::Attach => Some(ComposerEvent::AttachRequested),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(composer: &mut Composer, text: &str) {
        for c in text.chars() {
            composer.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn render_text(composer: &Composer, width: u16) -> String {
        let backend = TestBackend::new(width, composer.height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(composer, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_blank_submit_is_ignored_and_keeps_text() {
        let mut composer = Composer::new(1, 5);
        assert_eq!(composer.handle_event(&TuiEvent::Submit), None);
        assert_eq!(composer.text(), "");

        type_text(&mut composer, "   ");
        assert_eq!(composer.handle_event(&TuiEvent::Submit), None);
        assert_eq!(composer.text(), "   ");

        composer.handle_event(&TuiEvent::InputChar('\n'));
        assert_eq!(composer.handle_event(&TuiEvent::Submit), None);
        assert_eq!(composer.text(), "   \n");
    }

    #[test]
    fn test_submit_emits_once_and_clears() {
        let mut composer = Composer::new(1, 5);
        type_text(&mut composer, "Find leads for fintech");

        let res = composer.handle_event(&TuiEvent::Submit);
        assert_eq!(
            res,
            Some(ComposerEvent::Submit("Find leads for fintech".to_string()))
        );
        assert_eq!(composer.text(), "");
        // Nothing left to submit.
        assert_eq!(composer.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_submit_keeps_surrounding_whitespace() {
        let mut composer = Composer::new(1, 5);
        type_text(&mut composer, " hi ");
        assert_eq!(
            composer.handle_event(&TuiEvent::Submit),
            Some(ComposerEvent::Submit(" hi ".to_string()))
        );
    }

    #[test]
    fn test_grows_with_content_and_resets_on_submit() {
        let mut composer = Composer::new(1, 3);
        composer.prepare(14); // 10 columns of text
        assert_eq!(composer.visible_lines(), 1);

        type_text(&mut composer, "one\ntwo");
        assert_eq!(composer.visible_lines(), 2);

        type_text(&mut composer, "\nthree\nfour\nfive");
        assert_eq!(composer.visible_lines(), 3);

        composer.handle_event(&TuiEvent::Submit);
        assert_eq!(composer.visible_lines(), 1);
        assert_eq!(composer.height(), 3);
    }

    #[test]
    fn test_overflow_scrolls_to_cursor() {
        let mut composer = Composer::new(1, 2);
        composer.prepare(14);
        type_text(&mut composer, "a\nb\nc\nd");
        assert_eq!(composer.scroll_offset, 2);

        for _ in 0..3 {
            composer.handle_event(&TuiEvent::CursorUp);
        }
        assert_eq!(composer.scroll_offset, 0);
    }

    #[test]
    fn test_editing_multibyte() {
        let mut composer = Composer::new(1, 5);
        type_text(&mut composer, "café");
        composer.handle_event(&TuiEvent::CursorLeft);
        composer.handle_event(&TuiEvent::Backspace);
        assert_eq!(composer.text(), "caé");
        composer.handle_event(&TuiEvent::Delete);
        assert_eq!(composer.text(), "ca");
    }

    #[test]
    fn test_home_end_within_logical_line() {
        let mut composer = Composer::new(1, 5);
        type_text(&mut composer, "ab\ncd");
        composer.handle_event(&TuiEvent::CursorHome);
        composer.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(composer.text(), "ab\nxcd");
        assert_eq!(composer.handle_event(&TuiEvent::CursorEnd), Some(ComposerEvent::ContentChanged));
        assert_eq!(composer.handle_event(&TuiEvent::CursorEnd), None);
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut composer = Composer::new(1, 5);
        type_text(&mut composer, "abcd\nxy");
        composer.handle_event(&TuiEvent::CursorUp);
        composer.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(composer.text(), "ab!cd\nxy");
        assert_eq!(composer.handle_event(&TuiEvent::CursorUp), None);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut composer = Composer::new(1, 5);
        composer.handle_event(&TuiEvent::Paste("a\r\nb\rc".to_string()));
        assert_eq!(composer.text(), "a\nb\nc");
    }

    #[test]
    fn test_search_toggle_and_attach() {
        let mut composer = Composer::new(1, 5);
        assert_eq!(
            composer.handle_event(&TuiEvent::ToggleSearch),
            Some(ComposerEvent::SearchToggled(true))
        );
        assert!(composer.search_enabled());
        assert_eq!(
            composer.handle_event(&TuiEvent::ToggleSearch),
            Some(ComposerEvent::SearchToggled(false))
        );
        assert_eq!(
            composer.handle_event(&TuiEvent::Attach),
            Some(ComposerEvent::AttachRequested)
        );
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut composer = Composer::new(1, 5);
        composer.placeholder = "Identify the best".to_string();
        let text = render_text(&composer, 40);
        assert!(text.contains("Identify the best"));
        assert!(text.contains("Search"));
        assert!(text.contains("Send"));
    }

    #[test]
    fn test_render_shows_text_instead_of_placeholder() {
        let mut composer = Composer::new(1, 5);
        composer.placeholder = "Identify".to_string();
        type_text(&mut composer, "hello");
        let text = render_text(&composer, 40);
        assert!(text.contains("hello"));
        assert!(!text.contains("Identify"));
    }

    #[test]
    fn test_cursor_position_follows_text() {
        let mut composer = Composer::new(1, 5);
        composer.prepare(20);
        type_text(&mut composer, "ab\nc");
        let area = Rect::new(5, 10, 20, composer.height());
        assert_eq!(composer.cursor_position(area), (5 + 1 + 1, 10 + 1 + 1));
    }
}
