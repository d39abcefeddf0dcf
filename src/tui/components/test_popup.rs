//! Modal preview opened from the nav bar's "Test" item: a small checklist
//! illustration, the preview description, and the compact overview card
//! sliding in from the left.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::copy::{TEST_POPUP_DESCRIPTION, TEST_POPUP_TITLE};
use crate::core::palette::Rgb;
use crate::core::reveal::{OverlayVariant, Reveal};
use crate::tui::components::color_panel::centered_rect;
use crate::tui::components::overlay::Overlay;
use crate::tui::event::TuiEvent;

const CHECKLIST: [&str; 3] = ["Responsive layout", "Palette presets", "Scroll animations"];
const CARD_TINT: Rgb = Rgb::new(0x1e, 0x1e, 0x2e);

pub enum TestPopupEvent {
    Dismiss,
}

pub struct TestPopupState {
    reveal: Reveal,
}

impl TestPopupState {
    /// The card starts its entrance as soon as the popup opens.
    pub fn open(now: Duration) -> Self {
        let mut reveal = Reveal::new(OverlayVariant::Compact);
        reveal.observe(1.0, now);
        Self { reveal }
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.reveal.is_animating(now)
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<TestPopupEvent> {
        match event {
            TuiEvent::Escape => Some(TestPopupEvent::Dismiss),
            _ => None,
        }
    }
}

pub struct TestPopup<'a> {
    state: &'a TestPopupState,
    now: Duration,
}

impl<'a> TestPopup<'a> {
    pub fn new(state: &'a TestPopupState, now: Duration) -> Self {
        Self { state, now }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(70, 80, area);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {TEST_POPUP_TITLE} "))
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [checklist, description, card] = Layout::vertical([
            Constraint::Length(CHECKLIST.len() as u16 + 1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let lines: Vec<Line> = CHECKLIST
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(
                        " ✓ ",
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {item}")),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), checklist);
        frame.render_widget(
            Paragraph::new(TEST_POPUP_DESCRIPTION)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            description,
        );
        frame.render_widget(
            Overlay::new(
                OverlayVariant::Compact,
                self.state.reveal.frame(self.now),
                CARD_TINT,
            ),
            card,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn escape_dismisses() {
        let mut state = TestPopupState::open(Duration::ZERO);
        assert!(state.handle_event(&TuiEvent::InputChar('x')).is_none());
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(TestPopupEvent::Dismiss)
        ));
    }

    #[test]
    fn card_animates_then_settles() {
        let state = TestPopupState::open(Duration::ZERO);
        assert!(state.is_animating(Duration::from_millis(300)));
        assert!(!state.is_animating(Duration::from_secs(2)));
    }

    #[test]
    fn renders_title_description_and_card() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = TestPopupState::open(Duration::ZERO);
        terminal
            .draw(|f| TestPopup::new(&state, Duration::from_secs(2)).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(TEST_POPUP_TITLE));
        assert!(text.contains("Responsive layout"));
        assert!(text.contains("Active Deals"));
    }
}
