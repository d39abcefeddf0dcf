//! # NavBar Component
//!
//! One-row bar across the top of the page: brand on the left, page links in
//! the middle, an inert "Sign In" on the right. The app's status message is
//! appended after the links when there is one.
//!
//! The bar is fixed: it stays on screen on every route. On the landing page it
//! sits over the top row of the scrolling page.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::core::copy::BRAND;
use crate::tui::component::Component;

pub const NAV_ITEMS: [(&str, char); 3] = [("About", 'a'), ("Features", 'f'), ("Test", 't')];

pub struct NavBar<'a> {
    pub status_message: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(status_message: &'a str) -> Self {
        Self { status_message }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = Style::default().bg(Color::Black).fg(Color::White);
        frame.render_widget(Clear, area);

        let brand = Span::styled(
            format!(" ◆ {BRAND} "),
            Style::default().add_modifier(Modifier::BOLD),
        );
        let mut links = vec![brand, Span::raw("  ")];
        for (label, key) in NAV_ITEMS {
            links.push(Span::raw(format!("{label} ")));
            links.push(Span::styled(
                format!("({key})"),
                Style::default().fg(Color::DarkGray),
            ));
            links.push(Span::raw("   "));
        }
        if !self.status_message.is_empty() {
            links.push(Span::styled(
                format!("│ {}", self.status_message),
                Style::default().fg(Color::Yellow),
            ));
        }

        let sign_in = " Sign In ";
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(sign_in.len() as u16 + 1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(Line::from(links)).style(base), left);
        frame.render_widget(
            Paragraph::new(Span::styled(
                sign_in,
                Style::default().bg(Color::White).fg(Color::Black),
            ))
            .style(base),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(status: &str) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| NavBar::new(status).render(f, f.area()))
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
    fn shows_brand_links_and_sign_in() {
        let text = render_text("");
        assert!(text.contains("Signal"));
        assert!(text.contains("About"));
        assert!(text.contains("Features"));
        assert!(text.contains("Test"));
        assert!(text.contains("Sign In"));
        assert!(!text.contains('│'));
    }

    #[test]
    fn shows_status_message() {
        let text = render_text("Palette: ocean");
        assert!(text.contains("│ Palette: ocean"));
    }
}
