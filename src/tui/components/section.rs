//! One content section of the landing page: optional heading, a text pane
//! (title, wrapped body, CTA) and an art pane carrying the section's overlay.
//!
//! Wide terminals put the panes side by side, the art on the section's
//! [`ArtSide`]; narrow ones stack text above art.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::copy::{ArtSide, Section};
use crate::core::reveal::EntranceFrame;
use crate::tui::components::overlay::{Overlay, PANE_HEIGHT};

/// Minimum width for the side-by-side layout.
pub const WIDE_LAYOUT: u16 = 90;
const TEXT_PADDING: u16 = 2;

/// Screen areas of a section's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub heading: Option<Rect>,
    pub text: Rect,
    pub art: Rect,
}

fn text_pane_width(width: u16) -> u16 {
    if width >= WIDE_LAYOUT {
        width / 2
    } else {
        width
    }
}

fn body_lines(section: &Section, pane_width: u16) -> Vec<String> {
    let wrap_width = usize::from(pane_width.saturating_sub(TEXT_PADDING * 2).max(1));
    textwrap::wrap(section.body, wrap_width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn text_height(section: &Section, pane_width: u16) -> u16 {
    // title, gap, body, gap, cta
    body_lines(section, pane_width).len() as u16 + 4
}

fn heading_height(section: &Section) -> u16 {
    if section.heading.is_some() { 2 } else { 0 }
}

/// Rows the section occupies at `width`, including one row of padding above
/// and below.
pub fn section_height(section: &Section, width: u16) -> u16 {
    let pane = text_pane_width(width);
    let text = text_height(section, pane);
    let panes = if width >= WIDE_LAYOUT {
        text.max(PANE_HEIGHT)
    } else {
        text + 1 + PANE_HEIGHT
    };
    heading_height(section) + panes + 2
}

pub fn layout(section: &Section, area: Rect) -> SectionLayout {
    let heading_rows = heading_height(section);
    let [_, heading, panes, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(heading_rows),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let heading = (heading_rows > 0).then_some(heading);

    if area.width >= WIDE_LAYOUT {
        let [left, right] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(panes);
        let (art, text) = match section.art_side {
            ArtSide::Left => (left, right),
            ArtSide::Right => (right, left),
        };
        let art_height = PANE_HEIGHT.min(art.height);
        SectionLayout {
            heading,
            text,
            art: Rect {
                height: art_height,
                ..art
            },
        }
    } else {
        let text_rows = text_height(section, area.width);
        let [text, _, art] = Layout::vertical([
            Constraint::Length(text_rows),
            Constraint::Length(1),
            Constraint::Length(PANE_HEIGHT),
        ])
        .areas(panes);
        SectionLayout { heading, text, art }
    }
}

pub struct SectionView<'a> {
    section: &'a Section,
    frame: EntranceFrame,
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a Section, frame: EntranceFrame) -> Self {
        Self { section, frame }
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let parts = layout(self.section, area);

        if let (Some(rect), Some(heading)) = (parts.heading, self.section.heading) {
            Paragraph::new(Span::styled(
                heading,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))
            .alignment(Alignment::Center)
            .render(rect, buf);
        }

        let mut lines = vec![
            Line::from(Span::styled(
                self.section.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(
            body_lines(self.section, parts.text.width)
                .into_iter()
                .map(|line| Line::styled(line, Style::default().fg(Color::Gray))),
        );
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} → ", self.section.cta),
                Style::default().bg(Color::White).fg(Color::Black),
            ),
            Span::styled("  (d)", Style::default().fg(Color::DarkGray)),
        ]));
        let text_area = Rect {
            x: parts.text.x + TEXT_PADDING,
            width: parts.text.width.saturating_sub(TEXT_PADDING * 2),
            ..parts.text
        };
        Paragraph::new(lines).render(text_area, buf);

        Overlay::new(self.section.overlay, self.frame, self.section.tint).render(parts.art, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::copy::SECTIONS;

    const SETTLED: EntranceFrame = EntranceFrame {
        opacity: 1.0,
        dx: 0,
        dy: 0,
        scale: 1.0,
    };

    fn render(section: &Section, width: u16) -> String {
        let area = Rect::new(0, 0, width, section_height(section, width));
        let mut buf = Buffer::empty(area);
        SectionView::new(section, SETTLED).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn renders_heading_title_cta_and_art() {
        let about = &SECTIONS[0];
        let text = render(about, 120);
        assert!(text.contains("About"));
        assert!(text.contains("Your AI-Powered GTM Co-Pilot"));
        assert!(text.contains("Start strategizing"));
        assert!(text.contains("Our Mission"));
    }

    #[test]
    fn art_side_follows_section() {
        let area = Rect::new(0, 0, 120, 30);
        let left = layout(&SECTIONS[0], area);
        let right = layout(&SECTIONS[1], area);
        assert!(left.art.x < left.text.x);
        assert!(right.art.x > right.text.x);
    }

    #[test]
    fn narrow_layout_stacks_panes() {
        let section = &SECTIONS[2];
        let width = 60;
        let area = Rect::new(0, 0, width, section_height(section, width));
        let parts = layout(section, area);
        assert_eq!(parts.heading, None);
        assert!(parts.art.y > parts.text.y);
        assert_eq!(parts.art.height, PANE_HEIGHT);
        assert!(parts.art.bottom() <= area.bottom());
    }

    #[test]
    fn narrow_sections_are_taller() {
        for section in &SECTIONS {
            assert!(section_height(section, 60) > section_height(section, 120));
        }
    }
}
