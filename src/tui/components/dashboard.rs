//! Dashboard placeholder page. Echoes the text the visitor submitted on the
//! landing page, or says that nothing was provided.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::copy::{DASHBOARD_NO_INPUT, DASHBOARD_PREPARING, DASHBOARD_TITLE, DASHBOARD_WELCOME};
use crate::tui::component::Component;

const CARD_WIDTH: u16 = 72;

pub struct Dashboard<'a> {
    pub initial_input: Option<&'a str>,
}

impl<'a> Dashboard<'a> {
    pub fn new(initial_input: Option<&'a str>) -> Self {
        Self { initial_input }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let payload = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(Color::DarkGray);

        let mut lines = match self.initial_input {
            Some(input) => labelled("Analyzing: ", input, Style::default(), payload),
            None => vec![Line::raw(DASHBOARD_WELCOME)],
        };
        lines.push(Line::default());
        lines.push(Line::styled(DASHBOARD_PREPARING, Style::default().fg(Color::Gray)));
        lines.push(Line::default());
        lines.extend(labelled(
            "Initial input: ",
            self.initial_input.unwrap_or(DASHBOARD_NO_INPUT),
            muted,
            muted,
        ));
        lines.push(Line::default());
        lines.push(Line::styled("Esc / b: back to landing", muted));
        lines
    }
}

/// `label` followed by `value`, one `Line` per line of `value` so embedded
/// newlines survive rendering.
fn labelled<'a>(
    label: &'static str,
    value: &'a str,
    label_style: Style,
    value_style: Style,
) -> Vec<Line<'a>> {
    let mut rows = value.lines();
    let first = rows.next().unwrap_or_default();
    let mut lines = vec![Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(first, value_style),
    ])];
    lines.extend(rows.map(|row| Line::styled(row, value_style)));
    lines
}

impl Component for Dashboard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = CARD_WIDTH.min(area.width);
        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!(" {DASHBOARD_TITLE} "))
                    .padding(Padding::horizontal(1)),
            );
        // line_count wraps at the width it is given and adds the block's
        // top and bottom rows; borders plus padding take 4 columns
        let rows = paragraph.line_count(width.saturating_sub(4).max(1));
        let height = u16::try_from(rows).unwrap_or(u16::MAX).min(area.height);

        let [card] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(card);

        frame.render_widget(paragraph, card);
    }
}
