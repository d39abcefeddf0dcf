//! Hero block at the top of the landing page: the floating-lines background
//! filling the viewport, the headline, and the composer centered below it.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::core::copy::HEADLINE;
use crate::core::palette::Palette;
use crate::tui::components::composer::Composer;
use crate::tui::components::floating_lines::FloatingLines;

/// Widest the composer grows on large terminals.
pub const COMPOSER_MAX_WIDTH: u16 = 80;
const SIDE_MARGIN: u16 = 2;

/// Width the composer gets inside a hero `width` cells wide.
pub fn composer_width(width: u16) -> u16 {
    width
        .saturating_sub(SIDE_MARGIN * 2)
        .min(COMPOSER_MAX_WIDTH)
}

/// Headline and composer areas for a hero drawn at `area`.
pub fn hero_layout(area: Rect, composer_height: u16) -> (Rect, Rect) {
    let [headline, _, composer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(composer_height),
    ])
    .flex(Flex::Center)
    .areas(area);
    let [composer] = Layout::horizontal([Constraint::Length(composer_width(area.width))])
        .flex(Flex::Center)
        .areas(composer);
    (headline, composer)
}

pub struct Hero<'a> {
    pub palette: &'a Palette,
    pub line_count: u8,
    pub elapsed_secs: f32,
    pub speed: f32,
    pub composer: &'a Composer,
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        FloatingLines::new(self.palette, self.line_count, self.elapsed_secs, self.speed)
            .render(area, buf);

        let (headline, composer) = hero_layout(area, self.composer.height());
        Paragraph::new(Line::styled(
            HEADLINE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(headline, buf);

        // Keep the waves from showing through the field.
        for y in composer.top()..composer.bottom() {
            for x in composer.left()..composer.right() {
                buf[(x, y)].reset();
            }
        }
        self.composer.render(composer, buf);
    }
}
