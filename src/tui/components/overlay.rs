//! # Overlay Component
//!
//! Decorative illustrations drawn over a section's tinted art pane. Each
//! [`OverlayVariant`] maps to one fixed text illustration; its entrance
//! (fade, slide, grow) is driven by a [`Reveal`](crate::core::reveal::Reveal)
//! owned by the page and passed in as an [`EntranceFrame`].
//!
//! ```text
//! ┌ art pane (tint) ─────────────┐
//! │   ╭ illustration ─────────╮  │  ← inset by scale, shifted by dx/dy
//! │   │ Market Research  90%  │  │
//! │   ╰───────────────────────╯  │
//! └──────────────────────────────┘
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::core::palette::Rgb;
use crate::core::reveal::{EntranceFrame, OverlayVariant};
use crate::tui::theme;

const GREEN: Rgb = Rgb::new(0x66, 0xbb, 0x6a);
const BLUE: Rgb = Rgb::new(0x42, 0xa5, 0xf5);
const ORANGE: Rgb = Rgb::new(0xff, 0xa7, 0x26);
const PINK: Rgb = Rgb::new(0xec, 0x40, 0x7a);
const PURPLE: Rgb = Rgb::new(0xab, 0x47, 0xbc);
const MUTED: Rgb = Rgb::new(0x9e, 0x9e, 0x9e);

/// Rows an art pane needs to show any illustration with its frame.
pub const PANE_HEIGHT: u16 = 16;

fn heading(text: &'static str, rgb: Rgb) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .fg(theme::color(rgb))
            .add_modifier(Modifier::BOLD),
    )
}

fn muted(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(theme::color(MUTED)))
}

fn bar(filled: usize, total: usize, rgb: Rgb) -> Span<'static> {
    let filled = filled.min(total);
    Span::styled(
        format!("{}{}", "█".repeat(filled), "░".repeat(total - filled)),
        Style::default().fg(theme::color(rgb)),
    )
}

fn progress_row(label: &'static str, percent: usize, rgb: Rgb) -> Line<'static> {
    Line::from(vec![
        heading(label, rgb),
        Span::raw(" ".repeat(20usize.saturating_sub(label.len()))),
        bar(percent / 10, 10, rgb),
        Span::styled(
            format!(" {percent:>3}% Complete"),
            Style::default().fg(theme::color(rgb)),
        ),
    ])
}

/// Title and body lines of the illustration for `variant`.
pub fn illustration(variant: OverlayVariant) -> (&'static str, Vec<Line<'static>>) {
    match variant {
        OverlayVariant::Strategy => (
            " GTM Strategy ",
            vec![
                progress_row("Market Research", 90, GREEN),
                progress_row("Competitor Analysis", 70, BLUE),
                progress_row("Target Segments", 50, ORANGE),
                progress_row("Messaging Framework", 30, PINK),
                progress_row("Launch Timeline", 10, PURPLE),
            ],
        ),
        OverlayVariant::Analytics => (
            " Analytics ",
            vec![
                Line::from(vec![
                    heading("Revenue Growth", GREEN),
                    Span::raw("      "),
                    heading("Market Share", BLUE),
                ]),
                Line::from(vec![
                    bar(3, 3, GREEN),
                    Span::raw(" "),
                    bar(5, 5, GREEN),
                    Span::raw(" "),
                    bar(7, 7, GREEN),
                    Span::raw(" "),
                    bar(9, 9, GREEN),
                ]),
                Line::from(muted("Q1  Q2    Q3      Q4")),
                Line::default(),
                Line::from(vec![
                    heading("Segment Analysis", ORANGE),
                    Span::raw("    "),
                    heading("Conversion ", PINK),
                    heading("24%", PINK),
                    Span::raw("   "),
                    heading("ROI ", PURPLE),
                    heading("3.2x", PURPLE),
                ]),
            ],
        ),
        OverlayVariant::Leads => (
            " Leads ",
            vec![
                Line::from(vec![
                    heading("Sarah Chen", GREEN),
                    muted("  Tech Director  "),
                    heading("High Intent", GREEN),
                ]),
                Line::from(vec![
                    heading("Mike Ross", BLUE),
                    muted("   VP Sales       "),
                    heading("Qualified", BLUE),
                ]),
                Line::default(),
                Line::from(heading("Conversion Funnel", BLUE)),
                Line::from(vec![bar(16, 16, BLUE), muted(" 1,250 Leads")]),
                Line::from(vec![bar(11, 11, BLUE), muted(" 480 MQLs")]),
                Line::from(vec![bar(7, 7, PURPLE), muted(" 120 SQLs")]),
                Line::from(vec![bar(3, 3, PURPLE), muted(" 32 Deals")]),
                Line::default(),
                Line::from(heading("Lead Scoring", ORANGE)),
                Line::from(muted("Enterprise (95)  Mid-Market (75)  Startup (45)")),
            ],
        ),
        OverlayVariant::About => (
            " Signal ",
            vec![
                Line::from(heading("Our Mission", GREEN)),
                Line::from(muted("Empower businesses with AI-driven GTM")),
                Line::from(muted("strategies that drive predictable revenue growth")),
                Line::default(),
                Line::from(vec![
                    heading("Core Values  ", BLUE),
                    muted("Innovation · Excellence · Integrity"),
                ]),
                Line::default(),
                Line::from(heading("Team & Impact", ORANGE)),
                Line::from(muted("50+ Team Members · 1000+ Companies Helped")),
                Line::from(muted("$500M+ Revenue Generated")),
                Line::default(),
                Line::from(vec![
                    heading("Technology  ", PINK),
                    muted("AI/ML · Cloud"),
                    Span::raw("   "),
                    heading("Achievements", PURPLE),
                ]),
            ],
        ),
        OverlayVariant::Compact => (
            " Overview ",
            vec![
                Line::from(vec![
                    heading("Revenue      ", GREEN),
                    heading("Performance  ", ORANGE),
                    heading("Active Deals", PINK),
                ]),
                Line::from(vec![
                    heading("$2.4M        ", GREEN),
                    bar(8, 10, ORANGE),
                    Span::raw("   "),
                    heading("127", PINK),
                ]),
                Line::from(muted("+24% YoY                   32 this week")),
                Line::default(),
                Line::from(vec![
                    heading("Users        ", BLUE),
                    Span::raw("             "),
                    heading("Conversion", PURPLE),
                ]),
                Line::from(vec![
                    heading("48.2K        ", BLUE),
                    Span::raw("             "),
                    heading("3.2%", PURPLE),
                ]),
                Line::from(muted("+18% MoM                   Above target")),
            ],
        ),
    }
}

/// Where the illustration frame sits inside `area` for a given entrance pose.
///
/// Scale shrinks the frame symmetrically; offsets shift it and are clipped to
/// `area`. Returns `None` when nothing of the frame would be visible.
pub fn placement(area: Rect, frame: &EntranceFrame) -> Option<Rect> {
    let scale = frame.scale.clamp(0.0, 1.0);
    let width = (f32::from(area.width) * scale).round() as i32;
    let height = (f32::from(area.height) * scale).round() as i32;
    let x = i32::from(area.x) + (i32::from(area.width) - width) / 2 + i32::from(frame.dx);
    let y = i32::from(area.y) + (i32::from(area.height) - height) / 2 + i32::from(frame.dy);

    let left = x.max(i32::from(area.x));
    let top = y.max(i32::from(area.y));
    let right = (x + width).min(i32::from(area.right()));
    let bottom = (y + height).min(i32::from(area.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// An art pane with its illustration at one instant of the entrance.
pub struct Overlay {
    variant: OverlayVariant,
    frame: EntranceFrame,
    tint: Rgb,
}

impl Overlay {
    pub fn new(variant: OverlayVariant, frame: EntranceFrame, tint: Rgb) -> Self {
        Self {
            variant,
            frame,
            tint,
        }
    }
}

impl Widget for Overlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::new()
            .style(Style::default().bg(theme::color(self.tint)))
            .render(area, buf);

        if self.frame.opacity <= 0.0 {
            return;
        }
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        let Some(target) = placement(inner, &self.frame) else {
            return;
        };

        let (title, lines) = illustration(self.variant);
        let mut style = Style::default().bg(Color::Black);
        if self.frame.opacity < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }
        let border = theme::fade(Rgb::new(0xee, 0xee, 0xee), self.frame.opacity);
        Paragraph::new(lines)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border))
                    .title(title),
            )
            .render(target, buf);
    }
}
