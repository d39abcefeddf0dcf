//! # Landing Page Component
//!
//! The scrollable marketing page: a viewport-tall hero (background, headline,
//! composer) followed by the content sections.
//!
//! ## State
//!
//! `LandingState` lives in `TuiState` for as long as the landing route is
//! active and is rebuilt on return, so overlay entrances and scroll position
//! start fresh each visit. `LandingPage` is the transient render wrapper.
//!
//! ## Layout
//!
//! The page is drawn into a `tui_scrollview::ScrollView` sized to the whole
//! content; every frame re-measures section heights for the current width
//! and records where each one starts, which backs the About/Features jumps.
//!
//! ## Overlay reveals
//!
//! After each layout pass every section's art pane is tested against the
//! viewport; once at least 30% of it is visible its `Reveal` starts and never
//! resets, so scrolling away and back does not replay the entrance.
//!
//! ## Cursor
//!
//! The composer is rendered inside the scroll canvas, so its cursor position
//! is translated from content to screen coordinates and only shown while the
//! composer is inside the viewport.

use std::time::Duration;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::copy::{Anchor, SECTIONS, section_index};
use crate::core::reveal::{Reveal, visible_fraction};
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::composer::Composer;
use crate::tui::components::hero::{Hero, composer_width, hero_layout};
use crate::tui::components::section::{SectionView, layout as section_layout, section_height};
use crate::tui::event::TuiEvent;

/// Hero never shrinks below this many rows on tiny terminals.
pub const MIN_HERO_HEIGHT: u16 = 12;
const SCROLL_STEP: u16 = 3;

/// Scroll, layout and reveal state for the landing page.
pub struct LandingState {
    pub scroll_state: ScrollViewState,
    pub composer: Composer,
    reveals: Vec<Reveal>,
    /// Content-space top row of each section
    section_tops: Vec<u16>,
    section_heights: Vec<u16>,
    hero_height: u16,
    content_width: u16,
    content_height: u16,
    viewport_height: u16,
}

impl LandingState {
    pub fn new(min_lines: u16, max_lines: u16) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            composer: Composer::new(min_lines, max_lines),
            reveals: SECTIONS.iter().map(|s| Reveal::new(s.overlay)).collect(),
            section_tops: Vec::new(),
            section_heights: Vec::new(),
            hero_height: 0,
            content_width: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn section_top(&self, index: usize) -> Option<u16> {
        self.section_tops.get(index).copied()
    }

    /// Measure the page for a canvas `width` wide and a viewport
    /// `viewport_height` rows tall.
    pub fn relayout(&mut self, width: u16, viewport_height: u16) {
        self.content_width = width;
        self.viewport_height = viewport_height;
        self.hero_height = viewport_height.max(MIN_HERO_HEIGHT);
        self.composer.prepare(composer_width(width));

        self.section_tops.clear();
        self.section_heights.clear();
        let mut y = self.hero_height;
        for section in &SECTIONS {
            let height = section_height(section, width);
            self.section_tops.push(y);
            self.section_heights.push(height);
            y = y.saturating_add(height);
        }
        self.content_height = y;
        self.clamp_scroll();
    }

    fn set_offset(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    pub fn clamp_scroll(&mut self) {
        self.set_offset(self.offset());
    }

    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let before = self.offset();
        let target = (i32::from(before) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        self.set_offset(target);
        self.offset() != before
    }

    /// Jump so the anchored section starts at the top of the viewport.
    pub fn scroll_to(&mut self, anchor: Anchor) {
        let Some(top) = self.section_top(section_index(anchor)) else {
            return;
        };
        debug!("Jumping to {:?} at row {}", anchor, top);
        self.set_offset(top);
    }

    fn composer_area(&self) -> Rect {
        let hero = Rect::new(0, 0, self.content_width, self.hero_height);
        hero_layout(hero, self.composer.height()).1
    }

    /// Content-space rectangle of a section's art pane.
    fn art_area(&self, index: usize) -> Option<Rect> {
        let top = *self.section_tops.get(index)?;
        let height = *self.section_heights.get(index)?;
        let area = Rect::new(0, top, self.content_width, height);
        Some(section_layout(&SECTIONS[index], area).art)
    }

    /// Start the entrance of every overlay that is now sufficiently visible.
    pub fn observe_reveals(&mut self, now: Duration) {
        let viewport_top = self.offset();
        for index in 0..self.reveals.len() {
            let Some(art) = self.art_area(index) else {
                continue;
            };
            let fraction = visible_fraction(art.y, art.height, viewport_top, self.viewport_height);
            if self.reveals[index].observe(fraction, now) {
                debug!(
                    "Overlay revealed: {} ({:.0}% visible)",
                    self.reveals[index].variant().name(),
                    fraction * 100.0
                );
            }
        }
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.reveals.iter().any(|r| r.is_animating(now))
    }

    /// Screen position of the composer cursor for a page drawn at `area`, if
    /// the composer is currently on screen.
    pub fn cursor_screen_position(&self, area: Rect) -> Option<Position> {
        let (col, row) = self.composer.cursor_position(self.composer_area());
        let offset = self.scroll_state.offset();
        let x = area.x + col.checked_sub(offset.x)?;
        let y = area.y + row.checked_sub(offset.y)?;
        let inside = x < area.x + self.content_width.min(area.width) && y < area.bottom();
        inside.then_some(Position { x, y })
    }
}

impl EventHandler for LandingState {
    /// Emitted when the scroll position actually moved.
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let page = i32::from(self.viewport_height.saturating_sub(2).max(1));
        let moved = match event {
            TuiEvent::ScrollUp => self.scroll_by(-i32::from(SCROLL_STEP)),
            TuiEvent::ScrollDown => self.scroll_by(i32::from(SCROLL_STEP)),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown => self.scroll_by(page),
            _ => false,
        };
        moved.then_some(())
    }
}

pub struct LandingPage<'a> {
    state: &'a mut LandingState,
    app: &'a App,
    /// Time since the TUI started; drives the background and entrances.
    now: Duration,
}

impl<'a> LandingPage<'a> {
    pub fn new(state: &'a mut LandingState, app: &'a App, now: Duration) -> Self {
        Self { state, app, now }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // one column goes to the vertical scrollbar
        let content_width = area.width.saturating_sub(1);
        self.state.composer.placeholder = self.app.composer_placeholder().to_string();
        self.state.relayout(content_width, area.height);
        self.state.observe_reveals(self.now);

        let palette = self.app.colors();
        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(
            Hero {
                palette: &palette,
                line_count: self.app.line_count,
                elapsed_secs: self.now.as_secs_f32(),
                speed: self.app.animation_speed,
                composer: &self.state.composer,
            },
            Rect::new(0, 0, content_width, self.state.hero_height),
        );

        for (index, section) in SECTIONS.iter().enumerate() {
            let rect = Rect::new(
                0,
                self.state.section_tops[index],
                content_width,
                self.state.section_heights[index],
            );
            let entrance = self.state.reveals[index].frame(self.now);
            scroll_view.render_widget(SectionView::new(section, entrance), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        if self.state.composer.focused
            && let Some(position) = self.state.cursor_screen_position(area)
        {
            frame.set_cursor_position(position);
        }
    }
}
