//! # Color Panel Component
//!
//! Centered overlay for changing the background palette at runtime. Opened
//! with `c` from browse mode.
//!
//! Two modes, switched with Tab:
//! - **Presets**: the eight named palettes; moving the selection applies it.
//! - **Color Slider**: ←/→ turn the base hue in 10° steps; `1`-`8` adopt one
//!   of the derived swatches as the new base.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ColorPanelState` lives in `TuiState`
//! - `ColorPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::core::palette::{Palette, PaletteSource, Preset, Rgb, derive};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const HUE_STEP: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Presets,
    Slider,
}

/// Events emitted by the color panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorPanelEvent {
    SelectPreset(Preset),
    SetBaseColor(Rgb),
    Dismiss,
}

/// Persistent state for the color panel overlay.
pub struct ColorPanelState {
    pub mode: PanelMode,
    pub selected: usize,
    pub list_state: ListState,
    pub base: Rgb,
}

impl ColorPanelState {
    /// Open on the mode matching where the palette currently comes from.
    pub fn new(current: PaletteSource) -> Self {
        let (mode, selected, base) = match current {
            PaletteSource::Preset(preset) => {
                let index = Preset::ALL.iter().position(|p| *p == preset).unwrap_or(0);
                (PanelMode::Presets, index, Rgb::from_hue(0))
            }
            PaletteSource::Manual(base) => (PanelMode::Slider, 0, base),
        };
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            mode,
            selected,
            list_state,
            base,
        }
    }

    fn select(&mut self, index: usize) -> Option<ColorPanelEvent> {
        if index == self.selected {
            return None;
        }
        self.selected = index;
        self.list_state.select(Some(index));
        Some(ColorPanelEvent::SelectPreset(Preset::ALL[index]))
    }

    fn set_base(&mut self, base: Rgb) -> Option<ColorPanelEvent> {
        self.base = base;
        Some(ColorPanelEvent::SetBaseColor(base))
    }

    fn turn_hue(&mut self, forward: bool) -> Option<ColorPanelEvent> {
        let hue = self.base.hue();
        let hue = if forward {
            (hue + HUE_STEP) % 360
        } else {
            (hue + 360 - HUE_STEP) % 360
        };
        self.set_base(Rgb::from_hue(hue))
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ColorPanelEvent> {
        match (self.mode, event) {
            (_, TuiEvent::Escape) => Some(ColorPanelEvent::Dismiss),
            (PanelMode::Presets, TuiEvent::Tab) => {
                self.mode = PanelMode::Slider;
                None
            }
            (PanelMode::Slider, TuiEvent::Tab) => {
                self.mode = PanelMode::Presets;
                None
            }
            (PanelMode::Presets, TuiEvent::CursorUp) => self.select(self.selected.saturating_sub(1)),
            (PanelMode::Presets, TuiEvent::CursorDown) => {
                self.select((self.selected + 1).min(Preset::ALL.len() - 1))
            }
            (PanelMode::Presets, TuiEvent::Submit) => {
                Some(ColorPanelEvent::SelectPreset(Preset::ALL[self.selected]))
            }
            (PanelMode::Slider, TuiEvent::CursorLeft) => self.turn_hue(false),
            (PanelMode::Slider, TuiEvent::CursorRight) => self.turn_hue(true),
            (PanelMode::Slider, TuiEvent::InputChar(c @ '1'..='8')) => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                self.set_base(derive(self.base)[index])
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the color panel overlay.
pub struct ColorPanel<'a> {
    state: &'a mut ColorPanelState,
    active: PaletteSource,
}

fn swatches(colors: &Palette, numbered: bool) -> Line<'static> {
    let spans = colors.iter().enumerate().flat_map(|(i, rgb)| {
        let label = if numbered {
            format!(" {} ", i + 1)
        } else {
            "   ".to_string()
        };
        [
            Span::styled(
                label,
                Style::default().bg(theme::color(*rgb)).fg(Color::White),
            ),
            Span::raw(" "),
        ]
    });
    Line::from(spans.collect::<Vec<_>>())
}

impl<'a> ColorPanel<'a> {
    pub fn new(state: &'a mut ColorPanelState, active: PaletteSource) -> Self {
        Self { state, active }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Colors ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Tab Mode  ↑↓/←→ Adjust  1-8 Pick  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [tabs, _, body, _, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let tab = |label: &'static str, mode: PanelMode| {
            if self.state.mode == mode {
                Span::styled(
                    format!(" {label} "),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                )
            } else {
                Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray))
            }
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                tab("Presets", PanelMode::Presets),
                Span::raw(" "),
                tab("Color Slider", PanelMode::Slider),
            ])),
            tabs,
        );

        match self.state.mode {
            PanelMode::Presets => self.render_presets(frame, body),
            PanelMode::Slider => self.render_slider(frame, body),
        }

        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("Active: {}", self.active.label()),
                Style::default().fg(Color::Gray),
            )),
            footer,
        );
    }

    fn render_presets(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = Preset::ALL
            .iter()
            .enumerate()
            .map(|(i, preset)| {
                let is_active = self.active == PaletteSource::Preset(*preset);
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let mut spans = vec![Span::styled(format!("{:<9}", preset.name()), style)];
                spans.push(Span::raw(" "));
                spans.extend(swatches(&preset.colors(), false).spans);
                ListItem::new(Line::from(spans))
            })
            .collect();
        frame.render_stateful_widget(List::new(items), area, &mut self.state.list_state);
    }

    fn render_slider(&self, frame: &mut Frame, area: Rect) {
        let current = self.state.base.hue() / HUE_STEP;
        let hue_bar: Vec<Span> = (0..360 / HUE_STEP)
            .map(|step| {
                let rgb = Rgb::from_hue(step * HUE_STEP);
                let symbol = if step == current { "▲" } else { " " };
                Span::styled(
                    symbol,
                    Style::default().bg(theme::color(rgb)).fg(Color::White),
                )
            })
            .collect();
        let lines = vec![
            Line::from(hue_bar),
            Line::default(),
            Line::from(vec![
                Span::raw("Base "),
                Span::styled("   ", Style::default().bg(theme::color(self.state.base))),
                Span::raw(format!(" {}", self.state.base.to_hex().to_uppercase())),
            ]),
            Line::default(),
            Line::raw("Derived range"),
            swatches(&derive(self.state.base), true),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn opens_on_the_active_source() {
        let state = ColorPanelState::new(PaletteSource::Preset(Preset::Ocean));
        assert_eq!(state.mode, PanelMode::Presets);
        assert_eq!(Preset::ALL[state.selected], Preset::Ocean);

        let base = Rgb::new(0, 255, 0);
        let state = ColorPanelState::new(PaletteSource::Manual(base));
        assert_eq!(state.mode, PanelMode::Slider);
        assert_eq!(state.base, base);
    }

    #[test]
    fn moving_selection_applies_preset() {
        let mut state = ColorPanelState::new(PaletteSource::Preset(Preset::ALL[0]));
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown),
            Some(ColorPanelEvent::SelectPreset(Preset::ALL[1]))
        );
    }

    #[test]
    fn slider_turns_hue_in_steps() {
        let mut state = ColorPanelState::new(PaletteSource::Manual(Rgb::from_hue(0)));
        assert_eq!(
            state.handle_event(&TuiEvent::CursorRight),
            Some(ColorPanelEvent::SetBaseColor(Rgb::from_hue(10)))
        );
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(
            state.handle_event(&TuiEvent::CursorLeft),
            Some(ColorPanelEvent::SetBaseColor(Rgb::from_hue(350)))
        );
    }

    #[test]
    fn number_keys_adopt_derived_swatch() {
        let base = Rgb::new(255, 0, 0);
        let mut state = ColorPanelState::new(PaletteSource::Manual(base));
        let expected = derive(base)[0];
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('1')),
            Some(ColorPanelEvent::SetBaseColor(expected))
        );
        assert_eq!(state.base.to_hex(), "#4d0000");
        assert_eq!(state.handle_event(&TuiEvent::InputChar('9')), None);
    }

    #[test]
    fn tab_switches_mode_and_escape_dismisses() {
        let mut state = ColorPanelState::new(PaletteSource::default());
        state.handle_event(&TuiEvent::Tab);
        assert_eq!(state.mode, PanelMode::Slider);
        state.handle_event(&TuiEvent::Tab);
        assert_eq!(state.mode, PanelMode::Presets);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(ColorPanelEvent::Dismiss)
        );
    }

    #[test]
    fn renders_both_modes() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ColorPanelState::new(PaletteSource::default());

        terminal
            .draw(|f| ColorPanel::new(&mut state, PaletteSource::default()).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Presets"));
        assert!(text.contains("ocean"));
        assert!(text.contains("Active: fire"));

        state.handle_event(&TuiEvent::Tab);
        terminal
            .draw(|f| ColorPanel::new(&mut state, PaletteSource::default()).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Derived range"));
        assert!(text.contains("#FF0000"));
    }
}
