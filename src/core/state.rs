//! # Application State
//!
//! Core page state for Signal. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── route: Route                  // landing or dashboard (+ payload)
//! ├── status_message: String        // nav bar status text
//! ├── palette: PaletteSource        // preset or manual base color
//! ├── line_count / animation_speed  // floating-lines background
//! ├── phrases / placeholder         // composer placeholder copy
//! ├── min_lines / max_lines         // composer auto-resize bounds
//! ├── typing_generation: u64        // id of the live typing driver
//! └── typing_text: String           // last frame from that driver
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::palette::{Palette, PaletteSource};
use crate::core::route::Route;

pub struct App {
    pub route: Route,
    pub status_message: String,
    pub palette: PaletteSource,
    pub line_count: u8,
    pub animation_speed: f32,
    pub phrases: Vec<String>,
    /// Shown when there are no phrases to animate.
    pub placeholder: String,
    pub min_lines: u16,
    pub max_lines: u16,
    /// Bumped every time the typing driver is replaced; frames tagged with an
    /// older generation are dropped.
    pub typing_generation: u64,
    pub typing_text: String,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            route: config.initial_route.clone(),
            status_message: String::new(),
            palette: config.palette,
            line_count: config.line_count,
            animation_speed: config.animation_speed,
            phrases: config.phrases.clone(),
            placeholder: config.placeholder.clone(),
            min_lines: config.min_lines,
            max_lines: config.max_lines,
            typing_generation: 0,
            typing_text: String::new(),
        }
    }

    pub fn colors(&self) -> Palette {
        self.palette.colors()
    }

    pub fn on_landing(&self) -> bool {
        self.route == Route::Landing
    }

    /// Text shown in the empty composer: the typing animation when there are
    /// phrases to cycle, the static placeholder otherwise.
    pub fn composer_placeholder(&self) -> &str {
        if self.phrases.iter().any(|p| !p.is_empty()) {
            &self.typing_text
        } else {
            &self.placeholder
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
