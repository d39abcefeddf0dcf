//! # TUI Components
//!
//! UI components for the two pages and their overlays.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from borrowed data:
//! - `NavBar`: brand, page links and status message
//! - `Hero`, `FloatingLines`, `SectionView`, `Overlay`: landing page pieces
//! - `Dashboard`: payload echo page
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it for
//! rendering:
//! - `Composer`: auto-resizing input with typing-effect placeholder
//! - `LandingState` / `LandingPage`: scroll, layout and overlay reveals
//! - `ColorPanelState` / `ColorPanel`: palette presets and color slider
//! - `TestPopupState` / `TestPopup`: preview modal
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── nav_bar.rs        (fixed top bar)
//! ├── composer/         (input field, wrapping, auto-resize)
//! ├── floating_lines.rs (animated background)
//! ├── hero.rs           (background + headline + composer)
//! ├── overlay.rs        (section illustrations)
//! ├── section.rs        (content section layout)
//! ├── landing.rs        (scrollable landing page)
//! ├── dashboard.rs      (dashboard stub)
//! ├── color_panel.rs    (palette controls overlay)
//! └── test_popup.rs     (preview modal)
//! ```

pub mod color_panel;
pub mod composer;
pub mod dashboard;
pub mod floating_lines;
pub mod hero;
pub mod landing;
pub mod nav_bar;
pub mod overlay;
pub mod section;
pub mod test_popup;

pub use color_panel::{ColorPanel, ColorPanelEvent, ColorPanelState};
pub use composer::ComposerEvent;
pub use dashboard::Dashboard;
pub use landing::{LandingPage, LandingState};
pub use nav_bar::NavBar;
pub use test_popup::{TestPopup, TestPopupEvent, TestPopupState};
