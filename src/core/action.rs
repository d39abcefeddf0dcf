//! # Actions
//!
//! Everything that can happen in Signal becomes an `Action`.
//! User submits the composer? That's `Action::Submit(text)`.
//! The typing driver ticks? That's `Action::TypingFrame { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing the I/O the caller
//! has to perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::palette::{PaletteSource, Preset, Rgb};
use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Composer submitted non-blank text.
    Submit(String),
    /// A section CTA was followed.
    FollowCta,
    /// Leave the dashboard for the landing page.
    NavigateBack,
    /// New placeholder text from the typing driver.
    TypingFrame { generation: u64, text: String },
    SelectPreset(Preset),
    SetBaseColor(Rgb),
    AttachRequested,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Start a typing driver tagged with `App::typing_generation`.
    StartTyping,
    /// Dispose the running typing driver.
    StopTyping,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if !app.on_landing() {
                return Effect::None;
            }
            let route = Route::get_started(&text);
            debug!(
                "Get started with {} chars of input",
                route.initial_input().map_or(0, |s| s.chars().count())
            );
            navigate(app, route)
        }
        Action::FollowCta => {
            if !app.on_landing() {
                return Effect::None;
            }
            navigate(
                app,
                Route::Dashboard {
                    initial_input: None,
                },
            )
        }
        Action::NavigateBack => {
            if app.on_landing() {
                return Effect::None;
            }
            navigate(app, Route::Landing)
        }
        Action::TypingFrame { generation, text } => {
            if generation == app.typing_generation && app.on_landing() {
                app.typing_text = text;
            }
            Effect::None
        }
        Action::SelectPreset(preset) => {
            info!("Palette preset: {}", preset.name());
            app.palette = PaletteSource::Preset(preset);
            app.status_message = format!("Palette: {}", app.palette.label());
            Effect::None
        }
        Action::SetBaseColor(base) => {
            info!("Palette base color: {}", base);
            app.palette = PaletteSource::Manual(base);
            app.status_message = format!("Palette: {}", app.palette.label());
            Effect::None
        }
        Action::AttachRequested => {
            info!("Attach requested");
            app.status_message = String::from("Attachments are not supported yet");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Switch routes, retiring the typing driver on the way out of the landing
/// page and asking for a fresh one on the way back in.
fn navigate(app: &mut App, route: Route) -> Effect {
    let was_landing = app.on_landing();
    info!("Navigating {} -> {}", app.route.path(), route.path());
    app.route = route;
    app.status_message.clear();

    match (was_landing, app.on_landing()) {
        (true, false) => {
            app.typing_generation += 1;
            app.typing_text.clear();
            Effect::StopTyping
        }
        (false, true) => {
            app.typing_generation += 1;
            app.typing_text.clear();
            Effect::StartTyping
        }
        _ => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_routes_to_dashboard_with_payload() {
        let mut app = App::new();
        let effect = update(&mut app, Action::Submit("Find leads for fintech".to_string()));
        assert_eq!(effect, Effect::StopTyping);
        assert_eq!(app.route.initial_input(), Some("Find leads for fintech"));
        assert_eq!(app.route.path(), "/dashboard");
    }

    #[test]
    fn test_blank_submit_routes_without_payload() {
        let mut app = App::new();
        update(&mut app, Action::Submit("   ".to_string()));
        assert_eq!(
            app.route,
            Route::Dashboard {
                initial_input: None
            }
        );
    }

    #[test]
    fn test_submit_ignored_off_landing() {
        let mut app = App::new();
        update(&mut app, Action::FollowCta);
        let effect = update(&mut app, Action::Submit("late".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.route.initial_input(), None);
    }

    #[test]
    fn test_cta_routes_to_dashboard_without_payload() {
        let mut app = App::new();
        let effect = update(&mut app, Action::FollowCta);
        assert_eq!(effect, Effect::StopTyping);
        assert_eq!(
            app.route,
            Route::Dashboard {
                initial_input: None
            }
        );
    }

    #[test]
    fn test_navigate_back_restarts_typing() {
        let mut app = App::new();
        update(&mut app, Action::FollowCta);
        let generation = app.typing_generation;

        let effect = update(&mut app, Action::NavigateBack);
        assert_eq!(effect, Effect::StartTyping);
        assert!(app.on_landing());
        assert!(app.typing_generation > generation);

        // Already on landing: nothing to do.
        assert_eq!(update(&mut app, Action::NavigateBack), Effect::None);
    }

    #[test]
    fn test_typing_frames_from_current_driver_apply() {
        let mut app = App::new();
        let generation = app.typing_generation;
        update(
            &mut app,
            Action::TypingFrame {
                generation,
                text: "Ide".to_string(),
            },
        );
        assert_eq!(app.typing_text, "Ide");
    }

    #[test]
    fn test_stale_typing_frames_are_ignored() {
        let mut app = App::new();
        let old = app.typing_generation;
        update(&mut app, Action::FollowCta);
        update(&mut app, Action::NavigateBack);

        update(
            &mut app,
            Action::TypingFrame {
                generation: old,
                text: "stale".to_string(),
            },
        );
        assert!(app.typing_text.is_empty());
    }

    #[test]
    fn test_typing_frames_ignored_on_dashboard() {
        let mut app = App::new();
        update(&mut app, Action::FollowCta);
        let generation = app.typing_generation;
        update(
            &mut app,
            Action::TypingFrame {
                generation,
                text: "x".to_string(),
            },
        );
        assert!(app.typing_text.is_empty());
    }

    #[test]
    fn test_palette_actions_switch_mode() {
        let mut app = App::new();
        update(&mut app, Action::SetBaseColor(Rgb::new(255, 0, 0)));
        assert_eq!(app.palette, PaletteSource::Manual(Rgb::new(255, 0, 0)));
        assert_eq!(app.status_message, "Palette: custom #FF0000");

        update(&mut app, Action::SelectPreset(Preset::Ocean));
        assert_eq!(app.palette, PaletteSource::Preset(Preset::Ocean));
        assert_eq!(app.status_message, "Palette: ocean");
    }

    #[test]
    fn test_attach_sets_status() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::AttachRequested), Effect::None);
        assert!(!app.status_message.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
