//! # Overlay Reveal
//!
//! Decorative illustrations animate in the first time enough of them scrolls
//! into view, and never again for the lifetime of that instance.
//!
//! ```text
//! hidden ──(visible fraction >= 0.3)──▶ triggered at t ──▶ entrance plays
//!    ▲                                        │
//!    └──────────── never ◀── scroll out ──────┘
//! ```
//!
//! Time is passed in as `Duration` since application start, so tests can pick
//! any instant they like.

use std::time::Duration;

/// Fraction of an overlay that must be on screen to start its entrance.
pub const REVEAL_THRESHOLD: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayVariant {
    Strategy,
    Analytics,
    Leads,
    About,
    Compact,
}

/// Starting pose and timing of an entrance animation.
///
/// Offsets are in terminal cells and shrink to zero as the entrance plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from_dx: i16,
    pub from_dy: i16,
    pub from_scale: f32,
    pub duration: Duration,
    pub delay: Duration,
}

impl OverlayVariant {
    pub fn name(self) -> &'static str {
        match self {
            OverlayVariant::Strategy => "strategy",
            OverlayVariant::Analytics => "analytics",
            OverlayVariant::Leads => "leads",
            OverlayVariant::About => "about",
            OverlayVariant::Compact => "compact",
        }
    }

    pub fn entrance(self) -> Entrance {
        match self {
            // Rises from below.
            OverlayVariant::About => Entrance {
                from_dx: 0,
                from_dy: 3,
                from_scale: 0.9,
                duration: Duration::from_millis(1000),
                delay: Duration::from_millis(200),
            },
            // Slides in from the left.
            OverlayVariant::Compact => Entrance {
                from_dx: -6,
                from_dy: 0,
                from_scale: 0.95,
                duration: Duration::from_millis(600),
                delay: Duration::from_millis(100),
            },
            OverlayVariant::Strategy | OverlayVariant::Analytics | OverlayVariant::Leads => {
                Entrance {
                    from_dx: 0,
                    from_dy: 0,
                    from_scale: 0.8,
                    duration: Duration::from_millis(800),
                    delay: Duration::ZERO,
                }
            }
        }
    }
}

/// Pose of an overlay at one instant of its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    pub dx: i16,
    pub dy: i16,
    pub scale: f32,
}

/// How much of `[top, top + height)` lies inside `[viewport_top, viewport_top + viewport_height)`.
pub fn visible_fraction(top: u16, height: u16, viewport_top: u16, viewport_height: u16) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let start = u32::from(top).max(u32::from(viewport_top));
    let end = (u32::from(top) + u32::from(height))
        .min(u32::from(viewport_top) + u32::from(viewport_height));
    if end <= start {
        return 0.0;
    }
    (end - start) as f32 / f32::from(height)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Show-once entrance state for one mounted overlay.
#[derive(Debug, Clone)]
pub struct Reveal {
    variant: OverlayVariant,
    triggered_at: Option<Duration>,
}

impl Reveal {
    pub fn new(variant: OverlayVariant) -> Self {
        Self {
            variant,
            triggered_at: None,
        }
    }

    pub fn variant(&self) -> OverlayVariant {
        self.variant
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Feed the current visible fraction. Returns `true` only on the call that
    /// starts the entrance.
    pub fn observe(&mut self, fraction: f32, now: Duration) -> bool {
        if self.triggered_at.is_some() || fraction < REVEAL_THRESHOLD {
            return false;
        }
        self.triggered_at = Some(now);
        true
    }

    /// Eased entrance progress in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        let Some(start) = self.triggered_at else {
            return 0.0;
        };
        let entrance = self.variant.entrance();
        let elapsed = now.saturating_sub(start + entrance.delay);
        let t = (elapsed.as_secs_f32() / entrance.duration.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }

    /// Whether the entrance is still playing (the caller should keep redrawing).
    pub fn is_animating(&self, now: Duration) -> bool {
        self.is_triggered() && self.progress(now) < 1.0
    }

    pub fn frame(&self, now: Duration) -> EntranceFrame {
        let entrance = self.variant.entrance();
        let p = self.progress(now);
        EntranceFrame {
            opacity: p,
            dx: lerp(f32::from(entrance.from_dx), 0.0, p).round() as i16,
            dy: lerp(f32::from(entrance.from_dy), 0.0, p).round() as i16,
            scale: lerp(entrance.from_scale, 1.0, p),
        }
    }
}
