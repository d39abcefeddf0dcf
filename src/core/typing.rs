//! # Typing Effect
//!
//! The animated composer placeholder: phrases are typed out one character at a
//! time, held, deleted, and the next phrase begins.
//!
//! ```text
//!            +100ms/char                 +30ms/char
//!  ┌────────┐  full   ┌─────────────────┐ ┌─────────┐  empty  ┌───────────────────┐
//!  │ Typing │───────▶│ PausedAfterType │▶│ Deleting │───────▶│ PausedAfterDelete │
//!  └────────┘ +2000ms └─────────────────┘ └─────────┘ +500ms  └───────────────────┘
//!      ▲                                                             │
//!      └────────────────────── next phrase ──────────────────────────┘
//! ```
//!
//! [`TypingEffect`] is the state machine: one [`step`](TypingEffect::step) call
//! applies one transition and returns how long to wait before the next one.
//! [`TypingClock`] drives it from elapsed time, so the whole cycle can be
//! replayed without sleeping. The timer task that feeds real time into a clock
//! lives in the TUI layer.

use std::time::Duration;

/// Delay before the first step after the effect is started.
pub const INITIAL_DELAY: Duration = Duration::from_millis(1000);
/// Delay after revealing one character.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay after removing one character.
pub const DELETE_DELAY: Duration = Duration::from_millis(30);
/// Pause with the full phrase on screen before deleting starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Pause on an empty display before the next phrase starts.
pub const SWITCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausedAfterType,
    Deleting,
    PausedAfterDelete,
}

/// Cursor state of the typing animation over a fixed phrase list.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    /// Number of characters of the current phrase on display.
    char_index: usize,
    phase: TypingPhase,
}

impl TypingEffect {
    /// Build an effect over `phrases`, skipping empty ones.
    ///
    /// Returns `None` when nothing is left to type.
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .filter(|p| !p.is_empty())
            .collect();
        (!phrases.is_empty()).then_some(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn current_phrase(&self) -> String {
        self.phrases[self.phrase_index].iter().collect()
    }

    /// The visible prefix of the current phrase.
    pub fn display(&self) -> String {
        self.phrases[self.phrase_index][..self.char_index]
            .iter()
            .collect()
    }

    /// Apply one transition. Returns the delay before the next step.
    pub fn step(&mut self) -> Duration {
        let len = self.phrases[self.phrase_index].len();
        match self.phase {
            TypingPhase::Typing if self.char_index < len => {
                self.char_index += 1;
                TYPE_DELAY
            }
            TypingPhase::Typing => {
                self.phase = TypingPhase::PausedAfterType;
                HOLD_DELAY
            }
            TypingPhase::PausedAfterType => {
                self.phase = TypingPhase::Deleting;
                self.step()
            }
            TypingPhase::Deleting if self.char_index > 0 => {
                self.char_index -= 1;
                DELETE_DELAY
            }
            TypingPhase::Deleting => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = TypingPhase::PausedAfterDelete;
                SWITCH_DELAY
            }
            TypingPhase::PausedAfterDelete => {
                self.phase = TypingPhase::Typing;
                self.step()
            }
        }
    }
}

/// Runs a [`TypingEffect`] against a clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct TypingClock {
    effect: TypingEffect,
    now: Duration,
    next_step_at: Duration,
}

impl TypingClock {
    pub fn new(effect: TypingEffect) -> Self {
        Self {
            effect,
            now: Duration::ZERO,
            next_step_at: INITIAL_DELAY,
        }
    }

    pub fn effect(&self) -> &TypingEffect {
        &self.effect
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn display(&self) -> String {
        self.effect.display()
    }

    /// Time left until the next step is due.
    pub fn until_next_step(&self) -> Duration {
        self.next_step_at.saturating_sub(self.now)
    }

    /// Move the clock forward, running every step that falls due.
    ///
    /// Returns `true` if the displayed text changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.now += elapsed;
        let before = self.effect.display();
        while self.next_step_at <= self.now {
            let delay = self.effect.step();
            self.next_step_at += delay;
        }
        before != self.effect.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn clock(phrases: &[&str]) -> TypingClock {
        TypingClock::new(TypingEffect::new(phrases.iter().copied()).unwrap())
    }

    #[test]
    fn empty_phrase_list_yields_no_effect() {
        assert!(TypingEffect::new(Vec::<String>::new()).is_none());
        assert!(TypingEffect::new(["", ""]).is_none());
    }

    #[test]
    fn empty_phrases_are_skipped() {
        let effect = TypingEffect::new(["", "ab", ""]).unwrap();
        assert_eq!(effect.current_phrase(), "ab");
    }

    #[test]
    fn nothing_shows_before_initial_delay() {
        let mut clock = clock(&["hello"]);
        assert!(!clock.advance(999 * MS));
        assert_eq!(clock.display(), "");
        assert!(clock.advance(MS));
        assert_eq!(clock.display(), "h");
    }

    #[test]
    fn types_one_char_per_100ms() {
        let mut clock = clock(&["hello"]);
        clock.advance(INITIAL_DELAY);
        assert_eq!(clock.display(), "h");
        clock.advance(99 * MS);
        assert_eq!(clock.display(), "h");
        clock.advance(MS);
        assert_eq!(clock.display(), "he");
        clock.advance(300 * MS);
        assert_eq!(clock.display(), "hello");
    }

    #[test]
    fn holds_full_phrase_then_deletes_at_30ms() {
        let mut clock = clock(&["abc"]);
        // 'a' at 1000, 'b' at 1100, 'c' at 1200, hold decided at 1300
        clock.advance(1300 * MS);
        assert_eq!(clock.effect().phase(), TypingPhase::PausedAfterType);
        clock.advance(1999 * MS);
        assert_eq!(clock.display(), "abc");
        clock.advance(MS);
        assert_eq!(clock.display(), "ab");
        assert_eq!(clock.effect().phase(), TypingPhase::Deleting);
        clock.advance(30 * MS);
        assert_eq!(clock.display(), "a");
        clock.advance(30 * MS);
        assert_eq!(clock.display(), "");
    }

    #[test]
    fn switches_phrase_after_500ms_pause() {
        let mut clock = clock(&["ab", "xy"]);
        // typed by 1100, hold from 1200, deletes at 3200 and 3230, switch at 3260
        clock.advance(3260 * MS);
        assert_eq!(clock.effect().phase(), TypingPhase::PausedAfterDelete);
        assert_eq!(clock.effect().phrase_index(), 1);
        assert_eq!(clock.display(), "");
        clock.advance(499 * MS);
        assert_eq!(clock.display(), "");
        clock.advance(MS);
        assert_eq!(clock.display(), "x");
    }

    #[test]
    fn phrase_index_wraps_around() {
        let mut effect = TypingEffect::new(["a", "b"]).unwrap();
        let mut seen = Vec::new();
        for _ in 0..40 {
            effect.step();
            seen.push(effect.phrase_index());
        }
        assert!(seen.contains(&1));
        assert!(seen.iter().all(|&i| i < 2));
        // Back on the first phrase after the second one was deleted.
        assert_eq!(seen.last(), Some(&0));
    }

    #[test]
    fn display_is_always_a_prefix_over_a_full_cycle() {
        let phrase = "Find leads";
        let mut clock = clock(&[phrase]);
        let mut samples: Vec<(Duration, String)> = Vec::new();
        // Typed 1000..=1900, hold from 2000, deleted 4000..=4270, next phrase at 4800.
        while clock.now() < Duration::from_millis(4500) {
            clock.advance(10 * MS);
            samples.push((clock.now(), clock.display()));
        }

        for (_, text) in &samples {
            assert!(phrase.starts_with(text.as_str()), "{text:?} is not a prefix");
        }

        // Instants the length changed, with the new length.
        let mut changes: Vec<(Duration, usize)> = Vec::new();
        let mut last_len = 0;
        for (at, text) in &samples {
            let len = text.chars().count();
            if len != last_len {
                assert_eq!(len.abs_diff(last_len), 1, "jumped at {at:?}");
                changes.push((*at, len));
                last_len = len;
            }
        }

        let peak = changes
            .iter()
            .position(|&(_, len)| len == phrase.len())
            .expect("phrase fully typed");
        let (rising, falling) = changes.split_at(peak + 1);

        assert_eq!(rising.len(), phrase.len());
        assert!(rising.windows(2).all(|w| w[1].0 - w[0].0 == TYPE_DELAY));
        assert_eq!(falling.len(), phrase.len());
        assert!(falling.windows(2).all(|w| w[1].0 - w[0].0 == DELETE_DELAY));
        assert_eq!(falling[0].0 - rising[peak].0, TYPE_DELAY + HOLD_DELAY);
        assert_eq!(falling.last().map(|c| c.1), Some(0));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut effect = TypingEffect::new(["café"]).unwrap();
        for _ in 0..4 {
            effect.step();
        }
        assert_eq!(effect.display(), "café");
    }

    #[test]
    fn until_next_step_tracks_schedule() {
        let mut clock = clock(&["ab"]);
        assert_eq!(clock.until_next_step(), INITIAL_DELAY);
        clock.advance(INITIAL_DELAY);
        assert_eq!(clock.until_next_step(), TYPE_DELAY);
    }
}
