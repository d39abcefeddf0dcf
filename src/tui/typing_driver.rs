//! Timer task for the composer's typing placeholder.
//!
//! The state machine lives in [`crate::core::typing`]; this module feeds it
//! real time from a tokio task and forwards display changes to the event loop
//! as [`Action::TypingFrame`]s tagged with the driver's generation.
//!
//! ```text
//!  tokio task                              event loop
//!  ┌─────────────────────────┐   mpsc     ┌──────────────────────┐
//!  │ sleep(until_next_step)  │──────────▶│ update(TypingFrame)   │
//!  │ clock.advance(waited)   │  Action    │ (stale gens dropped) │
//!  └─────────────────────────┘            └──────────────────────┘
//!             ▲ abort() on dispose / drop
//! ```

use log::{debug, info};
use std::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{Instant, sleep};

use crate::core::action::Action;
use crate::core::typing::{TypingClock, TypingEffect};

/// Handle to a running typing animation.
///
/// Dropping the handle stops the animation.
pub struct TypingDriver {
    generation: u64,
    handle: Option<AbortHandle>,
}

impl TypingDriver {
    /// Spawn the timer task. Returns `None` when there are no phrases to type.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(phrases: &[String], generation: u64, tx: mpsc::Sender<Action>) -> Option<Self> {
        let effect = TypingEffect::new(phrases)?;
        info!("Typing driver {} started", generation);

        let task = tokio::spawn(async move {
            let mut clock = TypingClock::new(effect);
            loop {
                let wait = clock.until_next_step();
                let started = Instant::now();
                sleep(wait).await;
                if clock.advance(started.elapsed()) {
                    let frame = Action::TypingFrame {
                        generation,
                        text: clock.display(),
                    };
                    if tx.send(frame).is_err() {
                        debug!("Typing driver {}: receiver dropped", generation);
                        return;
                    }
                }
            }
        });

        Some(Self {
            generation,
            handle: Some(task.abort_handle()),
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the pending step. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Typing driver {} disposed", self.generation);
        }
    }
}

impl Drop for TypingDriver {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn drain(rx: &mpsc::Receiver<Action>) -> Vec<String> {
        let mut texts = Vec::new();
        while let Ok(action) = rx.try_recv() {
            if let Action::TypingFrame { text, .. } = action {
                texts.push(text);
            }
        }
        texts
    }

    #[test]
    fn no_phrases_means_no_driver() {
        let (tx, _rx) = mpsc::channel();
        // Returns before spawning, so no runtime is needed.
        assert!(TypingDriver::start(&[], 0, tx.clone()).is_none());
        assert!(TypingDriver::start(&phrases(&[""]), 0, tx).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn types_after_initial_delay() {
        let (tx, rx) = mpsc::channel();
        let driver = TypingDriver::start(&phrases(&["Hi"]), 7, tx).unwrap();
        assert_eq!(driver.generation(), 7);

        sleep(Duration::from_millis(990)).await;
        assert!(drain(&rx).is_empty());

        sleep(Duration::from_millis(150)).await;
        let frames = drain(&rx);
        assert_eq!(frames, vec!["H".to_string(), "Hi".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn frames_carry_generation() {
        let (tx, rx) = mpsc::channel();
        let _driver = TypingDriver::start(&phrases(&["ab"]), 42, tx).unwrap();
        sleep(Duration::from_millis(1050)).await;
        match rx.try_recv() {
            Ok(Action::TypingFrame { generation, text }) => {
                assert_eq!(generation, 42);
                assert_eq!(text, "a");
            }
            other => panic!("expected a typing frame, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_stops_frames() {
        let (tx, rx) = mpsc::channel();
        let mut driver = TypingDriver::start(&phrases(&["Hello"]), 1, tx).unwrap();
        sleep(Duration::from_millis(1050)).await;
        assert_eq!(drain(&rx), vec!["H".to_string()]);

        driver.dispose();
        driver.dispose();
        sleep(Duration::from_secs(10)).await;
        assert!(drain(&rx).is_empty());
        assert!(!driver.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_frames() {
        let (tx, rx) = mpsc::channel();
        let driver = TypingDriver::start(&phrases(&["Hello"]), 1, tx).unwrap();
        drop(driver);
        sleep(Duration::from_secs(5)).await;
        assert!(drain(&rx).is_empty());
    }
}
