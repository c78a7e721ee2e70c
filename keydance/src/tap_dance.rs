//! Tap dance: one physical key, several logical actions depending on how it's tapped.
//!
//! [`classify`] turns an observed dance into a [`DanceOutcome`]. [`TapDance`] is the per-key state
//! machine which counts taps, runs the settle timer and drives a [`Dispatcher`] through its
//! finished and reset edges.

use embassy_time::{Duration, Instant};

use crate::config::TapDanceConfig;
use crate::context::ContextResolver;
use crate::dispatcher::{DanceActionTable, Dispatcher};
use crate::host::KeyboardHost;

/// How a completed dance is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DanceOutcome {
    SingleTap,
    SingleHold,
    DoubleTap,
    DoubleHold,
    /// A tap, then a second tap which was interrupted by another key
    DoubleSingleTap,
    TripleTap,
    TripleHold,
    /// Taps beyond three, never dispatched
    Unknown,
}

/// Classify a dance.
///
/// `count` is the number of taps, `pressed` whether the key is still held when the dance finishes,
/// `interrupted` whether another key was pressed during the dance.
pub fn classify(count: u8, pressed: bool, interrupted: bool) -> DanceOutcome {
    match count {
        1 if interrupted || !pressed => DanceOutcome::SingleTap,
        1 => DanceOutcome::SingleHold,
        2 if interrupted => DanceOutcome::DoubleSingleTap,
        2 if pressed => DanceOutcome::DoubleHold,
        2 => DanceOutcome::DoubleTap,
        3 if interrupted || !pressed => DanceOutcome::TripleTap,
        3 => DanceOutcome::TripleHold,
        _ => DanceOutcome::Unknown,
    }
}

/// Observations of the current dance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceState {
    /// Number of presses since the dance started
    pub count: u8,
    /// Whether the key is held right now
    pub pressed: bool,
    /// Whether another key was pressed during the dance
    pub interrupted: bool,
    /// Whether the finished edge has fired
    pub finished: bool,
}

impl DanceState {
    /// No dance in progress
    pub fn is_idle(&self) -> bool {
        self.count == 0
    }

    pub fn outcome(&self) -> DanceOutcome {
        classify(self.count, self.pressed, self.interrupted)
    }
}

/// Tap dance state machine of a single key.
pub struct TapDance<R: ContextResolver, const N: usize> {
    state: DanceState,
    /// When the settle window of the latest press ends
    deadline: Option<Instant>,
    settle_term: Duration,
    dispatcher: Dispatcher<R, N>,
}

impl<R: ContextResolver, const N: usize> TapDance<R, N> {
    pub fn new(config: &TapDanceConfig, resolver: R, table: DanceActionTable<N>) -> Self {
        Self::with_dispatcher(config, Dispatcher::new(resolver, table))
    }

    pub fn with_dispatcher(config: &TapDanceConfig, dispatcher: Dispatcher<R, N>) -> Self {
        Self {
            state: DanceState::default(),
            deadline: None,
            settle_term: config.settle_term,
            dispatcher,
        }
    }

    pub fn state(&self) -> &DanceState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher<R, N> {
        &self.dispatcher
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// The dance key is pressed
    pub fn on_press<H: KeyboardHost>(&mut self, now: Instant, host: &mut H) {
        if self.state.finished {
            // Finished but not reset yet: the previous dance is over, start a new one
            self.reset(host);
        }
        self.state.count = self.state.count.saturating_add(1);
        self.state.pressed = true;
        self.deadline = Some(now + self.settle_term);
        debug!("Tap dance press, count: {}", self.state.count);
    }

    /// The dance key is released
    pub fn on_release<H: KeyboardHost>(&mut self, now: Instant, host: &mut H) {
        if self.state.is_idle() {
            return;
        }
        // Held past the settle window without a tick in between: still a hold
        self.tick(now, host);
        self.state.pressed = false;
        if self.state.finished {
            self.reset(host);
        }
    }

    /// Another key is pressed while this dance is open
    pub fn on_interrupt<H: KeyboardHost>(&mut self, host: &mut H) {
        if self.state.is_idle() || self.state.finished {
            return;
        }
        debug!("Tap dance interrupted at count {}", self.state.count);
        self.state.interrupted = true;
        self.finish(host);
        if !self.state.pressed {
            self.reset(host);
        }
    }

    /// Check the settle timer
    pub fn tick<H: KeyboardHost>(&mut self, now: Instant, host: &mut H) {
        if self.state.is_idle() || self.state.finished {
            return;
        }
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.finish(host);
            if !self.state.pressed {
                self.reset(host);
            }
        }
    }

    fn finish<H: KeyboardHost>(&mut self, host: &mut H) {
        self.state.finished = true;
        self.deadline = None;
        self.dispatcher.on_finished(&self.state, host);
    }

    fn reset<H: KeyboardHost>(&mut self, host: &mut H) {
        self.dispatcher.on_reset(host);
        self.state = DanceState::default();
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single() {
        assert_eq!(classify(1, false, false), DanceOutcome::SingleTap);
        assert_eq!(classify(1, true, false), DanceOutcome::SingleHold);
        assert_eq!(classify(1, true, true), DanceOutcome::SingleTap);
        assert_eq!(classify(1, false, true), DanceOutcome::SingleTap);
    }

    #[test]
    fn test_classify_double() {
        assert_eq!(classify(2, false, false), DanceOutcome::DoubleTap);
        assert_eq!(classify(2, true, false), DanceOutcome::DoubleHold);
        assert_eq!(classify(2, true, true), DanceOutcome::DoubleSingleTap);
        assert_eq!(classify(2, false, true), DanceOutcome::DoubleSingleTap);
    }

    #[test]
    fn test_classify_triple() {
        assert_eq!(classify(3, true, false), DanceOutcome::TripleHold);
        assert_eq!(classify(3, false, true), DanceOutcome::TripleTap);
        assert_eq!(classify(3, false, false), DanceOutcome::TripleTap);
        assert_eq!(classify(3, true, true), DanceOutcome::TripleTap);
    }

    #[test]
    fn test_classify_unknown() {
        for count in [0, 4, 5, u8::MAX] {
            for pressed in [false, true] {
                for interrupted in [false, true] {
                    assert_eq!(classify(count, pressed, interrupted), DanceOutcome::Unknown);
                }
            }
        }
    }

    #[test]
    fn test_classify_deterministic() {
        for count in 0..=5 {
            for pressed in [false, true] {
                for interrupted in [false, true] {
                    assert_eq!(
                        classify(count, pressed, interrupted),
                        classify(count, pressed, interrupted)
                    );
                }
            }
        }
    }

    #[test]
    fn test_state_outcome() {
        let state = DanceState {
            count: 2,
            pressed: true,
            interrupted: false,
            finished: false,
        };
        assert_eq!(state.outcome(), DanceOutcome::DoubleHold);
        assert!(DanceState::default().is_idle());
    }
}
