//! Core state for the Digital Timer widget.
//!
//! [`TimerState`] owns the countdown values and the handle of the periodic
//! tick. It knows nothing about Yew or the browser: ticks are registered
//! through a [`TickSource`], and releasing a tick means dropping its handle.

use log::{debug, info};
use serde::Serialize;

pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod ticker;
pub mod utils;

use config::{DEFAULT_LIMIT_MINUTES, MIN_LIMIT_MINUTES};
use utils::{format_remaining, limit_seconds, remaining_seconds};

/// Registers a callback firing once per second.
///
/// The returned handle keeps the registration alive. Dropping it cancels the
/// tick, so releasing an already released handle is a no-op.
pub trait TickSource {
    type Handle;

    fn every_second(&self) -> Self::Handle;
}

/// Plain copy of the timer values, used as render props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub is_running: bool,
    pub limit_minutes: u32,
    pub elapsed_seconds: u32,
}

impl TimerSnapshot {
    pub const INITIAL: TimerSnapshot = TimerSnapshot {
        is_running: false,
        limit_minutes: DEFAULT_LIMIT_MINUTES,
        elapsed_seconds: 0,
    };

    /// `true` once the elapsed time has reached the limit.
    pub fn is_completed(&self) -> bool {
        self.elapsed_seconds == limit_seconds(self.limit_minutes)
    }

    pub fn remaining_seconds(&self) -> u32 {
        remaining_seconds(self.limit_minutes, self.elapsed_seconds)
    }

    /// Remaining time as `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format_remaining(self.limit_minutes, self.elapsed_seconds)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_running {
            "Running"
        } else {
            "Paused"
        }
    }

    /// The limit can only be changed before the first tick.
    pub fn limit_controls_disabled(&self) -> bool {
        self.elapsed_seconds > 0
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Timer values plus the handle of the active tick, if any.
///
/// The timer is running exactly when a handle is held, so the two can never
/// disagree. Dropping the state drops the handle and cancels the tick.
#[derive(Debug)]
pub struct TimerState<H> {
    limit_minutes: u32,
    elapsed_seconds: u32,
    tick: Option<H>,
}

impl<H> Default for TimerState<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TimerState<H> {
    pub fn new() -> Self {
        Self {
            limit_minutes: DEFAULT_LIMIT_MINUTES,
            elapsed_seconds: 0,
            tick: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    pub fn limit_minutes(&self) -> u32 {
        self.limit_minutes
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn is_completed(&self) -> bool {
        self.snapshot().is_completed()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            is_running: self.is_running(),
            limit_minutes: self.limit_minutes,
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    pub fn format_remaining(&self) -> String {
        self.snapshot().format_remaining()
    }

    /// Start the countdown, or pause it if it is already running.
    ///
    /// A completed timer starts over from zero. A new tick is only registered
    /// when no handle is held, so there is never more than one.
    pub fn toggle_start_pause<S>(&mut self, source: &S)
    where
        S: TickSource<Handle = H>,
    {
        if self.is_completed() {
            debug!("Restarting completed {} minute timer", self.limit_minutes);
            self.elapsed_seconds = 0;
        }

        if self.release_tick() {
            info!("Timer paused at {}", self.format_remaining());
        } else {
            self.tick = Some(source.every_second());
            info!("Timer started at {}", self.format_remaining());
        }
    }

    /// Advance the countdown by one second. Called by the periodic tick.
    pub fn advance_tick(&mut self) {
        if !self.is_running() {
            debug!("Ignoring tick while paused");
            return;
        }

        if self.is_completed() {
            self.release_tick();
            info!("Timer reached its {} minute limit", self.limit_minutes);
            return;
        }

        self.elapsed_seconds += 1;
        debug!("Tick: {} remaining", self.format_remaining());

        // Stop on the tick that reaches the limit so the handle never outlives it.
        if self.is_completed() {
            self.release_tick();
            info!("Timer reached its {} minute limit", self.limit_minutes);
        }
    }

    /// Cancel any tick and restore the initial values.
    pub fn reset_timer(&mut self) {
        self.release_tick();
        self.limit_minutes = DEFAULT_LIMIT_MINUTES;
        self.elapsed_seconds = 0;
        info!("Timer reset");
    }

    pub fn increase_limit(&mut self) {
        if self.limit_locked() {
            return;
        }
        self.limit_minutes = self.limit_minutes.saturating_add(1);
        debug!("Limit increased to {} minutes", self.limit_minutes);
    }

    pub fn decrease_limit(&mut self) {
        if self.limit_locked() || self.limit_minutes <= MIN_LIMIT_MINUTES {
            return;
        }
        self.limit_minutes -= 1;
        debug!("Limit decreased to {} minutes", self.limit_minutes);
    }

    /// Release the tick when the widget goes away.
    pub fn teardown(&mut self) {
        if self.release_tick() {
            debug!("Released running tick on teardown");
        }
    }

    fn limit_locked(&self) -> bool {
        if self.elapsed_seconds > 0 {
            debug!("Limit is locked after {}s elapsed", self.elapsed_seconds);
            return true;
        }
        false
    }

    /// Drop the tick handle. Returns whether one was held.
    fn release_tick(&mut self) -> bool {
        self.tick.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Tick source that counts how many registrations are alive.
    #[derive(Default)]
    struct CountingTicks {
        live: Rc<Cell<usize>>,
        registered: Cell<usize>,
    }

    struct FakeTick(Rc<Cell<usize>>);

    impl Drop for FakeTick {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl TickSource for CountingTicks {
        type Handle = FakeTick;

        fn every_second(&self) -> FakeTick {
            self.live.set(self.live.get() + 1);
            self.registered.set(self.registered.get() + 1);
            FakeTick(self.live.clone())
        }
    }

    impl CountingTicks {
        fn live(&self) -> usize {
            self.live.get()
        }
    }

    fn timer() -> TimerState<FakeTick> {
        TimerState::new()
    }

    fn run_to_completion(state: &mut TimerState<FakeTick>) {
        while state.is_running() {
            state.advance_tick();
        }
    }

    #[test]
    fn initial_state_shows_default_limit() {
        let state = timer();
        assert_eq!(state.snapshot(), TimerSnapshot::INITIAL);
        assert_eq!(state.format_remaining(), "25:00");
        assert_eq!(state.snapshot().status_label(), "Paused");
    }

    #[test]
    fn increasing_limit_five_times() {
        let mut state = timer();
        for _ in 0..5 {
            state.increase_limit();
        }
        assert_eq!(state.limit_minutes(), 30);
        assert_eq!(state.format_remaining(), "30:00");
    }

    #[test]
    fn decrease_stops_at_one_minute() {
        let mut state = timer();
        for _ in 0..30 {
            state.decrease_limit();
        }
        assert_eq!(state.limit_minutes(), 1);
        state.decrease_limit();
        assert_eq!(state.limit_minutes(), 1);
    }

    #[test]
    fn first_tick_counts_down_one_second() {
        let ticks = CountingTicks::default();
        let mut state = timer();

        state.toggle_start_pause(&ticks);
        state.advance_tick();

        assert_eq!(state.elapsed_seconds(), 1);
        assert_eq!(state.format_remaining(), "24:59");
        assert_eq!(state.snapshot().status_label(), "Running");
        assert_eq!(ticks.live(), 1);
    }

    #[test]
    fn one_minute_timer_completes_after_sixty_ticks() {
        let ticks = CountingTicks::default();
        let mut state = timer();
        for _ in 0..24 {
            state.decrease_limit();
        }
        assert_eq!(state.limit_minutes(), 1);

        state.toggle_start_pause(&ticks);
        for _ in 0..60 {
            state.advance_tick();
        }

        assert!(!state.is_running());
        assert_eq!(state.elapsed_seconds(), 60);
        assert_eq!(state.format_remaining(), "00:00");
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn restarting_completed_timer_starts_from_zero() {
        let ticks = CountingTicks::default();
        let mut state = timer();
        state.toggle_start_pause(&ticks);
        run_to_completion(&mut state);
        assert!(state.is_completed());

        state.toggle_start_pause(&ticks);

        assert!(state.is_running());
        assert_eq!(state.elapsed_seconds(), 0);
        assert_eq!(ticks.live(), 1);
        assert_eq!(ticks.registered.get(), 2);
    }

    #[test]
    fn pause_releases_tick_and_keeps_elapsed() {
        let ticks = CountingTicks::default();
        let mut state = timer();
        state.toggle_start_pause(&ticks);
        state.advance_tick();
        state.advance_tick();

        state.toggle_start_pause(&ticks);

        assert!(!state.is_running());
        assert_eq!(state.elapsed_seconds(), 2);
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn stray_tick_while_paused_is_ignored() {
        let mut state = timer();
        state.advance_tick();
        assert_eq!(state.elapsed_seconds(), 0);
    }

    #[test]
    fn limit_is_locked_once_time_has_elapsed() {
        let ticks = CountingTicks::default();
        let mut state = timer();
        state.toggle_start_pause(&ticks);
        state.advance_tick();
        state.toggle_start_pause(&ticks);

        state.increase_limit();
        state.decrease_limit();

        assert_eq!(state.limit_minutes(), 25);
        assert!(state.snapshot().limit_controls_disabled());
    }

    #[test]
    fn limit_can_change_while_running_before_first_tick() {
        let ticks = CountingTicks::default();
        let mut state = timer();
        state.toggle_start_pause(&ticks);
        state.increase_limit();
        assert_eq!(state.limit_minutes(), 26);
    }

    #[test]
    fn reset_is_idempotent() {
        let ticks = CountingTicks::default();
        let mut state = timer();
        state.increase_limit();
        state.toggle_start_pause(&ticks);
        state.advance_tick();

        state.reset_timer();
        let once = state.snapshot();
        state.reset_timer();

        assert_eq!(once, TimerSnapshot::INITIAL);
        assert_eq!(state.snapshot(), once);
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn teardown_and_drop_release_tick() {
        let ticks = CountingTicks::default();
        let mut state = timer();
        state.toggle_start_pause(&ticks);
        state.teardown();
        state.teardown();
        assert!(!state.is_running());
        assert_eq!(ticks.live(), 0);

        state.toggle_start_pause(&ticks);
        assert_eq!(ticks.live(), 1);
        drop(state);
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn snapshot_serializes_as_flat_record() {
        let json = serde_json::to_value(TimerSnapshot::INITIAL).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "is_running": false,
                "limit_minutes": 25,
                "elapsed_seconds": 0,
            })
        );
    }

    fn limit_and_elapsed() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=99).prop_flat_map(|limit| (Just(limit), 0..=limit * 60))
    }

    proptest! {
        #[test]
        fn prop_remaining_is_two_digit_clock((limit, elapsed) in limit_and_elapsed()) {
            let snapshot = TimerSnapshot { is_running: false, limit_minutes: limit, elapsed_seconds: elapsed };
            let text = snapshot.format_remaining();
            let (minutes, seconds) = text.split_once(':').unwrap();

            prop_assert_eq!(minutes.len(), 2);
            prop_assert_eq!(seconds.len(), 2);
            prop_assert!(text.chars().filter(|c| *c != ':').all(|c| c.is_ascii_digit()));

            let minutes: u32 = minutes.parse().unwrap();
            let seconds: u32 = seconds.parse().unwrap();
            prop_assert!(seconds < 60);
            prop_assert_eq!(minutes * 60 + seconds, limit * 60 - elapsed);
        }

        #[test]
        fn prop_tick_handle_tracks_running(ops in prop::collection::vec(0u8..5, 0..400)) {
            let ticks = CountingTicks::default();
            let mut state = timer();

            for op in ops {
                match op {
                    0 => state.toggle_start_pause(&ticks),
                    1 => state.advance_tick(),
                    2 => state.reset_timer(),
                    3 => state.increase_limit(),
                    _ => state.decrease_limit(),
                }

                prop_assert_eq!(ticks.live(), usize::from(state.is_running()));
                prop_assert!(state.limit_minutes() >= MIN_LIMIT_MINUTES);
                prop_assert!(state.elapsed_seconds() <= state.limit_minutes() * 60);
                if state.is_completed() {
                    prop_assert!(!state.is_running());
                }
            }
        }
    }
}
