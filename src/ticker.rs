//! Browser tick source backed by `gloo_timers`.

use crate::config::TICK_INTERVAL_MS;
use crate::TickSource;
use gloo_timers::callback::Interval;
use yew::Callback;

/// Emits `on_tick` once per second for as long as the returned [`Interval`]
/// is held. Dropping the interval clears it.
#[derive(Clone)]
pub struct IntervalTicker {
    on_tick: Callback<()>,
}

impl IntervalTicker {
    pub fn new(on_tick: Callback<()>) -> Self {
        Self { on_tick }
    }
}

impl TickSource for IntervalTicker {
    type Handle = Interval;

    fn every_second(&self) -> Interval {
        let on_tick = self.on_tick.clone();
        Interval::new(TICK_INTERVAL_MS, move || on_tick.emit(()))
    }
}
