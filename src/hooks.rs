use crate::ticker::IntervalTicker;
use crate::{TimerSnapshot, TimerState};
use gloo_timers::callback::Interval;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

type SharedTimer = Rc<RefCell<TimerState<Interval>>>;

/// Current timer values and the callbacks wired to the four controls.
#[derive(Clone)]
pub struct DigitalTimerHandle {
    /// Values to render from.
    pub snapshot: TimerSnapshot,
    pub on_start_or_pause: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
    pub on_increase_limit: Callback<MouseEvent>,
    pub on_decrease_limit: Callback<MouseEvent>,
}

/// Apply `op` to the shared timer and schedule a re-render.
///
/// A timer that is already borrowed is left untouched; this only happens if a
/// tick fires while another mutation is still on the stack.
fn mutate_timer(
    timer: &SharedTimer,
    update: &UseForceUpdateHandle,
    op: impl FnOnce(&mut TimerState<Interval>),
) {
    match timer.try_borrow_mut() {
        Ok(mut state) => op(&mut state),
        Err(_) => {
            warn!("Timer state busy, dropping event");
            return;
        }
    }
    update.force_update();
}

/// Callback running `op` against the timer on every click.
fn click_callback(
    timer: &SharedTimer,
    update: &UseForceUpdateHandle,
    op: fn(&mut TimerState<Interval>),
) -> Callback<MouseEvent> {
    let timer = timer.clone();
    let update = update.clone();
    Callback::from(move |_: MouseEvent| mutate_timer(&timer, &update, op))
}

/// Custom hook owning the timer state for one `DigitalTimer` widget.
///
/// The interval callback only holds a weak reference to the state, and the
/// tick is released when the component unmounts.
#[hook]
pub fn use_digital_timer() -> DigitalTimerHandle {
    let timer: SharedTimer = use_mut_ref(TimerState::<Interval>::new);
    let update = use_force_update();

    let ticker = {
        let weak_timer = Rc::downgrade(&timer);
        let update = update.clone();
        IntervalTicker::new(Callback::from(move |()| {
            // The widget is gone; the interval is about to be dropped with it.
            let Some(timer) = weak_timer.upgrade() else {
                return;
            };
            mutate_timer(&timer, &update, TimerState::advance_tick);
        }))
    };

    // Cleanup on unmount
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                if let Ok(mut state) = timer.try_borrow_mut() {
                    state.teardown();
                }
            }
        });
    }

    let on_start_or_pause = {
        let timer = timer.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            mutate_timer(&timer, &update, |state| state.toggle_start_pause(&ticker))
        })
    };

    let snapshot = timer.borrow().snapshot();

    DigitalTimerHandle {
        snapshot,
        on_start_or_pause,
        on_reset: click_callback(&timer, &update, TimerState::reset_timer),
        on_increase_limit: click_callback(&timer, &update, TimerState::increase_limit),
        on_decrease_limit: click_callback(&timer, &update, TimerState::decrease_limit),
    }
}
