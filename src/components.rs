//! Yew view components for the Digital Timer UI.
//!
//! `TimerDisplay`, `TimerControllers` and `LimitController` are stateless and
//! render from props only. `DigitalTimer` wires them to `use_digital_timer`.

use crate::config::{
    PAUSE_ICON_ALT, PAUSE_ICON_URL, PLAY_ICON_ALT, PLAY_ICON_URL, RESET_ICON_ALT, RESET_ICON_URL,
};
use crate::hooks::use_digital_timer;
use crate::TimerSnapshot;
use yew::prelude::*;

/// Remaining time and running status.
#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub snapshot: TimerSnapshot,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    html! {
        <div class="timer-display-container">
            <div class="elapsed-timer-container">
                <h1 class="elapsed-timer">{ props.snapshot.format_remaining() }</h1>
                <p class="elapsed-timer-status">{ props.snapshot.status_label() }</p>
            </div>
        </div>
    }
}

/// Start/pause and reset buttons.
#[derive(Properties, PartialEq)]
pub struct TimerControllersProps {
    pub is_running: bool,
    pub on_start_or_pause: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(TimerControllers)]
pub fn timer_controllers(props: &TimerControllersProps) -> Html {
    let (icon_url, icon_alt, label) = if props.is_running {
        (PAUSE_ICON_URL, PAUSE_ICON_ALT, "Pause")
    } else {
        (PLAY_ICON_URL, PLAY_ICON_ALT, "Start")
    };

    html! {
        <div class="timer-controller-main-container">
            <button
                class="start-or-pause-button"
                type="button"
                onclick={props.on_start_or_pause.clone()}
            >
                <img src={icon_url} alt={icon_alt} class="start-or-pause-icon" />
            </button>
            <p class="timer-controller-label">{ label }</p>
            <button
                class="start-or-pause-button"
                type="button"
                onclick={props.on_reset.clone()}
            >
                <img src={RESET_ICON_URL} alt={RESET_ICON_ALT} class="start-or-pause-icon" />
            </button>
            <p class="timer-controller-label">{ "Reset" }</p>
        </div>
    }
}

/// `-` / `+` buttons around the current limit in minutes.
#[derive(Properties, PartialEq)]
pub struct LimitControllerProps {
    pub limit_minutes: u32,
    pub disabled: bool,
    pub on_decrease: Callback<MouseEvent>,
    pub on_increase: Callback<MouseEvent>,
}

#[function_component(LimitController)]
pub fn limit_controller(props: &LimitControllerProps) -> Html {
    html! {
        <div class="timer-limit-controller-container">
            <p class="limit-label">{ "Set Timer limit" }</p>
            <div class="timer-limit-controller">
                <button
                    class="limit-controller-button"
                    type="button"
                    disabled={props.disabled}
                    onclick={props.on_decrease.clone()}
                >
                    { "-" }
                </button>
                <div class="limit-label-and-value-container">
                    <p class="limit-value">{ props.limit_minutes }</p>
                </div>
                <button
                    class="limit-controller-button"
                    type="button"
                    disabled={props.disabled}
                    onclick={props.on_increase.clone()}
                >
                    { "+" }
                </button>
            </div>
        </div>
    }
}

/// The complete timer widget.
#[function_component(DigitalTimer)]
pub fn digital_timer() -> Html {
    let timer = use_digital_timer();
    let snapshot = timer.snapshot;

    html! {
        <div class="app-container">
            <h1 class="heading">{ "Digital Timer" }</h1>
            <div class="digital-timer-container">
                <TimerDisplay {snapshot} />
                <div class="controls-main-container">
                    <TimerControllers
                        is_running={snapshot.is_running}
                        on_start_or_pause={timer.on_start_or_pause}
                        on_reset={timer.on_reset}
                    />
                    <LimitController
                        limit_minutes={snapshot.limit_minutes}
                        disabled={snapshot.limit_controls_disabled()}
                        on_decrease={timer.on_decrease_limit}
                        on_increase={timer.on_increase_limit}
                    />
                </div>
            </div>
        </div>
    }
}
