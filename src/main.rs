//! Entry point for the Digital Timer app.

use digital_timer::components::DigitalTimer;
use digital_timer::config::LOG_LEVEL;
use digital_timer::logging;
use yew::prelude::*;

/// Root component.
#[function_component]
pub fn App() -> Html {
    html! {
        <DigitalTimer />
    }
}

/// Entry point: installs panic/log hooks and renders the app.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    logging::init(LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
