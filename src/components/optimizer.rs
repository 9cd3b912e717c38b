use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_optimal_window::OptimalWindowHandle;
use crate::models::charging::ChargeDuration;

#[derive(Properties, PartialEq)]
pub struct OptimizerPanelProps {
    pub optimal: OptimalWindowHandle,
}

/// Duration picker plus the latest optimal charging window.
///
/// Moving the slider only changes the local selection; the backend is asked again when
/// the button is pressed.
#[function_component(OptimizerPanel)]
pub fn optimizer_panel(props: &OptimizerPanelProps) -> Html {
    let selected = use_state(ChargeDuration::default);
    let state = &props.optimal.state;

    let on_input = {
        let selected = selected.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<ChargeDuration>() {
                Ok(duration) => selected.set(duration),
                Err(err) => gloo::console::warn!(format!("Ignoring slider value: {err}")),
            }
        })
    };

    let on_calculate = {
        let recompute = props.optimal.recompute.clone();
        let duration = *selected;
        Callback::from(move |_: MouseEvent| recompute.emit(duration))
    };

    let pending_text = match state.requested_duration() {
        Some(duration) => format!("Calculating {duration} window..."),
        None => "Calculating...".to_string(),
    };

    html! {
        <div class="optimizer-card">
            <h3 class="optimizer-title">{"Smart EV Charging Optimizer 🔋"}</h3>

            <div class="optimizer-flex-container">
                <div class="optimizer-controls">
                    <label class="duration-label">
                        {"Select Duration: "}<strong>{(*selected).to_string()}</strong>
                    </label>

                    <input
                        type="range"
                        min={ChargeDuration::MIN.hours().to_string()}
                        max={ChargeDuration::MAX.hours().to_string()}
                        value={selected.hours().to_string()}
                        oninput={on_input}
                    />

                    <button class="optimizer-btn" onclick={on_calculate}>
                        {"CALCULATE OPTIMAL WINDOW"}
                    </button>
                </div>

                <div class="result-container">
                    <div class="car-image" aria-hidden="true">{"🚗"}</div>

                    if let Some(message) = state.error() {
                        <div class="optimizer-notice" role="alert">
                            <p>{"⚠️ "}{message}</p>
                        </div>
                    }

                    if let Some(window) = state.window() {
                        <div class="window-stats">
                            <h3>{"OPTIMAL WINDOW FOUND"}</h3>
                            <div class="stats-row">
                                <span>{"START:"}</span>{" "}<strong>{window.start_label()}</strong>
                            </div>
                            <div class="stats-row">
                                <span>{"END:"}</span>{" "}<strong>{window.end_label()}</strong>
                            </div>
                            <div class="stats-highlight">
                                {format!("AVG. CLEAN ENERGY: {} 🌿", window.average_label())}
                            </div>
                        </div>
                    } else if state.is_pending() {
                        <p class="optimizer-pending">{pending_text}</p>
                    }
                </div>
            </div>
        </div>
    }
}
