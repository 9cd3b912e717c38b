use crate::hooks::use_forecast::ForecastState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: ForecastState,
}

/// Full-page placeholder while the forecast is loading or after it failed.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        ForecastState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading... ⏳"}</p>
            </div>
        },
        ForecastState::Loaded(_) => html! {},
        ForecastState::Error(msg) => html! {
            <div class="status error">
                <h2>{"Oops! Something went wrong 🔌"}</h2>
                <p>{msg}</p>
                <button class="optimizer-btn retry-btn" onclick={Callback::from(|_: MouseEvent| reload_page())}>
                    {"TRY AGAIN"}
                </button>
            </div>
        },
    }
}

/// Recovery from a failed forecast is a full page reload.
fn reload_page() {
    let reloaded = gloo::utils::window().location().reload();
    if let Err(e) = reloaded {
        gloo::console::error!(format!("Failed to reload page: {e:?}"));
    }
}
