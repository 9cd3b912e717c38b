use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chart::{DayCard, day_cards};
use crate::models::energy::ForecastSequence;
use crate::models::error::AppError;
use crate::models::palette::FuelPalette;
use crate::services::api::{DashboardClient, EnergyApi};

#[derive(Clone, PartialEq, Debug)]
pub enum ForecastState {
    Loading,
    Loaded(Rc<ForecastSequence>),
    Error(String),
}

impl ForecastState {
    /// Settles a finished forecast request. The cause of a failure is not kept; only the
    /// fixed user-facing message is.
    pub fn from_result(result: Result<ForecastSequence, AppError>) -> Self {
        match result {
            Ok(days) => Self::Loaded(Rc::new(days)),
            Err(_) => Self::Error(Config::FORECAST_ERROR_MESSAGE.to_string()),
        }
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<ForecastSequence>> {
        match self {
            Self::Loaded(days) => Some(days),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Chart cards for the loaded forecast; empty while loading or after a failure.
    pub fn day_cards(&self, palette: &FuelPalette) -> Vec<DayCard> {
        self.data()
            .map(|days| day_cards(days, palette))
            .unwrap_or_default()
    }
}

/// Fetches the forecast exactly once per mount. There is no polling and no retry.
#[hook]
pub fn use_forecast(client: Rc<DashboardClient>) -> UseStateHandle<ForecastState> {
    let state = use_state(|| ForecastState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = client.fetch_forecast().await;

                if aborted_check.get() {
                    return; // Unmounted while in flight
                }

                match &result {
                    Ok(days) => {
                        gloo::console::log!(format!("Forecast loaded: {} days", days.len()));
                    }
                    Err(e) => gloo::console::error!(format!("Error fetching forecast: {e}")),
                }
                state.set(ForecastState::from_result(result));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
