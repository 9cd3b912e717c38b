use std::rc::Rc;
use yew::prelude::*;

use crate::components::day_card::DayCardView;
use crate::components::optimizer::OptimizerPanel;
use crate::components::status::Status;
use crate::hooks::use_forecast::{ForecastState, use_forecast};
use crate::hooks::use_optimal_window::use_optimal_window;
use crate::models::palette::FuelPalette;
use crate::services::api::DashboardClient;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub client: Rc<DashboardClient>,
    pub palette: Rc<FuelPalette>,
}

/// Root view. Both backend requests start on mount; the page shows a placeholder until the
/// forecast settles, while the optimizer panel tracks its own request independently.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let forecast = use_forecast(props.client.clone());
    let optimal = use_optimal_window(props.client.clone());

    let cards = use_memo(
        ((*forecast).clone(), props.palette.clone()),
        |(state, palette)| state.day_cards(palette),
    );

    match &*forecast {
        ForecastState::Loaded(_) => html! {
            <div class="container">
                <h1>{"UK Clean Energy Tracker & EV Optimizer"}</h1>

                <div class="charts-wrapper">
                    {
                        cards.iter().enumerate().map(|(index, card)| html! {
                            <DayCardView key={card.date.to_string()} card={card.clone()} {index} />
                        }).collect::<Html>()
                    }
                </div>

                <OptimizerPanel {optimal} />
            </div>
        },
        state => html! {
            <div class="container">
                <Status state={state.clone()} />
            </div>
        },
    }
}
