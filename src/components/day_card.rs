use crate::components::mix_chart::MixChart;
use crate::models::chart::DayCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayCardViewProps {
    pub card: DayCard,
    /// Position in the forecast; keeps chart ids unique
    pub index: usize,
}

#[function_component(DayCardView)]
pub fn day_card_view(props: &DayCardViewProps) -> Html {
    let card = &props.card;
    let chart_id = AttrValue::from(format!("fuel-mix-chart-{}", props.index));

    html! {
        <div class="chart-card">
            <h2>{&card.title}</h2>
            <div class="chart-grid-layout">
                <div class="area-chart">
                    <MixChart {chart_id} series={card.series.clone()} />
                </div>

                <div class="area-score">
                    <div class="score-label">{"CLEAN ENERGY:"}</div>
                    <div class="score-value">
                        {&card.clean_energy}
                        <span class="leaf-icon">{" 🌿"}</span>
                    </div>
                </div>

                <div class="area-legend">
                    <ul class="custom-legend">
                        {
                            card.series.iter().map(|slice| {
                                let dot_style = format!("--dot-color: {}", slice.color);
                                html! {
                                    <li key={slice.label.clone()} title={slice.legend_text()}>
                                        <span class="color-dot" style={dot_style}></span>
                                        <span class="label-text">{format!("{}:", slice.label)}</span>
                                        <span class="label-value">{format!("{}%", slice.value)}</span>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>
        </div>
    }
}
