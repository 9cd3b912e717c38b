use charming::{
    Chart as CharmingChart,
    element::{Color, ItemStyle, Label, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Pie,
};
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::chart::ChartSeries;

#[derive(Properties, PartialEq)]
pub struct MixChartProps {
    /// DOM id the chart is rendered into; must be unique on the page
    pub chart_id: AttrValue,
    pub series: ChartSeries,
}

/// Doughnut chart of one day's generation mix
#[function_component(MixChart)]
pub fn mix_chart(props: &MixChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.series.clone(), props.chart_id.clone(), container_ref),
            |(series, chart_id, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, chart_id, series);

                    let series = series.clone();
                    let chart_id = chart_id.clone();
                    EventListener::new(&gloo::utils::window(), "resize", move |_| {
                        render_chart(&container, &chart_id, &series);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="doughnut-container" ref={container_ref}>
            <div id={props.chart_id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, series: &ChartSeries) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series);
    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, &chart) {
        gloo::console::error!(format!("Render error for {chart_id}: {e:?}"));
    }
}

fn build_chart(series: &ChartSeries) -> CharmingChart {
    let colors: Vec<Color> = series
        .iter()
        .map(|slice| Color::from(slice.color.as_str()))
        .collect();

    let data: Vec<(f64, &str)> = series
        .iter()
        .map(|slice| (f64::from(slice.value), slice.label.as_str()))
        .collect();

    CharmingChart::new()
        .color(colors)
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(
            Pie::new()
                .radius(vec!["40%", "90%"])
                .label(Label::new().show(false))
                .item_style(ItemStyle::new().border_width(0))
                .data(data),
        )
}
