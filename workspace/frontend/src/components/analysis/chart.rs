use common::{AnalysisChart, ChartHandle};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div_id: &str) -> Result<(), JsValue>;
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Release the Plotly instance drawn for `chart`.
pub fn dispose(chart: ChartHandle) {
    log::debug!("Disposing chart #{}", chart.generation());
    if let Err(err) = purge(chart.element_id()) {
        log::warn!("Plotly.purge failed for chart #{}: {:?}", chart.generation(), err);
    }
}

fn draw(chart: ChartHandle, data: &AnalysisChart) {
    let (traces, layout, config) = match (to_js(&data.traces()), to_js(&data.layout()), to_js(&data.config())) {
        (Ok(traces), Ok(layout), Ok(config)) => (traces, layout, config),
        (traces, layout, config) => {
            log::error!(
                "Failed to convert chart #{}: {:?}",
                chart.generation(),
                traces.err().or(layout.err()).or(config.err())
            );
            return;
        }
    };

    log::debug!("Drawing chart #{} with {} points", chart.generation(), data.labels.len());
    if let Err(err) = new_plot(chart.element_id(), traces, layout, config) {
        log::error!("Plotly.newPlot failed for chart #{}: {:?}", chart.generation(), err);
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart: ChartHandle,
    pub data: AnalysisChart,
}

#[function_component(AnalysisChartView)]
pub fn analysis_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    {
        let data = props.data.clone();
        use_effect_with((container_ref.clone(), props.chart), move |(container_ref, chart)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(chart.element_id());
                draw(*chart, &data);
            }
            || ()
        });
    }

    html! {
        <div class="chart-container" style="position: relative; height: 400px; width: 100%;">
            <div ref={container_ref} style="width: 100%; height: 100%;"></div>
        </div>
    }
}
