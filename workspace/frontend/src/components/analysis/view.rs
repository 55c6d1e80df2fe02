use common::AnalysisView;
use yew::prelude::*;
use super::chart::AnalysisChartView;
use super::table::AnalysisTableView;
use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: AnalysisView,
}

/// The `results` area: placeholder while loading, chart above table once
/// the analysis is in, empty otherwise.
#[function_component(Results)]
pub fn results(props: &Props) -> Html {
    let content = match &props.view {
        AnalysisView::Idle | AnalysisView::Failed { .. } => html! {},
        AnalysisView::Loading { station } => {
            log::trace!("Rendering loading placeholder for {}", station);
            html! { <Loading text="Loading analysis..." /> }
        }
        AnalysisView::Ready(report) => html! {
            <>
                <AnalysisChartView chart={report.chart} data={report.chart_data()} />
                <AnalysisTableView table={report.table()} />
            </>
        },
    };

    html! {
        <div id="results">
            { content }
        </div>
    }
}
