use yew::prelude::*;
use crate::common::error::ErrorMessage;
use crate::components::analysis::Results;
use crate::components::search::StationSearch;
use crate::hooks::use_station_app;

/// Station search and the analysis of the selected station.
#[function_component(Home)]
pub fn home() -> Html {
    let handle = use_station_app();
    let on_event = handle.callback();

    let (input, panel, view, error) = {
        let state = handle.state();
        (
            state.input().to_string(),
            state.panel().cloned(),
            state.view().clone(),
            state.error().map(|err| err.to_string()),
        )
    };

    html! {
        <>
            <StationSearch {input} {panel} on_event={on_event} />
            <ErrorMessage message={error} />
            <Results {view} />
        </>
    }
}
