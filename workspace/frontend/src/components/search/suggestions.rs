use common::autocomplete::PANEL_CLASS;
use common::{SuggestionPanel, UiEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub panel: SuggestionPanel,
    pub node_ref: NodeRef,
    pub on_event: Callback<UiEvent>,
}

/// Dropdown under the station input, matched prefix in bold.
#[function_component(SuggestionList)]
pub fn suggestion_list(props: &Props) -> Html {
    html! {
        <div id={props.panel.id().to_string()} class={PANEL_CLASS} ref={props.node_ref.clone()}>
            { for props.panel.suggestions().iter().map(|suggestion| {
                let station = suggestion.station().clone();
                let on_event = props.on_event.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    log::debug!("Suggestion selected: {}", station);
                    on_event.emit(UiEvent::SuggestionSelected(station.clone()));
                });

                html! {
                    <div key={suggestion.station().name().to_string()} {onclick}>
                        <strong>{suggestion.prefix().to_string()}</strong>
                        {suggestion.rest().to_string()}
                    </div>
                }
            })}
        </div>
    }
}
