use common::controller::STATION_INPUT_ID;
use common::{ClickTarget, SuggestionPanel, UiEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Node};
use yew::prelude::*;
use super::suggestions::SuggestionList;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub input: String,
    pub panel: Option<SuggestionPanel>,
    pub on_event: Callback<UiEvent>,
}

fn classify_click(target: Option<Node>, input_ref: &NodeRef, panel_ref: &NodeRef) -> ClickTarget {
    let Some(target) = target else {
        return ClickTarget::Elsewhere;
    };

    if input_ref.get().is_some_and(|input| input.is_same_node(Some(&target))) {
        ClickTarget::Input
    } else if panel_ref.get().is_some_and(|panel| panel.contains(Some(&target))) {
        ClickTarget::Panel
    } else {
        ClickTarget::Elsewhere
    }
}

/// Station input with its autocomplete panel and the analysis button.
#[function_component(StationSearch)]
pub fn station_search(props: &Props) -> Html {
    let input_ref = use_node_ref();
    let panel_ref = use_node_ref();

    // Any click on the page may dismiss the panel.
    {
        let input_ref = input_ref.clone();
        let panel_ref = panel_ref.clone();
        let on_event = props.on_event.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let click = classify_click(target, &input_ref, &panel_ref);
                log::trace!("Document click on {:?}", click);
                on_event.emit(UiEvent::DocumentClicked(click));
            });

            let document = web_sys::window().and_then(|w| w.document());
            if let Some(document) = &document {
                if let Err(err) =
                    document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                {
                    log::error!("Failed to register document click listener: {:?}", err);
                }
            }

            move || {
                if let Some(document) = document {
                    let _ = document
                        .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }
                drop(listener);
            }
        });
    }

    let oninput = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::InputChanged(input.value()));
        })
    };

    let onclick_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::InputClicked))
    };

    let onclick_analyze = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Analysis button clicked");
            on_event.emit(UiEvent::AnalyzeClicked);
        })
    };

    html! {
        <div class="search">
            <div class="autocomplete">
                <input
                    id={STATION_INPUT_ID}
                    ref={input_ref}
                    type="text"
                    placeholder="Enter a station name"
                    autocomplete="off"
                    value={props.input.clone()}
                    {oninput}
                    onclick={onclick_input}
                />
                {if let Some(panel) = &props.panel {
                    html! {
                        <SuggestionList
                            panel={panel.clone()}
                            node_ref={panel_ref}
                            on_event={props.on_event.clone()}
                        />
                    }
                } else {
                    html! {}
                }}
            </div>
            <button id="analysisBtn" class="btn" onclick={onclick_analyze}>{"Get Analysis"}</button>
        </div>
    }
}
