use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// The `error-message` area. Always present so the page layout does not
/// jump when an error appears or clears.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(message) = &props.message {
        log::warn!("Displaying error to user: {}", message);
    }

    html! {
        <div id="error-message" class="error" role="alert">
            { props.message.clone().unwrap_or_default() }
        </div>
    }
}
