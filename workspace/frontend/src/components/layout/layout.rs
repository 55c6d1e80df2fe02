use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="container">
            <header>
                <h1>{ props.title.clone() }</h1>
            </header>
            <main>
                { for props.children.iter() }
            </main>
        </div>
    }
}
