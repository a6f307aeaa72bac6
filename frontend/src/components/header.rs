use yew::prelude::*;

/// Renders the page header
pub fn render_header() -> Html {
    html! {
        <header class="ui center aligned header">
            <h1>{"Is this spam?"}</h1>
            <p class="sub header">{"Paste a message and check it against the spam classifier"}</p>
        </header>
    }
}
