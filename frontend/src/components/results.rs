use shared::ResultView;
use yew::prelude::*;

pub fn message_class(view: ResultView) -> String {
    format!("ui {} message", view.segment())
}

pub fn icon_class(view: ResultView) -> String {
    format!("{} icon", view.icon())
}

#[derive(Properties, PartialEq)]
pub struct ResultMessageProps {
    pub view: ResultView,
}

#[function_component(ResultMessage)]
pub fn result_message(props: &ResultMessageProps) -> Html {
    let view = props.view;
    html! {
        <div class={message_class(view)} data-outcome={view.to_string()}>
            <i class={icon_class(view)}></i>
            { view.label() }
        </div>
    }
}
