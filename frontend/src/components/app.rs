use shared::ResultView;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::header::render_header;
use super::results::ResultMessage;
use crate::api::GlooTransport;
use crate::config;
use crate::handler::{SubmissionHandler, SubmissionSurface};

// Yew state handles standing in for the page's message, submit and result regions.
#[derive(Clone)]
struct PageSurface {
    message: NodeRef,
    submitting: UseStateHandle<bool>,
    result: UseStateHandle<Option<ResultView>>,
}

impl SubmissionSurface for PageSurface {
    fn message(&self) -> String {
        self.message
            .cast::<HtmlTextAreaElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.submitting.set(!enabled);
    }

    fn clear_result(&self) {
        self.result.set(None);
    }

    fn show_result(&self, view: ResultView) {
        self.result.set(Some(view));
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let message = use_node_ref();
    let submitting = use_state(|| false);
    let result = use_state(|| None::<ResultView>);

    let on_submit = {
        let surface = PageSurface {
            message: message.clone(),
            submitting: submitting.clone(),
            result: result.clone(),
        };

        Callback::from(move |_: MouseEvent| {
            let surface = surface.clone();
            spawn_local(async move {
                let handler = SubmissionHandler::new(GlooTransport, config::endpoint());
                let view = handler.handle_submit(&surface).await;
                log::info!("Submission finished: {}", view);
            });
        })
    };

    html! {
        <div class="ui text container">
            { render_header() }

            <div class="ui form">
                <div class="field">
                    <label>{"Message"}</label>
                    <textarea id="message" ref={message} rows="6" />
                </div>
                <button
                    id="submit"
                    type="button"
                    class={classes!("ui", "primary", "button", (*submitting).then_some("loading"))}
                    disabled={*submitting}
                    onclick={on_submit}
                >
                    {"Check"}
                </button>
            </div>

            <div id="result">
                {
                    match *result {
                        Some(view) => html! { <ResultMessage {view} /> },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}
