mod api;
mod components;
mod config;
mod handler;

use components::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting, classifying via {}", config::endpoint());
    yew::Renderer::<App>::new().render();
}
