mod components;
mod config;
mod hooks;
mod models;
mod services;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 RWA Vault front-end starting...");

    yew::Renderer::<App>::new().render();
}
