mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod state;
mod store;

use components::app::App;

fn main() {
    logging::init();
    log::info!("poetic-instant {} starting", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
