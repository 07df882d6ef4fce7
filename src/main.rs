mod frontend;

use crate::frontend::app::Route;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;

fn main() {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resizing matters here: the sidebar breakpoint reacts to window width.
    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("CEPS")
                .with_inner_size(LogicalSize::new(1280.0, 832.0))
                .with_min_inner_size(LogicalSize::new(760.0, 560.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! { Router::<Route> {} }
}
