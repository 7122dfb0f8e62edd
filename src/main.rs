mod app;
mod conf;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use tracing::Level;

use crate::app::App;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }
    tracing::info!("tabledesk starting");

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("tabledesk")),
        )
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
