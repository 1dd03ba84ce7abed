use dioxus::prelude::*;
use sheetgrid::ui::app::App;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Sheetgrid")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .launch(App);
}
