use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use bio_ui::BioGenerator;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(135deg, #fdf2f8 0%, #eef2ff 100%); color: #1f2937; padding: 1rem;",
            BioGenerator {}
        }
    }
}
