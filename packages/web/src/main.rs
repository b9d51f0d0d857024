use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

/// Web build. Rules always come from the built-in defaults.
#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "DEVIL'S VOICE" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::AppProvider {
            ui::AppShell {}
        }
    }
}
