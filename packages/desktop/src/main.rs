use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

/// Desktop build. Rules are read from `devils_voice.toml` in the platform
/// config directory when present.
#[component]
fn App() -> Element {
    rsx! {
        document::Title { "DEVIL'S VOICE" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::AppProvider {
            ui::AppShell {}
        }
    }
}
