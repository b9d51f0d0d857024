use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Dimmed full-screen overlay with a titled card. The backdrop and the close
/// button both trigger `on_close`; clicks inside the card do not.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "icon-button",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }
                {children}
            }
        }
    }
}
