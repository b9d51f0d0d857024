use dioxus::prelude::*;
use store::{AppView, NAV_ITEMS};

use crate::app_state::use_app;
use crate::icons::{FaCircleUser, FaEnvelope, FaGift, FaList};
use crate::Icon;

/// Bottom navigation bar. The inbox entry carries the unread badge.
#[component]
pub fn Navbar() -> Element {
    let app = use_app();
    let (current, unread) = {
        let store = app.read();
        (store.view(), store.unread_count())
    };

    rsx! {
        nav {
            class: "navbar",
            for view in NAV_ITEMS {
                if view == AppView::Messages {
                    div { class: "navbar-divider" }
                }
                NavButton {
                    view,
                    active: view == current,
                    unread,
                }
            }
        }
    }
}

#[component]
fn NavButton(view: AppView, active: bool, unread: usize) -> Element {
    let mut app = use_app();
    let class = if active { "nav-button nav-button--active" } else { "nav-button" };
    let badge = if view == AppView::Messages { unread } else { 0 };
    let label = view.nav_label();

    rsx! {
        button {
            class,
            onclick: move |_| {
                if let Err(e) = app.write().navigate(view) {
                    tracing::warn!("navigation rejected: {}", e);
                }
            },
            div {
                class: "nav-icon",
                {nav_icon(view)}
                if badge > 0 {
                    span { class: "nav-badge", "{badge}" }
                }
            }
            span { class: "nav-label", "{label}" }
        }
    }
}

fn nav_icon(view: AppView) -> Element {
    match view {
        AppView::Rewards => rsx! { Icon { icon: FaGift, width: 20, height: 20 } },
        AppView::Messages => rsx! { Icon { icon: FaEnvelope, width: 20, height: 20 } },
        AppView::Profile => rsx! { Icon { icon: FaCircleUser, width: 20, height: 20 } },
        _ => rsx! { Icon { icon: FaList, width: 20, height: 20 } },
    }
}
