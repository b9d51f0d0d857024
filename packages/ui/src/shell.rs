//! View selector: renders the screen for the store's current [`AppView`] and
//! wires each screen's callbacks to the matching store transition.

use dioxus::prelude::*;
use store::review::ReviewSubmission;
use store::{AppView, Offer, User};

use crate::app_state::use_app;
use crate::navbar::Navbar;
use crate::views::{AuthView, MessagesView, OffersView, ProfileView, ReviewView, RewardsView};

#[component]
pub fn AppShell() -> Element {
    let mut app = use_app();
    let store = app();

    let content = match store.view() {
        AppView::Auth => rsx! {
            AuthView {
                rules: store.rules().auth.clone(),
                on_login: move |user: User| {
                    if let Err(e) = app.write().login(user) {
                        tracing::warn!("sign-in rejected: {}", e);
                    }
                },
            }
        },
        AppView::Offers => rsx! {
            OffersView {
                on_select_offer: move |offer: Offer| {
                    if let Err(e) = app.write().select_offer(&offer) {
                        tracing::warn!("offer selection rejected: {}", e);
                    }
                },
            }
        },
        AppView::Review => match store.selected_offer() {
            Some(offer) => rsx! {
                ReviewView {
                    offer: offer.clone(),
                    user: store.user().cloned(),
                    rules: store.rules().review.clone(),
                    on_complete: move |submission: ReviewSubmission| {
                        tracing::info!(
                            offer = submission.offer_id,
                            chars = submission.text.chars().count(),
                            confidence = ?submission.confidence.map(|c| c.stars()),
                            "review submitted"
                        );
                        if let Err(e) = app.write().complete_review() {
                            tracing::warn!("completion rejected: {}", e);
                        }
                    },
                    on_cancel: move |_| app.write().cancel_review(),
                    on_request_profile_edit: move |notice: Option<String>| {
                        if let Err(e) = app.write().request_profile_edit(notice) {
                            tracing::warn!("profile edit rejected: {}", e);
                        }
                    },
                }
            },
            None => rsx! {},
        },
        AppView::Rewards => rsx! {
            RewardsView { ledger: store.ledger() }
        },
        AppView::Messages => match store.user() {
            Some(user) => rsx! {
                MessagesView {
                    messages: user.messages.clone(),
                    on_open: move |id: String| {
                        if !app.write().open_message(&id) {
                            tracing::warn!(id = %id, "opened an unknown message");
                        }
                    },
                }
            },
            None => rsx! {},
        },
        AppView::Profile => match store.user() {
            Some(user) => rsx! {
                ProfileView {
                    user: user.clone(),
                    notice: store.notice().map(str::to_string),
                    on_save: move |user: User| {
                        if let Err(e) = app.write().save_profile(user) {
                            tracing::warn!("profile save rejected: {}", e);
                        }
                    },
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div {
            class: "app-frame",
            div { class: "ambience ambience--blue" }
            div { class: "ambience ambience--red" }
            main {
                class: "app-main",
                {content}
            }
            if store.shows_nav() {
                Navbar {}
            }
        }
    }
}
