use dioxus::prelude::*;
use store::{Message, MessageKind};

use crate::icons::{FaBuilding, FaChevronRight, FaEnvelope, FaStar, FaUser};
use crate::views::ModalOverlay;
use crate::Icon;

/// Inbox of invitations and operator notices.
///
/// Opening a message shows its full body; whether that also clears the
/// unread flag is up to the store's inbox rules.
#[component]
pub fn MessagesView(messages: Vec<Message>, on_open: EventHandler<String>) -> Element {
    let mut open_id = use_signal(|| Option::<String>::None);
    let any_unread = messages.iter().any(|m| !m.is_read);
    let opened = open_id().and_then(|id| messages.iter().find(|m| m.id == id).cloned());

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                div {
                    h2 { class: "view-title", "受信トレイ" }
                    p { class: "muted small", "企業からの特別招待・スカウト" }
                }
                div {
                    class: "inbox-icon",
                    Icon { icon: FaEnvelope, width: 24, height: 24 }
                    if any_unread {
                        div { class: "pulse-dot" }
                    }
                }
            }

            div {
                class: "card-list",
                if messages.is_empty() {
                    div {
                        class: "empty-state",
                        p { class: "muted", "現在メッセージはありません" }
                    }
                }
                for message in messages.iter() {
                    MessageCard {
                        key: "{message.id}",
                        message: message.clone(),
                        on_open: move |id: String| {
                            on_open.call(id.clone());
                            open_id.set(Some(id));
                        },
                    }
                }
            }

            div {
                class: "level-hint",
                p {
                    span { class: "accent bold", "Level 2" }
                    " 以上で企業からの直接スカウト、"
                    br {}
                    span { class: "accent bold", "Level 3" }
                    " 以上で経営者からの食事会招待が届きます。"
                }
            }

            if let Some(message) = opened {
                ModalOverlay {
                    title: message.title.clone(),
                    on_close: move |_| open_id.set(None),
                    div {
                        class: "message-detail",
                        p { class: "muted tiny", "{message.sender} · {message.date}" }
                        p { class: "message-body", "{message.body}" }
                        button {
                            class: "primary-button",
                            onclick: move |_| open_id.set(None),
                            "閉じる"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageCard(message: Message, on_open: EventHandler<String>) -> Element {
    let unread = !message.is_read;
    let card_class = if unread { "message-card message-card--unread" } else { "message-card" };
    let title_class = if unread { "message-title" } else { "message-title message-title--read" };
    let id = message.id.clone();

    rsx! {
        div {
            class: card_class,
            onclick: move |_| on_open.call(id.clone()),
            if unread {
                div { class: "unread-dot" }
            }
            div {
                class: "message-meta",
                {kind_icon(message.kind)}
                div {
                    p { class: "muted tiny", "{message.sender}" }
                    p { class: "muted tiny", "{message.date}" }
                }
            }
            h3 { class: title_class, "{message.title}" }
            p { class: "message-preview", "{message.body}" }
            div {
                class: "message-more",
                "詳細を見る "
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}

fn kind_icon(kind: MessageKind) -> Element {
    match kind {
        MessageKind::Vip => rsx! {
            div { class: "kind-icon kind-icon--vip", Icon { icon: FaStar, width: 14, height: 14 } }
        },
        MessageKind::Invite => rsx! {
            div { class: "kind-icon kind-icon--invite", Icon { icon: FaBuilding, width: 14, height: 14 } }
        },
        MessageKind::System => rsx! {
            div { class: "kind-icon", Icon { icon: FaUser, width: 14, height: 14 } }
        },
    }
}
