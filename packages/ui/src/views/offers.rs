use dioxus::prelude::*;
use store::catalog::{offers, FEATURED_TAGS};
use store::{Offer, OfferKind};

use crate::icons::{FaBolt, FaBox, FaBullseye, FaChevronRight, FaImage, FaMobileScreen};
use crate::Icon;

/// Offer list matched to the reviewer's profile.
#[component]
pub fn OffersView(on_select_offer: EventHandler<Offer>) -> Element {
    rsx! {
        div {
            class: "view-page",

            div {
                class: "view-header",
                div {
                    h2 { class: "view-title", "マッチング中の案件" }
                    p { class: "muted small", "あなたの属性と生活スタイルに基づくオファー" }
                }
            }

            div {
                class: "tag-strip",
                for tag in FEATURED_TAGS {
                    span { key: "{tag}", class: "tag-pill", "{tag}" }
                }
            }

            div {
                class: "card-list",
                for offer in offers() {
                    OfferCard {
                        key: "{offer.id}",
                        offer: offer.clone(),
                        on_select: move |offer: Offer| on_select_offer.call(offer),
                    }
                }
            }
        }
    }
}

#[component]
fn OfferCard(offer: Offer, on_select: EventHandler<Offer>) -> Element {
    let level = offer.reward_level;
    let kind_label = offer.kind.label();
    let shown_tags = &offer.tags[..offer.tags.len().min(2)];
    let selected = offer.clone();

    rsx! {
        div {
            class: "offer-card",
            onclick: move |_| on_select.call(selected.clone()),

            div {
                class: "offer-card-header",
                div {
                    class: "offer-badges",
                    span {
                        class: "level-badge",
                        if level == 3 {
                            Icon { icon: FaBolt, width: 10, height: 10 }
                        } else {
                            Icon { icon: FaBullseye, width: 10, height: 10 }
                        }
                        "Lv.{level}"
                    }
                    span {
                        class: "kind-badge",
                        {kind_icon(offer.kind)}
                        "{kind_label}"
                    }
                }
                span { class: "muted tiny", "{offer.company}" }
            }

            h3 { class: "offer-title", "{offer.title}" }
            p { class: "offer-description", "{offer.description}" }

            div {
                class: "offer-card-footer",
                div {
                    class: "offer-tags",
                    for tag in shown_tags {
                        span { key: "{tag}", class: "offer-tag", "{tag}" }
                    }
                }
                div {
                    class: "chevron",
                    Icon { icon: FaChevronRight, width: 16, height: 16 }
                }
            }
        }
    }
}

fn kind_icon(kind: OfferKind) -> Element {
    match kind {
        OfferKind::Physical => rsx! { Icon { icon: FaBox, width: 14, height: 14 } },
        OfferKind::Ux => rsx! { Icon { icon: FaMobileScreen, width: 14, height: 14 } },
        OfferKind::Design => rsx! { Icon { icon: FaImage, width: 14, height: 14 } },
    }
}
