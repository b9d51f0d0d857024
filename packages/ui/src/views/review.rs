//! Review screen: sample brief and shipping for physical offers, then the
//! free-text form with the confidence picker and the phrasing advisory.

use dioxus::prelude::*;
use store::config::ReviewRules;
use store::review::{confidence_label, ReviewSubmission};
use store::{Confidence, Offer, OfferKind, ReviewFlow, ReviewStep, User};

use crate::icons::{
    FaArrowUpRightFromSquare, FaBox, FaCircleCheck, FaCircleExclamation, FaPaperPlane, FaStar,
    FaTruck, FaWandMagicSparkles, FaXmark,
};
use crate::schedule::sleep_ms;
use crate::Icon;

#[component]
pub fn ReviewView(
    offer: Offer,
    user: Option<User>,
    rules: ReviewRules,
    on_complete: EventHandler<ReviewSubmission>,
    on_cancel: EventHandler<()>,
    /// Carries the reason when the editor is opened because of a failed sample request.
    on_request_profile_edit: EventHandler<Option<String>>,
) -> Element {
    let mut flow = use_signal(|| ReviewFlow::new(offer.clone()));
    // Tasks spawned here are dropped with the component; the handle is kept
    // so an explicit cancel can stop the delivery timer too.
    let mut delivery_task = use_signal(|| Option::<Task>::None);

    let handle_cancel = move |_: MouseEvent| {
        let pending = delivery_task.write().take();
        if let Some(task) = pending {
            task.cancel();
        }
        flow.write().cancel_delivery();
        on_cancel.call(());
    };

    let step = flow.read().step();
    match step {
        ReviewStep::Brief => {
            let address = user.as_ref().and_then(User::shipping_address).map(str::to_string);
            let has_address = address.is_some();
            let handle_request_sample = move |_: MouseEvent| {
                let result = flow.write().request_sample(user.as_ref());
                if let Err(e) = result {
                    on_request_profile_edit.call(Some(e.to_string()));
                }
            };

            rsx! {
                div {
                    class: "review-page",
                    ReviewHeader { title: "サンプル請求", on_close: handle_cancel }
                    div {
                        class: "review-center",
                        div {
                            class: "round-icon",
                            Icon { icon: FaBox, width: 40, height: 40 }
                        }
                        h2 { class: "review-title", "{offer.title}" }
                        p {
                            class: "muted",
                            "この案件は実際に商品を試用・試食する必要があります。"
                            br {}
                            "登録済み住所へサンプルを発送します。"
                        }
                        div {
                            class: "address-card",
                            p { class: "muted tiny", "配送先 (マイページで変更可)" }
                            if let Some(address) = address {
                                p { class: "address-text", "{address}" }
                            } else {
                                div {
                                    class: "inline-error",
                                    Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                                    "住所が未登録です"
                                }
                            }
                        }
                        button {
                            class: "primary-button",
                            onclick: handle_request_sample,
                            "サンプルを請求する"
                        }
                        if !has_address {
                            button {
                                class: "link-button",
                                onclick: move |_| on_request_profile_edit.call(None),
                                "住所を登録する"
                            }
                        }
                    }
                }
            }
        }
        ReviewStep::Shipping => {
            let delay_ms = rules.delivery_delay_ms;
            let handle_simulate_delivery = move |_: MouseEvent| {
                let ticket = flow.write().simulate_delivery();
                let previous = delivery_task.write().take();
                if let Some(task) = previous {
                    task.cancel();
                }
                let task = spawn(async move {
                    sleep_ms(delay_ms).await;
                    if flow.write().finish_delivery(ticket) {
                        tracing::debug!("delivery delay elapsed, opening the review form");
                    }
                });
                delivery_task.set(Some(task));
            };

            rsx! {
                div {
                    class: "review-page",
                    ReviewHeader { title: "配送状況", on_close: handle_cancel }
                    div {
                        class: "review-center",
                        div {
                            class: "truck-icon",
                            Icon { icon: FaTruck, width: 64, height: 64 }
                        }
                        h2 { class: "review-title", "発送手続き完了" }
                        p {
                            class: "muted",
                            "商品は通常2-3日で到着します。"
                            br {}
                            "到着後、試用してからレビューを行ってください。"
                        }
                        div {
                            class: "tracking-card",
                            div {
                                class: "tracking-row",
                                div { class: "dot dot--done" }
                                span { "発送済み (本日 14:00)" }
                            }
                            div {
                                class: "tracking-row tracking-row--pending",
                                div { class: "dot" }
                                span { "配送中" }
                            }
                        }
                        button {
                            class: "debug-button",
                            onclick: handle_simulate_delivery,
                            "[デバッグ] 3日経過したことにして受取る"
                        }
                    }
                }
            }
        }
        ReviewStep::Compose => {
            let (text, count, advisory, can_submit, confidence) = {
                let f = flow.read();
                (
                    f.text().to_string(),
                    f.char_count(),
                    f.shows_advisory(&rules),
                    f.can_submit(&rules),
                    f.confidence(),
                )
            };
            let min_chars = rules.min_chars;
            let header = if offer.kind == OfferKind::Physical { "試用後レビュー" } else { "N=1 の生活実感" };
            let counter_class = if count > min_chars { "counter counter--ok" } else { "counter" };
            let submit_class = if can_submit { "primary-button" } else { "primary-button primary-button--disabled" };
            let advisory_class = if advisory { "advisory advisory--visible" } else { "advisory" };
            let rating_class = if confidence.is_some() { "rating-label rating-label--set" } else { "rating-label" };
            let rating_label = confidence_label(confidence);

            let handle_submit = move |_: MouseEvent| {
                let result = flow.read().submit(&rules);
                match result {
                    Ok(submission) => on_complete.call(submission),
                    Err(e) => tracing::debug!("submit rejected: {}", e),
                }
            };

            rsx! {
                div {
                    class: "review-page",
                    ReviewHeader { title: header, on_close: handle_cancel }

                    div {
                        class: "review-scroll",
                        div {
                            class: "review-context",
                            span { class: "target-badge", "Review Target" }
                            h2 { class: "review-title", "{offer.title}" }
                            p { class: "muted", "{offer.description}" }

                            {offer_media(&offer)}
                        }

                        div {
                            class: "review-input",
                            textarea {
                                class: "review-textarea",
                                placeholder: offer.placeholder,
                                autofocus: true,
                                value: text,
                                oninput: move |evt: FormEvent| flow.write().set_text(evt.value()),
                            }

                            div {
                                class: "rating-card",
                                div {
                                    class: "rating-header",
                                    span {
                                        class: "field-label",
                                        Icon { icon: FaStar, width: 10, height: 10 }
                                        " レビューの確信度 (任意)"
                                    }
                                    span { class: rating_class, "{rating_label}" }
                                }
                                div {
                                    class: "rating-stars",
                                    for stars in 1..=Confidence::MAX {
                                        StarButton {
                                            key: "{stars}",
                                            filled: confidence.is_some_and(|c| c.stars() >= stars),
                                            on_pick: move |_| flow.write().set_confidence(stars),
                                        }
                                    }
                                }
                            }

                            div {
                                class: advisory_class,
                                Icon { icon: FaWandMagicSparkles, width: 16, height: 16 }
                                span {
                                    "一般的で綺麗な言葉になっていませんか？"
                                    br {}
                                    strong { "あなたの主観的な感情と言葉" }
                                    "で語ってください。"
                                }
                            }
                        }
                    }

                    div {
                        class: "review-footer",
                        div {
                            class: "review-footer-counts",
                            span { class: counter_class, "現在 {count} 文字" }
                            span { class: "counter", "最低 {min_chars} 文字必要" }
                        }
                        button {
                            class: submit_class,
                            disabled: !can_submit,
                            onclick: handle_submit,
                            span { "レビューを送信" }
                            Icon { icon: FaPaperPlane, width: 18, height: 18 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewHeader(title: &'static str, on_close: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "review-header",
            button {
                class: "icon-button",
                onclick: move |evt| on_close.call(evt),
                Icon { icon: FaXmark, width: 24, height: 24 }
            }
            span { class: "review-header-title", "{title}" }
            div { class: "spacer" }
        }
    }
}

#[component]
fn StarButton(filled: bool, on_pick: EventHandler<MouseEvent>) -> Element {
    let class = if filled { "star star--filled" } else { "star" };
    rsx! {
        button {
            class,
            onclick: move |evt| on_pick.call(evt),
            Icon { icon: FaStar, width: 28, height: 28 }
        }
    }
}

/// Image, demo link or sample notice depending on the offer type.
fn offer_media(offer: &Offer) -> Element {
    match (offer.kind, offer.image_url, offer.external_url) {
        (OfferKind::Design, Some(url), _) => rsx! {
            div {
                class: "media-image",
                img { src: url, alt: "Target" }
                span { class: "media-caption", "検証用画像" }
            }
        },
        (OfferKind::Ux, _, Some(url)) => rsx! {
            div {
                class: "media-link",
                div {
                    p { class: "field-label", "検証用ダミーサイト" }
                    p { class: "link-text", "{url}" }
                }
                a {
                    class: "icon-button",
                    href: url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { icon: FaArrowUpRightFromSquare, width: 16, height: 16 }
                }
            }
        },
        (OfferKind::Physical, _, _) => rsx! {
            div {
                class: "sample-received",
                Icon { icon: FaCircleCheck, width: 16, height: 16 }
                span { "サンプル受取済み" }
            }
        },
        _ => rsx! {},
    }
}
