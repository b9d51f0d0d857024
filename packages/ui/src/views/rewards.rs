use dioxus::prelude::*;
use store::{format_points, Ledger, RewardIcon};

use crate::icons::{FaCar, FaCreditCard, FaGift, FaLock, FaTruck};
use crate::Icon;

/// Points balance, level progress and the reward table. Rows are display-only.
#[component]
pub fn RewardsView(ledger: Ledger) -> Element {
    let points = format_points(ledger.points);
    let progress = ledger.progress_percent;
    let unlocked = ledger.unlocked().count();
    let total = ledger.rows.len();

    rsx! {
        div {
            class: "view-page",
            h2 { class: "view-title", "獲得リワード" }

            div {
                class: "points-card",
                p { class: "field-label", "現在の貢献ポイント" }
                div {
                    class: "points-value",
                    "{points} "
                    span { class: "accent small", "PTS" }
                }
                div {
                    class: "level-band",
                    span { "Lv.1 レビュアー" }
                    span { "Lv.3 パートナー" }
                }
                div {
                    class: "progress-track",
                    div { class: "progress-fill", style: "width: {progress}%" }
                }
            }

            p { class: "muted small", "交換可能 {unlocked} / {total}" }

            div {
                class: "card-list",
                for row in ledger.rows.iter() {
                    div {
                        key: "{row.reward.id}",
                        class: row_class(row.locked),
                        div {
                            class: "reward-main",
                            div {
                                class: "reward-icon",
                                if row.locked {
                                    Icon { icon: FaLock, width: 16, height: 16 }
                                } else {
                                    {reward_icon(row.reward.icon)}
                                }
                            }
                            div {
                                h4 { class: "reward-title", "{row.reward.title}" }
                                span { class: "reward-level", "Lv.{row.reward.level} 必要" }
                            }
                        }
                        span { class: "reward-cost", "{row.reward.cost}" }
                    }
                }
            }
        }
    }
}

fn row_class(locked: bool) -> &'static str {
    if locked {
        "reward-row reward-row--locked"
    } else {
        "reward-row"
    }
}

fn reward_icon(icon: RewardIcon) -> Element {
    match icon {
        RewardIcon::Card => rsx! { Icon { icon: FaCreditCard, width: 20, height: 20 } },
        RewardIcon::Car => rsx! { Icon { icon: FaCar, width: 20, height: 20 } },
        RewardIcon::Truck => rsx! { Icon { icon: FaTruck, width: 20, height: 20 } },
        RewardIcon::Gift => rsx! { Icon { icon: FaGift, width: 20, height: 20 } },
    }
}
