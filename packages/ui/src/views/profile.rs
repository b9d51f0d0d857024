use dioxus::prelude::*;
use store::{ProfileForm, User};

use crate::icons::{FaAt, FaCircleExclamation, FaFloppyDisk, FaLocationDot, FaUser};
use crate::Icon;

/// Nickname and shipping address editor.
#[component]
pub fn ProfileView(
    user: User,
    /// Shown when another screen sent the user here.
    notice: Option<String>,
    on_save: EventHandler<User>,
) -> Element {
    let mut form = use_signal({
        let initial = ProfileForm::from_user(&user);
        move || initial
    });

    let base = user.clone();
    let handle_save = move |_: MouseEvent| {
        let updated = form.read().apply(&base);
        on_save.call(updated);
    };

    let current = form();

    rsx! {
        div {
            class: "view-page",
            h2 { class: "view-title", "マイページ設定" }

            div {
                class: "profile-card",
                div {
                    class: "avatar",
                    Icon { icon: FaUser, width: 40, height: 40 }
                }
                p { class: "bold", "{user.email}" }
                p { class: "muted tiny", "認証済みユーザー" }
                div {
                    class: "profile-tags",
                    for tag in user.tags.iter() {
                        span { key: "{tag}", class: "offer-tag", "{tag}" }
                    }
                }
            }

            if let Some(notice) = notice {
                div {
                    class: "inline-error",
                    Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                    "{notice}"
                }
            }

            div {
                class: "field",
                label {
                    class: "field-label",
                    r#for: "profile-name",
                    Icon { icon: FaAt, width: 12, height: 12 }
                    " ニックネーム"
                }
                input {
                    id: "profile-name",
                    class: "text-input",
                    r#type: "text",
                    placeholder: "表示名を入力",
                    value: current.name,
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
            }

            div {
                class: "field",
                div {
                    class: "field-header",
                    label {
                        class: "field-label",
                        r#for: "profile-address",
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        " 配送先住所"
                    }
                    span { class: "required-chip", "現物支給案件に必須" }
                }
                textarea {
                    id: "profile-address",
                    class: "text-input address-input",
                    placeholder: "〒606-8271 京都府京都市左京区北白川...",
                    value: current.address,
                    oninput: move |evt: FormEvent| form.write().address = evt.value(),
                }
                p { class: "muted tiny", "※ サンプル品やリワードの発送に使用されます。" }
            }

            button {
                class: "primary-button",
                onclick: handle_save,
                Icon { icon: FaFloppyDisk, width: 18, height: 18 }
                span { "情報を更新する" }
            }
        }
    }
}
