//! Sign-up screen: university email, reality check and NDA agreement.

use dioxus::prelude::*;
use store::config::AuthRules;
use store::{LoginForm, User};

use crate::icons::{FaArrowRight, FaLock, FaMicrophoneLines, FaShieldHalved};
use crate::Icon;

#[component]
pub fn AuthView(rules: AuthRules, on_login: EventHandler<User>) -> Element {
    let mut email = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut agreed = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_: MouseEvent| {
        let form = LoginForm {
            email: email(),
            answer: answer(),
            agreed: agreed(),
        };
        match form.login(&rules) {
            Ok(user) => {
                error.set(None);
                on_login.call(user);
            }
            Err(e) => {
                tracing::debug!("sign-up rejected: {:?}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let checkbox_class = if agreed() { "checkbox checkbox--checked" } else { "checkbox" };
    let submit_class = if agreed() { "primary-button" } else { "primary-button primary-button--disabled" };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-hero",
                div {
                    class: "auth-logo",
                    Icon { icon: FaMicrophoneLines, width: 32, height: 32 }
                }
                h1 { class: "auth-title", "DEVIL’S " span { class: "accent", "VOICE" } }
                p {
                    class: "muted",
                    "その「違和感」が、次の時代を創る。"
                    br {}
                    "企業のための、愛ある批判的提言プラットフォーム。"
                }
            }

            div {
                class: "field",
                label { class: "field-label", r#for: "auth-email", "大学メールアドレス" }
                input {
                    id: "auth-email",
                    class: "text-input mono",
                    r#type: "email",
                    placeholder: "s123456@st.kyoto-art.ac.jp",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div {
                class: "field",
                div {
                    class: "field-header",
                    label { class: "field-label", r#for: "auth-answer", "リアリティチェック（Bot対策）" }
                    span {
                        class: "chip",
                        Icon { icon: FaShieldHalved, width: 10, height: 10 }
                        "生活者認証"
                    }
                }
                div { class: "question-card", "Q. 学食で正直「微妙」だと思うメニューは？" }
                input {
                    id: "auth-answer",
                    class: "text-input",
                    r#type: "text",
                    placeholder: "例：〇〇ラーメンの麺が伸びすぎている...",
                    value: answer(),
                    oninput: move |evt: FormEvent| answer.set(evt.value()),
                }
            }

            div {
                class: "nda-card",
                div {
                    class: "nda-title",
                    Icon { icon: FaLock, width: 14, height: 14 }
                    "秘密保持契約 (NDA)"
                }
                p {
                    class: "nda-body",
                    "本サービスで閲覧する案件情報（未発表の新商品、サービスUI、デザイン案等）は企業の機密情報を含みます。これらをSNS等で拡散・漏洩した場合、法的責任を問われる可能性があります。あなたの「本音」は、このプラットフォーム内でのみ企業に提供されることに同意します。"
                }
            }

            div {
                class: "agreement",
                onclick: move |_| agreed.set(!agreed()),
                div { class: checkbox_class }
                span { "利用規約および秘密保持契約に同意する" }
            }

            if let Some(message) = error() {
                div { class: "inline-error", "⚠️ {message}" }
            }

            button {
                class: submit_class,
                disabled: !agreed(),
                onclick: handle_submit,
                span { "プロジェクトに参加する" }
                Icon { icon: FaArrowRight, width: 18, height: 18 }
            }

            p {
                class: "auth-footer muted",
                "私たちは、迎合的な意見を求めていません。"
                br {}
                "あなたの主観こそが価値です。"
            }
        }
    }
}
