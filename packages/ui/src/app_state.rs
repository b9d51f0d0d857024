//! Application store context and rules loading for the UI.

use dioxus::prelude::*;
use store::{AppStore, RulesConfig};

/// Get the application store.
/// Every view change goes through one of its named transitions.
pub fn use_app() -> Signal<AppStore> {
    use_context::<Signal<AppStore>>()
}

/// Provider component that owns the application store.
/// Wrap your app with this component before rendering [`crate::AppShell`].
#[component]
pub fn AppProvider(children: Element) -> Element {
    let store = use_signal(|| AppStore::new(load_rules()));

    use_context_provider(|| store);

    rsx! {
        {children}
    }
}

/// Load `devils_voice.toml` from the platform config directory, falling back
/// to the built-in rules when it is absent or unreadable.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_rules() -> RulesConfig {
    let Some(path) = dirs::config_dir().map(|d| d.join("devils-voice").join(RulesConfig::filename()))
    else {
        return RulesConfig::default();
    };
    if !path.exists() {
        tracing::debug!("no rules file at {}, using defaults", path.display());
        return RulesConfig::default();
    }
    match RulesConfig::load(&path) {
        Ok(rules) => {
            tracing::info!("loaded rules from {}", path.display());
            rules
        }
        Err(e) => {
            tracing::warn!("ignoring {}: {}", path.display(), e);
            RulesConfig::default()
        }
    }
}

/// The web build has no config directory; it always runs with the built-in rules.
#[cfg(target_arch = "wasm32")]
pub fn load_rules() -> RulesConfig {
    RulesConfig::default()
}
