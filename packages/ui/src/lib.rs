//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod app_state;
pub use app_state::{load_rules, use_app, AppProvider};

mod navbar;
pub use navbar::Navbar;

mod schedule;
pub use schedule::sleep_ms;

mod shell;
pub use shell::AppShell;
