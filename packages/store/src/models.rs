//! # Domain models for users, offers, rewards and messages
//!
//! Defines the records the rest of the workspace passes around. [`User`] and
//! [`Message`] are owned, mutable-by-transition values that live inside
//! [`crate::AppStore`]. [`Offer`] and [`Reward`] are `'static` catalog rows that
//! are defined once in [`crate::catalog`] and never change at runtime, so they
//! borrow their text instead of owning it.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in reviewer: email, optional display name and shipping address, profile tags, the points counter and the inbox. |
//! | [`Message`] | One inbox entry. `is_read` drives the unread badge. |
//! | [`Offer`] | A review task from a company, carrying an [`OfferKind`] and a reward level. |
//! | [`Reward`] | A catalog item gated by a points threshold. |
//! | [`AppView`] | The screen the view selector is currently showing. |

use serde::{Deserialize, Serialize};

/// The screen currently rendered by the view selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppView {
    Auth,
    Offers,
    Review,
    Rewards,
    Profile,
    Messages,
}

impl AppView {
    /// Label used by the bottom navigation bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            AppView::Auth => "ログイン",
            AppView::Offers => "案件一覧",
            AppView::Review => "レビュー",
            AppView::Rewards => "リワード",
            AppView::Profile => "マイページ",
            AppView::Messages => "受信箱",
        }
    }
}

/// A signed-in reviewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: Option<String>,
    pub tags: Vec<String>,
    pub points: u32,
    pub address: Option<String>,
    pub messages: Vec<Message>,
}

impl User {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Shipping address, treating an empty string as unset.
    pub fn shipping_address(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageKind {
    Invite,
    System,
    Vip,
}

/// An inbox entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub title: String,
    pub body: String,
    /// Display string, e.g. "2024/05/20".
    pub date: String,
    pub is_read: bool,
    pub kind: MessageKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OfferKind {
    Design,
    Ux,
    Physical,
}

impl OfferKind {
    pub fn label(&self) -> &'static str {
        match self {
            OfferKind::Design => "デザイン",
            OfferKind::Ux => "Web体験",
            OfferKind::Physical => "現物支給",
        }
    }
}

/// A review task presented by a company.
#[derive(Clone, Debug, PartialEq)]
pub struct Offer {
    pub id: &'static str,
    pub kind: OfferKind,
    pub title: &'static str,
    pub company: &'static str,
    /// 1 to 3.
    pub reward_level: u8,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub placeholder: &'static str,
    pub image_url: Option<&'static str>,
    pub external_url: Option<&'static str>,
}

impl Offer {
    /// Physical offers ship a sample before the review can be written.
    pub fn needs_sample(&self) -> bool {
        self.kind == OfferKind::Physical
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardIcon {
    Card,
    Gift,
    Truck,
    Car,
}

/// A catalog item unlocked once the points counter reaches `cost`.
#[derive(Clone, Debug, PartialEq)]
pub struct Reward {
    pub id: &'static str,
    pub title: &'static str,
    pub cost: u32,
    pub level: u8,
    pub icon: RewardIcon,
}
