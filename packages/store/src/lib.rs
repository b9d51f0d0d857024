//! Domain core for Devil's Voice: models, fixtures, rules and the state
//! transitions the UI drives. Nothing in here depends on Dioxus.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inbox;
pub mod models;
pub mod profile;
pub mod review;
pub mod rewards;

pub use app::{AppStore, NAV_ITEMS};
pub use auth::LoginForm;
pub use config::RulesConfig;
pub use error::{AuthError, ConfigError, NavigationError, ReviewError};
pub use models::{AppView, Message, MessageKind, Offer, OfferKind, Reward, RewardIcon, User};
pub use profile::ProfileForm;
pub use review::{Confidence, DeliveryTicket, ReviewFlow, ReviewStep, ShippingStatus};
pub use rewards::{format_points, Ledger, RewardRow};
