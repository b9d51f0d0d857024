mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth;
pub use auth::AuthView;

mod offers;
pub use offers::OffersView;

mod review;
pub use review::ReviewView;

mod rewards;
pub use rewards::RewardsView;

mod messages;
pub use messages::MessagesView;

mod profile;
pub use profile::ProfileView;
