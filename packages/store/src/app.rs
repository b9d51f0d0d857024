//! # Application store and view selector
//!
//! [`AppStore`] owns everything that outlives a single screen: the current
//! [`AppView`], the signed-in [`User`] and the offer under review. Its fields
//! are private; the UI reads through accessors and changes state only through
//! the named transitions below.
//!
//! | Transition | From → To | Effect |
//! |------------|-----------|--------|
//! | [`login`](AppStore::login) | Auth → Offers | Stores the user and seeds the inbox. |
//! | [`select_offer`](AppStore::select_offer) | Offers → Review | Remembers the offer. |
//! | [`complete_review`](AppStore::complete_review) | Review → Rewards | Awards points, clears the offer. |
//! | [`cancel_review`](AppStore::cancel_review) | Review → Offers | None. |
//! | [`request_profile_edit`](AppStore::request_profile_edit) | Review → Profile | Optional notice for the editor. |
//! | [`save_profile`](AppStore::save_profile) | Profile → Offers | Replaces the user. |
//! | [`navigate`](AppStore::navigate) | any → Offers/Rewards/Messages/Profile | Navigation bar. |
//!
//! Auth is the initial view and cannot be re-entered once left.

use crate::catalog::seed_messages;
use crate::config::RulesConfig;
use crate::error::NavigationError;
use crate::inbox;
use crate::models::{AppView, Offer, User};
use crate::rewards::Ledger;

/// Entries of the bottom navigation bar, in display order.
pub const NAV_ITEMS: [AppView; 4] = [
    AppView::Offers,
    AppView::Rewards,
    AppView::Messages,
    AppView::Profile,
];

#[derive(Clone, Debug, PartialEq)]
pub struct AppStore {
    rules: RulesConfig,
    view: AppView,
    user: Option<User>,
    selected_offer: Option<Offer>,
    notice: Option<String>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl AppStore {
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            rules,
            view: AppView::Auth,
            user: None,
            selected_offer: None,
            notice: None,
        }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn selected_offer(&self) -> Option<&Offer> {
        self.selected_offer.as_ref()
    }

    /// Message carried over from the screen that sent the user here.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn points(&self) -> u32 {
        self.user.as_ref().map_or(0, |u| u.points)
    }

    pub fn unread_count(&self) -> usize {
        self.user.as_ref().map_or(0, |u| inbox::unread_count(&u.messages))
    }

    /// The navigation bar is hidden on the sign-up screen.
    pub fn shows_nav(&self) -> bool {
        self.view != AppView::Auth
    }

    pub fn ledger(&self) -> Ledger {
        Ledger::new(self.points(), &self.rules.rewards)
    }

    fn set_view(&mut self, view: AppView) {
        tracing::info!(from = ?self.view, to = ?view, "view change");
        self.view = view;
    }

    /// Apply a successful sign-up. The inbox is replaced by the seed messages.
    /// Only valid from the sign-up screen, which is never shown again.
    pub fn login(&mut self, user: User) -> Result<(), NavigationError> {
        if self.user.is_some() || self.view != AppView::Auth {
            tracing::warn!(view = ?self.view, "repeated sign-in rejected");
            return Err(NavigationError::AlreadySignedIn);
        }
        tracing::info!(email = %user.email, "signed in");
        self.user = Some(User {
            messages: seed_messages(),
            ..user
        });
        self.set_view(AppView::Offers);
        Ok(())
    }

    pub fn select_offer(&mut self, offer: &Offer) -> Result<(), NavigationError> {
        if self.user.is_none() {
            return Err(NavigationError::NotSignedIn);
        }
        tracing::info!(offer = offer.id, "offer selected");
        self.selected_offer = Some(offer.clone());
        self.notice = None;
        self.set_view(AppView::Review);
        Ok(())
    }

    /// Award the completion points and show the rewards ledger. Rejected
    /// unless a review is in progress, so each completion pays out once.
    pub fn complete_review(&mut self) -> Result<u32, NavigationError> {
        if self.view != AppView::Review || self.selected_offer.is_none() {
            tracing::warn!(view = ?self.view, "completion without an active review");
            return Err(NavigationError::NoActiveReview);
        }
        let user = self.user.as_mut().ok_or(NavigationError::NotSignedIn)?;
        user.points = user.points.saturating_add(self.rules.review.completion_points);
        let points = user.points;
        tracing::info!(points, "review completed");
        self.selected_offer = None;
        self.set_view(AppView::Rewards);
        Ok(points)
    }

    pub fn cancel_review(&mut self) {
        if self.view == AppView::Review {
            self.set_view(AppView::Offers);
        }
    }

    fn expect_view(&self, expected: AppView) -> Result<(), NavigationError> {
        if self.user.is_none() {
            return Err(NavigationError::NotSignedIn);
        }
        if self.view != expected {
            return Err(NavigationError::WrongView {
                expected,
                actual: self.view,
            });
        }
        Ok(())
    }

    /// Leave the review for the profile editor, optionally explaining why.
    pub fn request_profile_edit(&mut self, notice: Option<String>) -> Result<(), NavigationError> {
        self.expect_view(AppView::Review)?;
        self.notice = notice;
        self.set_view(AppView::Profile);
        Ok(())
    }

    /// Replace the signed-in user with the edited profile.
    pub fn save_profile(&mut self, user: User) -> Result<(), NavigationError> {
        self.expect_view(AppView::Profile)?;
        tracing::info!(email = %user.email, "profile saved");
        self.user = Some(user);
        self.notice = None;
        self.set_view(AppView::Offers);
        Ok(())
    }

    /// Navigation bar entry point.
    pub fn navigate(&mut self, view: AppView) -> Result<(), NavigationError> {
        if self.user.is_none() {
            return Err(NavigationError::NotSignedIn);
        }
        if !NAV_ITEMS.contains(&view) {
            return Err(NavigationError::NotNavigable(view));
        }
        self.notice = None;
        self.set_view(view);
        Ok(())
    }

    /// Open an inbox message. Returns whether a message with `id` exists.
    pub fn open_message(&mut self, id: &str) -> bool {
        let rules = &self.rules.inbox;
        match self.user.as_mut() {
            Some(user) => inbox::open_message(&mut user.messages, id, rules).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LoginForm;
    use crate::catalog::find_offer;
    use crate::profile::ProfileForm;
    use crate::review::{ReviewFlow, ReviewStep};

    fn signed_in() -> AppStore {
        let mut store = AppStore::default();
        let user = LoginForm {
            email: "a@u.ac.jp".to_string(),
            answer: "ramen is bad".to_string(),
            agreed: true,
        }
        .login(&store.rules().auth)
        .unwrap();
        store.login(user).unwrap();
        store
    }

    #[test]
    fn starts_at_auth_without_nav() {
        let store = AppStore::default();
        assert_eq!(store.view(), AppView::Auth);
        assert!(store.user().is_none());
        assert!(!store.shows_nav());
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn login_seeds_inbox_and_shows_offers() {
        let store = signed_in();
        assert_eq!(store.view(), AppView::Offers);
        assert_eq!(store.points(), 1250);
        assert_eq!(store.user().unwrap().messages.len(), 2);
        assert_eq!(store.unread_count(), 2);
        assert!(store.shows_nav());
    }

    #[test]
    fn navigation_requires_login() {
        let mut store = AppStore::default();
        assert_eq!(
            store.navigate(AppView::Rewards),
            Err(NavigationError::NotSignedIn)
        );
        assert_eq!(
            store.select_offer(find_offer("1").unwrap()),
            Err(NavigationError::NotSignedIn)
        );
        assert_eq!(store.view(), AppView::Auth);
    }

    #[test]
    fn auth_and_review_are_not_nav_targets() {
        let mut store = signed_in();
        assert_eq!(
            store.navigate(AppView::Auth),
            Err(NavigationError::NotNavigable(AppView::Auth))
        );
        assert_eq!(
            store.navigate(AppView::Review),
            Err(NavigationError::NotNavigable(AppView::Review))
        );
        for view in NAV_ITEMS {
            store.navigate(view).unwrap();
            assert_eq!(store.view(), view);
        }
    }

    #[test]
    fn completion_pays_once_and_clears_offer() {
        let mut store = signed_in();
        store.select_offer(find_offer("1").unwrap()).unwrap();
        assert_eq!(store.complete_review(), Ok(1750));
        assert!(store.selected_offer().is_none());
        assert_eq!(store.view(), AppView::Rewards);
        assert_eq!(store.complete_review(), Err(NavigationError::NoActiveReview));
        assert_eq!(store.points(), 1750);
    }

    #[test]
    fn cancel_returns_to_offers_without_points() {
        let mut store = signed_in();
        store.select_offer(find_offer("2").unwrap()).unwrap();
        store.cancel_review();
        assert_eq!(store.view(), AppView::Offers);
        assert_eq!(store.points(), 1250);
    }

    #[test]
    fn missing_address_detour_through_profile() {
        let mut store = signed_in();
        let offer = find_offer("3").unwrap();
        store.select_offer(offer).unwrap();

        let mut flow = ReviewFlow::new(offer.clone());
        let err = flow.request_sample(store.user()).unwrap_err();
        store.request_profile_edit(Some(err.to_string())).unwrap();
        assert_eq!(store.view(), AppView::Profile);
        assert!(store.notice().is_some());

        let form = ProfileForm {
            name: "Aki".to_string(),
            address: "京都府京都市".to_string(),
        };
        let updated = form.apply(store.user().unwrap());
        store.save_profile(updated).unwrap();
        assert_eq!(store.view(), AppView::Offers);
        assert!(store.notice().is_none());

        store.select_offer(offer).unwrap();
        let mut flow = ReviewFlow::new(offer.clone());
        flow.request_sample(store.user()).unwrap();
        assert_eq!(flow.step(), ReviewStep::Shipping);
    }

    #[test]
    fn ledger_follows_points() {
        let mut store = signed_in();
        assert!(store.ledger().rows[1].locked);
        store.select_offer(find_offer("2").unwrap()).unwrap();
        store.complete_review().unwrap();
        assert!(!store.ledger().rows[1].locked);
        assert_eq!(store.ledger().progress_percent, 35.0);
    }

    #[test]
    fn open_message_respects_inbox_rules() {
        let mut store = signed_in();
        assert!(store.open_message("1"));
        assert!(!store.open_message("missing"));
        assert_eq!(store.unread_count(), 2);

        let mut store = AppStore::new(RulesConfig::default().with_mark_read_on_open(true));
        let user = LoginForm {
            email: "b@u.ac.jp".to_string(),
            answer: "ok".to_string(),
            agreed: true,
        }
        .login(&store.rules().auth)
        .unwrap();
        store.login(user).unwrap();
        assert!(store.open_message("1"));
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn ux_offer_scenario() {
        let mut store = AppStore::default();
        let user = LoginForm {
            email: "a@u.ac.jp".to_string(),
            answer: "ramen is bad".to_string(),
            agreed: true,
        }
        .login(&store.rules().auth)
        .unwrap();
        store.login(user).unwrap();
        assert_eq!(store.view(), AppView::Offers);
        assert_eq!(store.points(), 1250);

        let offer = find_offer("2").unwrap();
        store.select_offer(offer).unwrap();
        let mut flow = ReviewFlow::new(offer.clone());
        assert_eq!(flow.step(), ReviewStep::Compose);

        flow.set_text("a".repeat(50));
        assert!(flow.can_submit(&store.rules().review));
        flow.submit(&store.rules().review).unwrap();
        store.complete_review().unwrap();

        assert_eq!(store.points(), 1750);
        assert_eq!(store.view(), AppView::Rewards);
    }

    #[test]
    fn second_login_keeps_earned_points() {
        let mut store = signed_in();
        store.select_offer(find_offer("1").unwrap()).unwrap();
        store.complete_review().unwrap();

        let again = LoginForm {
            email: "c@u.ac.jp".to_string(),
            answer: "ramen is bad".to_string(),
            agreed: true,
        }
        .login(&store.rules().auth)
        .unwrap();
        assert_eq!(store.login(again), Err(NavigationError::AlreadySignedIn));
        assert_eq!(store.view(), AppView::Rewards);
        assert_eq!(store.points(), 1750);
        assert_eq!(store.user().unwrap().email, "a@u.ac.jp");
    }

    #[test]
    fn profile_save_cannot_bypass_sign_up() {
        let mut store = AppStore::default();
        let forged = User {
            email: "x@gmail.com".to_string(),
            name: None,
            tags: vec![],
            points: 99999,
            address: None,
            messages: vec![],
        };
        assert_eq!(store.save_profile(forged), Err(NavigationError::NotSignedIn));
        assert_eq!(store.view(), AppView::Auth);
        assert!(store.user().is_none());
    }

    #[test]
    fn profile_transitions_require_their_source_view() {
        let mut store = signed_in();
        assert_eq!(
            store.request_profile_edit(None),
            Err(NavigationError::WrongView {
                expected: AppView::Review,
                actual: AppView::Offers,
            })
        );
        assert_eq!(store.view(), AppView::Offers);

        let user = store.user().unwrap().clone();
        assert_eq!(
            store.save_profile(user.clone()),
            Err(NavigationError::WrongView {
                expected: AppView::Profile,
                actual: AppView::Offers,
            })
        );

        store.navigate(AppView::Profile).unwrap();
        store.save_profile(user).unwrap();
        assert_eq!(store.view(), AppView::Offers);
    }
}
