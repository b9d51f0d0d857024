//! # Review flow state machine
//!
//! A [`ReviewFlow`] is created when an offer is selected and lives as long as
//! the review screen does. Physical offers start at [`ReviewStep::Brief`] and
//! go through sample shipping; every other offer starts at
//! [`ReviewStep::Compose`].
//!
//! ```text
//! Brief --request_sample--> Shipping --simulate_delivery + delay--> Compose
//!   |
//!   +-- no address: MissingShippingAddress (caller opens the profile editor)
//! ```
//!
//! The delivery delay is driven by the caller's timer. [`ReviewFlow::simulate_delivery`]
//! hands out a [`DeliveryTicket`] and [`ReviewFlow::finish_delivery`] only
//! accepts the most recent one, so a timer that fires after the delivery was
//! cancelled or superseded changes nothing.

use crate::config::ReviewRules;
use crate::error::ReviewError;
use crate::models::{Offer, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStep {
    Brief,
    Shipping,
    Compose,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShippingStatus {
    #[default]
    None,
    Requested,
    Delivered,
}

/// Self-assessed confidence, one to three stars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u8 = 3;

    /// Returns `None` outside `1..=3`.
    pub fn new(stars: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

/// Label shown next to the star picker.
pub fn confidence_label(confidence: Option<Confidence>) -> &'static str {
    match confidence.map(|c| c.stars()) {
        None => "未選択",
        Some(1) => "★ 自信なし",
        Some(2) => "★ まあまあ自信あり",
        Some(_) => "★ 絶対の自信あり",
    }
}

/// True if `text` contains any of the generic trigger phrases.
pub fn detect_generic_phrasing<S: AsRef<str>>(text: &str, phrases: &[S]) -> bool {
    phrases.iter().any(|p| {
        let p = p.as_ref();
        !p.is_empty() && text.contains(p)
    })
}

/// Length as the user sees it: Unicode scalar values, not bytes.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Proof that a particular delivery was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryTicket(u64);

/// What a completed review hands back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewSubmission {
    pub offer_id: &'static str,
    pub text: String,
    pub confidence: Option<Confidence>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewFlow {
    offer: Offer,
    step: ReviewStep,
    shipping: ShippingStatus,
    text: String,
    confidence: Option<Confidence>,
    delivery_generation: u64,
    pending_delivery: Option<DeliveryTicket>,
}

impl ReviewFlow {
    pub fn new(offer: Offer) -> Self {
        let step = if offer.needs_sample() {
            ReviewStep::Brief
        } else {
            ReviewStep::Compose
        };
        Self {
            offer,
            step,
            shipping: ShippingStatus::None,
            text: String::new(),
            confidence: None,
            delivery_generation: 0,
            pending_delivery: None,
        }
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    pub fn step(&self) -> ReviewStep {
        self.step
    }

    pub fn shipping(&self) -> ShippingStatus {
        self.shipping
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn confidence(&self) -> Option<Confidence> {
        self.confidence
    }

    /// Ask for a sample to be shipped to the user's address.
    pub fn request_sample(&mut self, user: Option<&User>) -> Result<(), ReviewError> {
        if user.and_then(User::shipping_address).is_none() {
            tracing::warn!(offer = self.offer.id, "sample requested without a shipping address");
            return Err(ReviewError::MissingShippingAddress);
        }
        self.shipping = ShippingStatus::Requested;
        self.step = ReviewStep::Shipping;
        tracing::info!(offer = self.offer.id, "sample requested");
        Ok(())
    }

    /// Mark the sample delivered. The caller waits
    /// [`ReviewRules::delivery_delay_ms`] and then calls [`Self::finish_delivery`].
    pub fn simulate_delivery(&mut self) -> DeliveryTicket {
        self.delivery_generation += 1;
        let ticket = DeliveryTicket(self.delivery_generation);
        self.shipping = ShippingStatus::Delivered;
        self.pending_delivery = Some(ticket);
        tracing::debug!(offer = self.offer.id, "sample delivered, waiting to open the form");
        ticket
    }

    /// Open the review form if `ticket` is the delivery still pending.
    /// Returns whether the step changed.
    pub fn finish_delivery(&mut self, ticket: DeliveryTicket) -> bool {
        if self.pending_delivery != Some(ticket) || self.step != ReviewStep::Shipping {
            tracing::debug!(offer = self.offer.id, "ignoring stale delivery");
            return false;
        }
        self.pending_delivery = None;
        self.step = ReviewStep::Compose;
        true
    }

    /// Invalidate any outstanding delivery ticket.
    pub fn cancel_delivery(&mut self) {
        self.pending_delivery = None;
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Pick a star rating; values outside `1..=3` are ignored.
    pub fn set_confidence(&mut self, stars: u8) {
        if let Some(c) = Confidence::new(stars) {
            self.confidence = Some(c);
        }
    }

    pub fn char_count(&self) -> usize {
        char_count(&self.text)
    }

    /// Whether the subjective-language advisory should be shown.
    pub fn shows_advisory(&self, rules: &ReviewRules) -> bool {
        detect_generic_phrasing(&self.text, &rules.trigger_phrases)
    }

    pub fn can_submit(&self, rules: &ReviewRules) -> bool {
        self.step == ReviewStep::Compose && self.char_count() >= rules.min_chars
    }

    pub fn submit(&self, rules: &ReviewRules) -> Result<ReviewSubmission, ReviewError> {
        if self.step != ReviewStep::Compose {
            return Err(ReviewError::FormNotOpen);
        }
        let actual = self.char_count();
        if actual < rules.min_chars {
            return Err(ReviewError::ReviewTooShort {
                min: rules.min_chars,
                actual,
            });
        }
        Ok(ReviewSubmission {
            offer_id: self.offer.id,
            text: self.text.clone(),
            confidence: self.confidence,
        })
    }
}
