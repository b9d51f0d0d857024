//! # Rules configuration: `devils_voice.toml`
//!
//! Every constant the flows depend on lives in [`RulesConfig`] so the app can
//! be tuned without touching code. The file is optional: the UI looks for
//! [`RulesConfig::filename`] in the platform config directory on native
//! targets and uses [`RulesConfig::default`] everywhere else.
//!
//! ## Structure
//!
//! ```toml
//! [auth]
//! email_suffix = ".ac.jp"
//! min_answer_chars = 2
//! starting_points = 1250
//!
//! [review]
//! min_chars = 50
//! completion_points = 500
//! delivery_delay_ms = 800
//! trigger_phrases = ["考えられます", "包括的"]
//!
//! [rewards]
//! level_band_max = 5000
//!
//! [inbox]
//! mark_read_on_open = false
//! ```
//!
//! All sections and fields are `#[serde(default)]`, so a missing or partial
//! file is equivalent to the defaults for whatever it leaves out.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration stored in `devils_voice.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub auth: AuthRules,
    #[serde(default)]
    pub review: ReviewRules,
    #[serde(default)]
    pub rewards: RewardRules,
    #[serde(default)]
    pub inbox: InboxRules,
}

/// Sign-up gate rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthRules {
    /// Required literal suffix of the email address.
    pub email_suffix: String,
    /// Minimum code points in the trimmed reality-check answer.
    pub min_answer_chars: usize,
    pub starting_points: u32,
}

impl Default for AuthRules {
    fn default() -> Self {
        Self {
            email_suffix: ".ac.jp".to_string(),
            min_answer_chars: 2,
            starting_points: 1250,
        }
    }
}

/// Review flow rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewRules {
    /// Minimum code points before a review can be submitted.
    pub min_chars: usize,
    /// Points awarded per completed review.
    pub completion_points: u32,
    /// Pause between "delivered" and the review form.
    pub delivery_delay_ms: u64,
    /// Generic phrases that raise the subjective-language advisory.
    pub trigger_phrases: Vec<String>,
}

impl Default for ReviewRules {
    fn default() -> Self {
        Self {
            min_chars: 50,
            completion_points: 500,
            delivery_delay_ms: 800,
            trigger_phrases: [
                "考えられます",
                "包括的",
                "ユーザー体験",
                "インターフェース",
                "結論として",
                "非常に",
                "最適化",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Rewards ledger rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardRules {
    /// Points at which the level progress bar is full.
    pub level_band_max: u32,
}

impl Default for RewardRules {
    fn default() -> Self {
        Self { level_band_max: 5000 }
    }
}

/// Inbox behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboxRules {
    /// Clear a message's unread flag when it is opened. Off by default, which
    /// keeps the unread badge permanent.
    pub mark_read_on_open: bool,
}

impl RulesConfig {
    /// Builder method to enable mark-as-read on open.
    pub fn with_mark_read_on_open(mut self, enabled: bool) -> Self {
        self.inbox.mark_read_on_open = enabled;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "devils_voice.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(RulesConfig::from_toml("").unwrap(), RulesConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = RulesConfig::from_toml("[review]\nmin_chars = 10\n").unwrap();
        assert_eq!(config.review.min_chars, 10);
        assert_eq!(config.review.completion_points, 500);
        assert_eq!(config.review.trigger_phrases.len(), 7);
        assert_eq!(config.auth.email_suffix, ".ac.jp");
        assert!(!config.inbox.mark_read_on_open);
    }

    #[test]
    fn written_config_reads_back() {
        let mut config = RulesConfig::default().with_mark_read_on_open(true);
        config.review.min_chars = 80;
        let text = config.to_toml().unwrap();
        assert!(text.contains("mark_read_on_open = true"));
        assert_eq!(RulesConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = RulesConfig::load(Path::new("/nonexistent/devils_voice.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(RulesConfig::from_toml("[auth]\nstarting_points = \"lots\"\n").is_err());
    }
}
