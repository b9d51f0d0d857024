//! Error types for the sign-up gate, the review flow and view navigation.
//!
//! Display strings are the messages shown inline in the UI.

use thiserror::Error;

use crate::models::AppView;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("大学のメールアドレス（{suffix}）のみ参加可能です。")]
    InvalidEmailDomain { suffix: String },

    #[error("生活実感を伴う回答を入力してください。")]
    InsufficientAnswer,

    #[error("プロジェクトに参加するには、秘密保持契約への同意が必要です。")]
    AgreementRequired,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("サンプルを受け取るには、マイページで住所を登録する必要があります。")]
    MissingShippingAddress,

    #[error("レビューは最低 {min} 文字必要です（現在 {actual} 文字）。")]
    ReviewTooShort { min: usize, actual: usize },

    #[error("サンプルの到着後にレビューを入力できます。")]
    FormNotOpen,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("ログインが必要です。")]
    NotSignedIn,

    #[error("進行中のレビューがありません。")]
    NoActiveReview,

    #[error("{0:?} is not reachable from the navigation bar")]
    NotNavigable(AppView),

    #[error("すでにログインしています。")]
    AlreadySignedIn,

    #[error("{actual:?} cannot perform a transition that starts from {expected:?}")]
    WrongView { expected: AppView, actual: AppView },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_error_names_the_suffix() {
        let err = AuthError::InvalidEmailDomain {
            suffix: ".ac.jp".to_string(),
        };
        assert_eq!(err.to_string(), "大学のメールアドレス（.ac.jp）のみ参加可能です。");
    }

    #[test]
    fn too_short_reports_counts() {
        let err = ReviewError::ReviewTooShort { min: 50, actual: 12 };
        assert!(err.to_string().contains("50"));
        assert!(err.to_string().contains("12"));
    }
}
