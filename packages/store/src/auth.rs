//! Sign-up gate: university email, reality-check answer and NDA agreement.

use crate::catalog::SEED_TAGS;
use crate::config::AuthRules;
use crate::error::AuthError;
use crate::models::User;

/// Contents of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    /// Answer to the cafeteria reality-check question.
    pub answer: String,
    pub agreed: bool,
}

impl LoginForm {
    /// The submit button is enabled only while the agreement box is ticked.
    pub fn can_submit(&self) -> bool {
        self.agreed
    }

    /// Run the checks in order; the first failure wins.
    pub fn validate(&self, rules: &AuthRules) -> Result<(), AuthError> {
        if !self.email.ends_with(&rules.email_suffix) {
            return Err(AuthError::InvalidEmailDomain {
                suffix: rules.email_suffix.clone(),
            });
        }
        if self.answer.trim().chars().count() < rules.min_answer_chars {
            return Err(AuthError::InsufficientAnswer);
        }
        if !self.agreed {
            return Err(AuthError::AgreementRequired);
        }
        Ok(())
    }

    /// Validate and build the new reviewer. The inbox starts empty; the
    /// store seeds it when the login is applied.
    pub fn login(&self, rules: &AuthRules) -> Result<User, AuthError> {
        self.validate(rules)?;
        Ok(User {
            email: self.email.clone(),
            name: None,
            tags: SEED_TAGS.iter().map(|t| t.to_string()).collect(),
            points: rules.starting_points,
            address: None,
            messages: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, answer: &str, agreed: bool) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            answer: answer.to_string(),
            agreed,
        }
    }

    #[test]
    fn wrong_domain_fails_regardless_of_other_fields() {
        let rules = AuthRules::default();
        for f in [
            form("a@gmail.com", "ramen is bad", true),
            form("a@u.ac.jp.com", "", false),
            form("", "x", true),
            form("a@u.AC.JP", "ok!", true),
        ] {
            assert!(matches!(
                f.validate(&rules),
                Err(AuthError::InvalidEmailDomain { .. })
            ));
        }
    }

    #[test]
    fn short_trimmed_answer_fails() {
        let rules = AuthRules::default();
        for answer in ["", " ", "a", "  a  ", "麺"] {
            assert_eq!(
                form("a@u.ac.jp", answer, true).validate(&rules),
                Err(AuthError::InsufficientAnswer)
            );
        }
        assert!(form("a@u.ac.jp", "麺が", true).validate(&rules).is_ok());
    }

    #[test]
    fn agreement_is_checked_last() {
        let rules = AuthRules::default();
        assert_eq!(
            form("a@u.ac.jp", "ramen is bad", false).validate(&rules),
            Err(AuthError::AgreementRequired)
        );
        assert_eq!(
            form("a@u.ac.jp", "", false).validate(&rules),
            Err(AuthError::InsufficientAnswer)
        );
    }

    #[test]
    fn submit_follows_agreement_only() {
        assert!(!form("a@u.ac.jp", "ramen is bad", false).can_submit());
        assert!(form("", "", true).can_submit());
    }

    #[test]
    fn successful_login_builds_seed_user() {
        let user = form("a@u.ac.jp", "ramen is bad", true)
            .login(&AuthRules::default())
            .unwrap();
        assert_eq!(user.email, "a@u.ac.jp");
        assert_eq!(user.points, 1250);
        assert_eq!(
            user.tags,
            vec!["#京都芸術大", "#コスパ重視", "#辛口レビュアー", "#iPhoneユーザー"]
        );
        assert!(user.messages.is_empty());
        assert!(user.name.is_none() && user.address.is_none());
    }
}
