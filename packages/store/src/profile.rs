//! Profile editor form: nickname and shipping address.

use crate::models::User;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub address: String,
}

impl ProfileForm {
    /// Prefill from the current user.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            address: user.address.clone().unwrap_or_default(),
        }
    }

    /// Merge both fields into a copy of `user`, overwriting whatever was there.
    /// No format or emptiness checks are made.
    pub fn apply(&self, user: &User) -> User {
        User {
            name: Some(self.name.clone()),
            address: Some(self.address.clone()),
            ..user.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            email: "a@u.ac.jp".to_string(),
            name: Some("old".to_string()),
            tags: vec!["#t".to_string()],
            points: 1750,
            address: None,
            messages: vec![],
        }
    }

    #[test]
    fn prefills_from_user() {
        let form = ProfileForm::from_user(&user());
        assert_eq!(form.name, "old");
        assert_eq!(form.address, "");
    }

    #[test]
    fn apply_overwrites_name_and_address_only() {
        let form = ProfileForm {
            name: String::new(),
            address: "京都府京都市左京区北白川".to_string(),
        };
        let updated = form.apply(&user());
        assert_eq!(updated.name.as_deref(), Some(""));
        assert_eq!(updated.shipping_address(), Some("京都府京都市左京区北白川"));
        assert_eq!(updated.points, 1750);
        assert_eq!(updated.tags, vec!["#t"]);
        assert_eq!(updated.email, "a@u.ac.jp");
    }
}
