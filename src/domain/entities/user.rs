//! User entity and its creation/update inputs.

use validator::Validate;

use crate::domain::validation::not_blank;

/// A user record owned by the user store.
///
/// The `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Replaces the mutable fields with the patch values, keeping the id.
    pub fn apply(&mut self, patch: UserPatch) {
        self.name = patch.name;
        self.email = patch.email;
        self.role = patch.role;
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(
        custom(function = "not_blank"),
        contains(pattern = "@", code = "email_format", message = "Email must contain '@'")
    )]
    pub email: String,

    pub role: String,
}

/// Replacement values for an existing user.
///
/// Unlike [`NewUser`], the email is only required to be non-blank.
#[derive(Debug, Clone, Validate)]
pub struct UserPatch {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub email: String,

    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_patch_keeps_id() {
        let mut user = User::new(4, "Old Name", "old@example.com", "QA");

        user.apply(UserPatch {
            name: "New Name".to_string(),
            email: "new@example.com".to_string(),
            role: String::new(),
        });

        assert_eq!(user.id, 4);
        assert_eq!(user.name, "New Name");
        assert_eq!(user.email, "new@example.com");
        assert!(user.role.is_empty());
    }
}
