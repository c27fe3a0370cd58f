//! DTOs for user endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{NewUser, User, UserPatch};

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Missing or `null` fields become empty strings; blank `name`/`email` are
/// then rejected by validation. Unknown fields, including `id`, are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub role: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            role: req.role,
        }
    }
}

impl From<UserRequest> for UserPatch {
    fn from(req: UserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            role: req.role,
        }
    }
}

/// A user as returned by the API.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Confirmation body for successful deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_missing_fields_become_empty() {
        let req: UserRequest =
            serde_json::from_value(json!({ "name": "X", "email": null })).unwrap();

        assert_eq!(req.name, "X");
        assert!(req.email.is_empty());
        assert!(req.role.is_empty());
    }

    #[test]
    fn test_client_id_is_ignored() {
        let req: UserRequest = serde_json::from_value(
            json!({ "id": "not-a-number", "name": "X", "email": "x@y.com", "role": "QA" }),
        )
        .unwrap();

        let new_user = NewUser::from(req);
        assert_eq!(new_user.name, "X");
        assert_eq!(new_user.role, "QA");
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let result = serde_json::from_value::<UserRequest>(json!({ "name": 5 }));
        assert!(result.is_err());
    }
}
