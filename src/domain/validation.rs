//! Field-level validation rules for user input.
//!
//! Rules are declared on [`NewUser`] and [`UserPatch`] with `validator` derives;
//! this module holds the custom rules and the entry points used by the service.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{NewUser, UserPatch};

/// Error code emitted by [`not_blank`].
pub const REQUIRED: &str = "required";

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED).with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Checks a creation input: non-blank name, non-blank email containing `@`.
pub fn validate_create(input: &NewUser) -> Result<(), ValidationErrors> {
    input.validate()
}

/// Checks an update input: non-blank name and email.
///
/// The `@` rule is deliberately not applied here.
pub fn validate_update(input: &UserPatch) -> Result<(), ValidationErrors> {
    input.validate()
}

/// Returns true if any field failed the [`not_blank`] rule.
pub fn has_blank_field(errors: &ValidationErrors) -> bool {
    errors
        .field_errors()
        .values()
        .any(|errs| errs.iter().any(|e| e.code == REQUIRED))
}

/// Flattens validation errors into `{"field": ["message", ...]}`.
///
/// Fields are sorted so the output is stable.
pub fn field_errors(errors: &ValidationErrors) -> Value {
    let fields: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    serde_json::to_value(fields).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role: "QA".to_string(),
        }
    }

    fn patch(name: &str, email: &str) -> UserPatch {
        UserPatch {
            name: name.to_string(),
            email: email.to_string(),
            role: String::new(),
        }
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Sara").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
    }

    #[test]
    fn test_validate_create_accepts_valid_input() {
        assert!(validate_create(&new_user("X", "x@y.com")).is_ok());
    }

    #[test]
    fn test_validate_create_rejects_blank_name() {
        let errors = validate_create(&new_user("  ", "x@y.com")).unwrap_err();

        assert!(has_blank_field(&errors));
        assert_eq!(field_errors(&errors), json!({"name": ["must not be blank"]}));
    }

    #[test]
    fn test_validate_create_rejects_empty_email() {
        let errors = validate_create(&new_user("X", "")).unwrap_err();

        assert!(has_blank_field(&errors));
        assert!(field_errors(&errors).get("email").is_some());
    }

    #[test]
    fn test_validate_create_rejects_email_without_at() {
        let errors = validate_create(&new_user("X", "not-an-email")).unwrap_err();

        assert!(!has_blank_field(&errors));
        assert_eq!(
            field_errors(&errors),
            json!({"email": ["Email must contain '@'"]})
        );
    }

    #[test]
    fn test_validate_update_skips_at_rule() {
        assert!(validate_update(&patch("X", "not-an-email")).is_ok());
    }

    #[test]
    fn test_validate_update_rejects_blank_fields() {
        let errors = validate_update(&patch("", " ")).unwrap_err();

        let details = field_errors(&errors);
        assert!(details.get("name").is_some());
        assert!(details.get("email").is_some());
    }
}
