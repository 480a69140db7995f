use crate::{Result, SharedError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Account kind. Clubs can create and manage tournaments; athletes browse,
/// register interest, and message clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Athlete,
    Club,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Athlete => f.write_str("athlete"),
            UserRole::Club => f.write_str("club"),
        }
    }
}

/// A registered account, persisted wholesale in the local user collection.
///
/// The password is kept as entered: authentication here is a local-only
/// simulation, there is no server and nothing to protect against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: String,

    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub role: UserRole,

    /// Display name of the club this account manages; `None` for athletes.
    pub club_name: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))?;
        if self.role == UserRole::Club && self.club_name.as_deref().unwrap_or("").is_empty() {
            return Err(SharedError::MissingField("club_name".to_string()));
        }
        Ok(())
    }
}

/// An active sign-in, persisted under its own storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub role: UserRole,

    pub club_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn create_test_user() -> User {
        User {
            id: "user-1".to_string(),
            name: "Marina Costa".to_string(),
            email: "marina@example.com".to_string(),
            password: "correct-horse".to_string(),
            role: UserRole::Club,
            club_name: Some("AC Ipiranga".to_string()),
            created_at: "2024-01-10T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_user_validation_success() {
        assert!(create_test_user().validate_fields().is_ok());
    }

    #[test]
    fn test_user_validation_bad_email() {
        let mut user = create_test_user();
        user.email = "not-an-email".to_string();
        assert!(user.validate_fields().is_err());
    }

    #[test]
    fn test_club_account_requires_club_name() {
        let mut user = create_test_user();
        user.club_name = None;
        assert!(matches!(
            user.validate_fields(),
            Err(SharedError::MissingField(_))
        ));

        user.role = UserRole::Athlete;
        assert!(user.validate_fields().is_ok());
    }

    #[test]
    fn test_register_request_short_password() {
        let request = RegisterRequest {
            name: "Marina Costa".to_string(),
            email: "marina@example.com".to_string(),
            password: "short".to_string(),
            role: UserRole::Athlete,
            club_name: None,
        };
        let result = request.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().field_errors().contains_key("password"));
    }

    #[test]
    fn test_role_wire_form() {
        assert_eq!(serde_json::to_string(&UserRole::Club).unwrap(), "\"club\"");
        assert_eq!(
            serde_json::from_str::<UserRole>("\"athlete\"").unwrap(),
            UserRole::Athlete
        );
    }
}
