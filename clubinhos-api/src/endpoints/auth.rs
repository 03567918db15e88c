use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request};

// Common

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Coordinator,
    Teacher,
    #[default]
    #[serde(other)]
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub common_user: bool,
}

fn default_true() -> bool {
    true
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Generic `{ "message": "..." }` acknowledgement
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct GetMe;

impl Request for GetMe {
    type Data = ();
    type Response = User;

    fn endpoint(&self) -> Cow<'_, str> {
        "/auth/me".into()
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct Logout;

impl Request for Logout {
    type Data = ();
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/auth/logout".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_defaults_missing_flags() {
        let json = r#"{"id":"u1","name":"Ana","email":"ana@clubinhos.org","role":"teacher"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Teacher);
        assert!(user.active);
        assert!(!user.completed);
        assert!(!user.is_admin());
    }

    #[test]
    fn unknown_role_is_a_plain_user() {
        let json = r#"{"id":"u2","name":"Bia","email":"bia@clubinhos.org","role":"guest"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::User);
    }
}
