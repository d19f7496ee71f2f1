//! Session types shared between the provider interface and the command layer

use serde::{Deserialize, Serialize};

/// Signed-in identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub provider: String,
}

/// The session object handed to whichever component needs it. Its two fields
/// are updated only by the session-owning state in the command layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<UserRecord>,
    pub loading: bool,
}

/// Failures a session provider can report. Callers surface these as
/// dismissable alerts; nothing here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Sign-in was cancelled")]
    Cancelled,

    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_signed_out() {
        let session = Session::default();
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn test_user_record_camel_case_payload() {
        let user = UserRecord {
            uid: "u-1".to_string(),
            email: "a@b.c".to_string(),
            display_name: "Test User".to_string(),
            photo_url: None,
            provider: "password".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["displayName"], "Test User");
        assert!(value.get("photoUrl").is_none());
    }
}
