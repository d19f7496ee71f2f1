//! Google OAuth configuration
//!
//! Centralizes the OAuth settings. The authorization-code exchange itself
//! happens against the external provider and is out of scope here; in
//! development mode the flow resolves to a fixed mock identity.

use super::types::UserRecord;

#[derive(Debug, Clone)]
pub struct GoogleAuthConfig {
    /// Set to false once real OAuth credentials are configured.
    pub is_development: bool,
    pub production: GoogleProductionConfig,
    pub development: GoogleDevelopmentConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleProductionConfig {
    pub android_client_id: String,
    pub ios_client_id: String,
    pub web_client_id: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleDevelopmentConfig {
    pub mock_user: UserRecord,
    pub simulated_delay_ms: u64,
}

impl Default for GoogleAuthConfig {
    fn default() -> Self {
        Self {
            is_development: true,
            production: GoogleProductionConfig {
                android_client_id: "your-android-client-id.apps.googleusercontent.com"
                    .to_string(),
                ios_client_id: "your-ios-client-id.apps.googleusercontent.com".to_string(),
                web_client_id: "your-web-client-id.apps.googleusercontent.com".to_string(),
                scopes: vec![
                    "openid".to_string(),
                    "profile".to_string(),
                    "email".to_string(),
                ],
            },
            development: GoogleDevelopmentConfig {
                mock_user: UserRecord {
                    uid: "mock-google-uid-123".to_string(),
                    email: "testuser@gmail.com".to_string(),
                    display_name: "Test User (Google)".to_string(),
                    photo_url: Some("https://via.placeholder.com/150?text=G".to_string()),
                    provider: "google".to_string(),
                },
                simulated_delay_ms: 2000,
            },
        }
    }
}

impl GoogleAuthConfig {
    /// Client id for the current mode. Android is the production default.
    pub fn client_id(&self) -> &str {
        if self.is_development {
            "development-mock-client-id"
        } else {
            &self.production.android_client_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_mode_uses_mock_client_id() {
        let config = GoogleAuthConfig::default();
        assert!(config.is_development);
        assert_eq!(config.client_id(), "development-mock-client-id");
    }

    #[test]
    fn test_production_mode_uses_android_client_id() {
        let config = GoogleAuthConfig {
            is_development: false,
            ..GoogleAuthConfig::default()
        };
        assert!(config.client_id().ends_with(".apps.googleusercontent.com"));
    }
}
