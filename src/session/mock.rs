//! Mock session provider
//!
//! Simulates the identity backend with fixed delays matching the original
//! app's timers: 1s restore, 1.5s sign-in/sign-up, 2s Google, 0.5s sign-out.
//! The delay scale is injectable so tests run instantly.

use super::google::GoogleAuthConfig;
use super::provider::SessionProvider;
use super::types::{SessionError, UserRecord};
use async_trait::async_trait;
use std::time::Duration;

pub struct MockSessionProvider {
    google: GoogleAuthConfig,
    /// Multiplier applied to every simulated delay. 0.0 in tests.
    delay_scale: f32,
}

impl MockSessionProvider {
    pub fn new() -> Self {
        Self {
            google: GoogleAuthConfig::default(),
            delay_scale: 1.0,
        }
    }

    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            google: GoogleAuthConfig::default(),
            delay_scale: 0.0,
        }
    }

    async fn simulate_latency(&self, millis: u64) {
        let scaled = (millis as f32 * self.delay_scale) as u64;
        if scaled > 0 {
            tokio::time::sleep(Duration::from_millis(scaled)).await;
        }
    }
}

impl Default for MockSessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn restore(&self) -> Result<Option<UserRecord>, SessionError> {
        self.simulate_latency(1000).await;
        // No stored session: the app always starts at the login screen.
        Ok(None)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, SessionError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }

        self.simulate_latency(1500).await;
        Ok(UserRecord {
            uid: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            display_name: "Test User".to_string(),
            photo_url: None,
            provider: "password".to_string(),
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<UserRecord, SessionError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }

        self.simulate_latency(1500).await;
        Ok(UserRecord {
            uid: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            display_name: display_name.to_string(),
            photo_url: None,
            provider: "password".to_string(),
        })
    }

    async fn sign_in_with_google(&self) -> Result<UserRecord, SessionError> {
        if !self.google.is_development {
            // The real authorization-code exchange needs a backend; without
            // one the flow cannot complete.
            return Err(SessionError::ProviderUnavailable(
                "Google sign-in requires backend token exchange".to_string(),
            ));
        }

        self.simulate_latency(self.google.development.simulated_delay_ms)
            .await;
        Ok(self.google.development.mock_user.clone())
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.simulate_latency(500).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_restore_finds_no_stored_session() {
        let provider = MockSessionProvider::instant();
        assert!(provider.restore().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_returns_user_record() {
        let provider = MockSessionProvider::instant();
        let user = provider.sign_in("me@example.com", "hunter2").await.unwrap();
        assert_eq!(user.email, "me@example.com");
        assert_eq!(user.display_name, "Test User");
        assert_eq!(user.provider, "password");
    }

    #[tokio::test]
    async fn test_sign_in_rejects_empty_credentials() {
        let provider = MockSessionProvider::instant();
        let err = provider.sign_in("", "hunter2").await;
        assert!(matches!(err, Err(SessionError::InvalidCredentials)));
        let err = provider.sign_in("me@example.com", "").await;
        assert!(matches!(err, Err(SessionError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_up_keeps_display_name() {
        let provider = MockSessionProvider::instant();
        let user = provider
            .sign_up("new@example.com", "hunter2", "New User")
            .await
            .unwrap();
        assert_eq!(user.display_name, "New User");
    }

    #[tokio::test]
    async fn test_google_sign_in_uses_development_mock_user() {
        let provider = MockSessionProvider::instant();
        let user = provider.sign_in_with_google().await.unwrap();
        assert_eq!(user.provider, "google");
        assert_eq!(user.email, "testuser@gmail.com");
    }
}
