//! The asynchronous session-provider interface
//!
//! Production code swaps the mock for a real identity backend without
//! changing callers; the command layer only ever sees this trait.

use super::types::{SessionError, UserRecord};
use async_trait::async_trait;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Check for a previously stored session at startup.
    async fn restore(&self) -> Result<Option<UserRecord>, SessionError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, SessionError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<UserRecord, SessionError>;

    async fn sign_in_with_google(&self) -> Result<UserRecord, SessionError>;

    async fn sign_out(&self) -> Result<(), SessionError>;
}
