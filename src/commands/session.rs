//! Session commands
//!
//! The session object lives here, behind managed state, and is mutated only
//! by these commands. The provider behind them is swappable; the app ships
//! with the mock.

use crate::session::{Session, SessionProvider, UserRecord};
use std::sync::Arc;
use tauri::State;
use tokio::sync::Mutex;

/// Managed session state: the session object plus its provider.
pub struct SessionState {
    session: Mutex<Session>,
    provider: Arc<dyn SessionProvider>,
}

impl SessionState {
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self {
            session: Mutex::new(Session::default()),
            provider,
        }
    }

    async fn run_with_loading<F, Fut, T>(&self, op: F) -> Result<T, String>
    where
        F: FnOnce(Arc<dyn SessionProvider>) -> Fut,
        Fut: std::future::Future<Output = Result<T, crate::session::SessionError>>,
    {
        {
            let mut session = self.session.lock().await;
            session.loading = true;
        }

        let result = op(Arc::clone(&self.provider)).await;

        let mut session = self.session.lock().await;
        session.loading = false;
        result.map_err(|e| e.to_string())
    }

    async fn set_user(&self, user: Option<UserRecord>) {
        let mut session = self.session.lock().await;
        session.user = user;
    }
}

/// Check for a stored session at startup.
#[tauri::command]
pub async fn session_restore(state: State<'_, SessionState>) -> Result<Session, String> {
    let user = state
        .run_with_loading(|provider| async move { provider.restore().await })
        .await?;
    state.set_user(user).await;
    Ok(state.session.lock().await.clone())
}

#[tauri::command]
pub async fn sign_in(
    email: String,
    password: String,
    state: State<'_, SessionState>,
) -> Result<Session, String> {
    let user = state
        .run_with_loading(|provider| async move { provider.sign_in(&email, &password).await })
        .await?;
    state.set_user(Some(user)).await;

    tracing::info!("[Session] User signed in");
    Ok(state.session.lock().await.clone())
}

#[tauri::command]
pub async fn sign_up(
    email: String,
    password: String,
    display_name: String,
    state: State<'_, SessionState>,
) -> Result<Session, String> {
    let user = state
        .run_with_loading(|provider| async move {
            provider.sign_up(&email, &password, &display_name).await
        })
        .await?;
    state.set_user(Some(user)).await;

    tracing::info!("[Session] User signed up");
    Ok(state.session.lock().await.clone())
}

#[tauri::command]
pub async fn sign_in_with_google(state: State<'_, SessionState>) -> Result<Session, String> {
    let user = state
        .run_with_loading(|provider| async move { provider.sign_in_with_google().await })
        .await?;
    state.set_user(Some(user)).await;

    tracing::info!("[Session] User signed in with Google");
    Ok(state.session.lock().await.clone())
}

#[tauri::command]
pub async fn sign_out(state: State<'_, SessionState>) -> Result<Session, String> {
    state
        .run_with_loading(|provider| async move { provider.sign_out().await })
        .await?;
    state.set_user(None).await;

    tracing::info!("[Session] User signed out");
    Ok(state.session.lock().await.clone())
}

/// Current session snapshot for screens that render conditionally on it.
#[tauri::command]
pub async fn current_session(state: State<'_, SessionState>) -> Result<Session, String> {
    Ok(state.session.lock().await.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MockSessionProvider;

    fn test_state() -> SessionState {
        SessionState::new(Arc::new(MockSessionProvider::instant()))
    }

    #[tokio::test]
    async fn test_sign_in_populates_session() {
        let state = test_state();
        let user = state
            .run_with_loading(|p| async move { p.sign_in("me@example.com", "pw").await })
            .await
            .unwrap();
        state.set_user(Some(user)).await;

        let session = state.session.lock().await.clone();
        assert_eq!(session.user.unwrap().email, "me@example.com");
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_failed_sign_in_clears_loading() {
        let state = test_state();
        let err = state
            .run_with_loading(|p| async move { p.sign_in("", "").await })
            .await;
        assert!(err.is_err());

        let session = state.session.lock().await.clone();
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_sign_out_clears_user() {
        let state = test_state();
        let user = state
            .run_with_loading(|p| async move { p.sign_in("me@example.com", "pw").await })
            .await
            .unwrap();
        state.set_user(Some(user)).await;

        state
            .run_with_loading(|p| async move { p.sign_out().await })
            .await
            .unwrap();
        state.set_user(None).await;

        assert!(state.session.lock().await.user.is_none());
    }
}
