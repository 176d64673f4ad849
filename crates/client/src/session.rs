//! Shared login state.
//!
//! Every screen reads the same [`SessionState`]; only [`SessionState::establish`]
//! and [`SessionState::clear`] change it, and both swap the whole session at
//! once. Readers get an immutable snapshot.

use std::sync::Arc;

use bedbet_core::models::user::Session;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<Option<Arc<Session>>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session, if any, with `session`.
    pub async fn establish(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        *self.inner.write().await = Some(session.clone());
        info!("Session established for {}", session.user.email);
        session
    }

    pub async fn clear(&self) {
        if self.inner.write().await.take().is_some() {
            info!("Session cleared");
        }
    }

    /// Snapshot of the active session.
    pub async fn current(&self) -> Option<Arc<Session>> {
        self.inner.read().await.clone()
    }

    pub async fn is_active(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Swap in a copy of the active session built by `update`.
    ///
    /// Does nothing without an active session.
    pub async fn replace_with<F>(&self, update: F) -> Option<Arc<Session>>
    where
        F: FnOnce(&Session) -> Session,
    {
        let mut guard = self.inner.write().await;
        let next = Arc::new(update(guard.as_deref()?));
        *guard = Some(next.clone());
        Some(next)
    }
}
