//! Handlers for UI events.
//!
//! Each screen action maps onto one async function taking a
//! [`ClientContext`]. Handlers validate form input, call the server through
//! [`ApiClient`] and keep [`SessionState`] in step with the result.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::session::SessionState;

pub mod auth;
pub mod profile;
pub mod rooms;
pub mod wallet;

/// Shared context for UI event handlers.
///
/// Cheap to clone; every clone talks to the same client and session.
#[derive(Clone)]
pub struct ClientContext {
    pub api: Arc<ApiClient>,
    pub session: SessionState,
}

impl ClientContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            session: SessionState::new(),
        }
    }
}
