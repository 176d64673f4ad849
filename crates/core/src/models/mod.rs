pub mod auth;
pub mod team;
pub mod user;
pub mod wallet;

use serde::{Deserialize, Serialize};

/// Body of a reply that only carries a message, e.g. `{"message": "Successfully joined team"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
