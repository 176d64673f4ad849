//! # BedBet client
//!
//! Everything the app does besides drawing screens: configuration, token
//! storage, the REST client and one handler per UI action.

use std::sync::Arc;

use eyre::Result;
use tracing::info;

pub mod api;
pub mod config;
pub mod handlers;
pub mod session;
pub mod token;

use crate::api::ApiClient;
use crate::handlers::ClientContext;
use crate::token::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Build a ready-to-use client context from configuration.
///
/// The token store is file-backed when `token_path` is set, in memory
/// otherwise. No request is made here.
pub fn connect(config: config::ClientConfig) -> Result<ClientContext> {
    let tokens: Arc<dyn TokenStore> = match &config.token_path {
        Some(path) => {
            info!("Keeping access token in {}", path.display());
            Arc::new(FileTokenStore::new(path.clone()))
        }
        None => Arc::new(MemoryTokenStore::new()),
    };

    info!("Using API at {}", config.api_base);
    let api = ApiClient::new(config, tokens)?;

    Ok(ClientContext::new(api))
}
