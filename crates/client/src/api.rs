//! # REST API client
//!
//! Thin wrapper over the BedBet REST server. All requests go through
//! [`ApiClient`], which owns the base URL, the HTTP client and the token
//! store, so individual calls never look up credentials themselves.
//!
//! Failed replies are turned into [`BetError::Api`] carrying the server's
//! own message, read from `detail.message` or `message` when present.

use std::sync::Arc;
use std::time::Duration;

use bedbet_core::errors::{BetError, BetResult};
use bedbet_core::models::{
    auth::{SigninRequest, SigninResponse, SignupRequest, VerificationCodeRequest, VerifyEmailRequest},
    team::{CreateTeamRequest, JoinTeamRequest, Team, TeamInfoResponse, TeamListResponse},
    user::{UserInfo, UserInfoResponse},
    wallet::AmountRequest,
    MessageResponse,
};
use eyre::eyre;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::token::TokenStore;

/// Message returned when an authenticated call is made without a token.
pub const TOKEN_REQUIRED: &str = "Token required";

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> BetResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| BetError::Network(eyre!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            tokens,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// The stored token, or an authentication error when there is none.
    pub async fn ensure_token(&self) -> BetResult<String> {
        self.tokens
            .get()
            .await?
            .ok_or_else(|| BetError::Authentication(TOKEN_REQUIRED.to_string()))
    }

    /// JSON content type, plus a bearer token when one is stored.
    pub async fn auth_headers(&self) -> BetResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.tokens.get().await? {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| BetError::Authentication("Stored token is not a valid header".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    pub async fn signin(&self, request: &SigninRequest) -> BetResult<SigninResponse> {
        self.post_public("/auth/signin", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> BetResult<MessageResponse> {
        self.post_public("/auth/signup", request).await
    }

    pub async fn request_verification_code(&self, email: &str) -> BetResult<MessageResponse> {
        let request = VerificationCodeRequest {
            email: email.to_string(),
        };
        self.post_public("/auth/verify/request", &request).await
    }

    pub async fn verify_email(&self, email: &str, code: &str) -> BetResult<MessageResponse> {
        let request = VerifyEmailRequest {
            email: email.to_string(),
            code: code.to_string(),
        };
        self.post_public("/auth/verify/email", &request).await
    }

    /// Profile of the signed-in user.
    pub async fn user_info(&self) -> BetResult<UserInfo> {
        let response: UserInfoResponse = self.get_authed("/user/info").await?;
        response
            .user
            .ok_or_else(|| BetError::NotFound("User not found".to_string()))
    }

    pub async fn user_info_by_uid(&self, user_uid: &str) -> BetResult<UserInfo> {
        let path = format!("/user/info/{}", urlencoding::encode(user_uid));
        let response: UserInfoResponse = self.get_authed(&path).await?;
        response
            .user
            .ok_or_else(|| BetError::NotFound(format!("User {} not found", user_uid)))
    }

    pub async fn team_list(&self) -> BetResult<Vec<Team>> {
        let response: TeamListResponse = self.get_authed("/team/list").await?;

        if response.status_code != 200 && response.status_code != 201 {
            let message = response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Failed to get teams".to_string());
            return Err(BetError::Api {
                status: response.status_code,
                message,
            });
        }

        Ok(response.teams)
    }

    pub async fn team_info(&self, team_uid: &str) -> BetResult<Team> {
        let path = format!("/team/info/{}", urlencoding::encode(team_uid));
        let response: TeamInfoResponse = self.get_authed(&path).await?;
        Ok(response.team)
    }

    pub async fn join_team(&self, request: &JoinTeamRequest) -> BetResult<MessageResponse> {
        self.post_authed("/team/join", request).await
    }

    pub async fn create_team(&self, request: &CreateTeamRequest) -> BetResult<MessageResponse> {
        self.post_authed("/team/create", request).await
    }

    /// Ask for coins to be credited (`POST /coin/request`).
    pub async fn request_coin(&self, amount: u64) -> BetResult<MessageResponse> {
        self.post_authed("/coin/request", &AmountRequest { amount }).await
    }

    /// Ask for coins to be paid out (`POST /money/request`).
    pub async fn request_money(&self, amount: u64) -> BetResult<MessageResponse> {
        self.post_authed("/money/request", &AmountRequest { amount }).await
    }

    async fn post_public<B, T>(&self, path: &str, body: &B) -> BetResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        self.send(self.http.post(url).json(body)).await
    }

    async fn get_authed<T>(&self, path: &str) -> BetResult<T>
    where
        T: DeserializeOwned,
    {
        self.ensure_token().await?;
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        let headers = self.auth_headers().await?;
        self.send(self.http.get(url).headers(headers)).await
    }

    async fn post_authed<B, T>(&self, path: &str, body: &B) -> BetResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.ensure_token().await?;
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        let headers = self.auth_headers().await?;
        self.send(self.http.post(url).headers(headers).json(body)).await
    }

    async fn send<T>(&self, request: RequestBuilder) -> BetResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| BetError::Network(eyre!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BetError::Network(eyre!("Failed to read response: {}", e)))?;

        if !(200..300).contains(&status) {
            let message = error_message(&body, status);
            warn!("Request rejected with HTTP {}: {}", status, message);
            return Err(BetError::Api { status, message });
        }

        // an empty success body reads as an empty object
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        serde_json::from_str(body)
            .map_err(|e| BetError::Network(eyre!("Malformed response body: {}", e)))
    }
}

/// User-facing message for a failed reply.
///
/// Prefers `detail.message`, then `message`, then `HTTP <status>`.
pub fn error_message(body: &str, status: u16) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|json| {
            json.pointer("/detail/message")
                .and_then(Value::as_str)
                .or_else(|| json.get("message").and_then(Value::as_str))
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}
