use serde::{Deserialize, Serialize};

use crate::models::user::{User, UserInfo};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl SigninResponse {
    /// Profile for the new session.
    ///
    /// Fields the server left out fall back to `fallback`, which carries
    /// whatever the user typed into the form.
    pub fn session_user(&self, fallback: &User) -> User {
        let info = self.user.clone().unwrap_or_default();
        User {
            name: info.name.unwrap_or_else(|| fallback.name.clone()),
            email: info.email.unwrap_or_else(|| fallback.email.clone()),
            bank: info.bank.unwrap_or_else(|| fallback.bank.clone()),
            account_number: info
                .account_number
                .unwrap_or_else(|| fallback.account_number.clone()),
            coin: info.coin.unwrap_or(fallback.coin),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub account_number: String,
    pub bank: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCodeRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}
