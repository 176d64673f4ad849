use bedbet_core::errors::{BetError, BetResult};
use bedbet_core::input::{is_valid_email, require};
use bedbet_core::models::auth::SigninRequest;
use bedbet_core::models::user::{Session, User};
use bedbet_core::signup::SignupForm;
use std::sync::Arc;
use tracing::{info, warn};

use crate::handlers::ClientContext;

/// Handle the login form.
///
/// Stores the issued token and establishes the session.
pub async fn login(ctx: &ClientContext, email: &str, password: &str) -> BetResult<Arc<Session>> {
    require("Email", email)?;
    require("Password", password)?;

    let typed = User {
        name: String::new(),
        email: email.to_string(),
        bank: String::new(),
        account_number: String::new(),
        coin: 0,
    };
    sign_in(ctx, email, password, &typed).await
}

/// Drop the stored token and the session.
pub async fn logout(ctx: &ClientContext) -> BetResult<()> {
    ctx.api.tokens().clear().await?;
    ctx.session.clear().await;
    info!("Logged out");
    Ok(())
}

/// Guard run when the home screen opens.
///
/// Without a stored token the session is cleared and `false` is returned,
/// telling the caller to go back to the login screen.
pub async fn check_session(ctx: &ClientContext) -> BetResult<bool> {
    if ctx.api.tokens().get().await?.is_some() {
        return Ok(true);
    }

    warn!("No stored token, returning to login");
    ctx.session.clear().await;
    Ok(false)
}

/// Ask the server to email a verification code.
pub async fn request_verification_code(ctx: &ClientContext, email: &str) -> BetResult<String> {
    ensure_email(email)?;
    let response = ctx.api.request_verification_code(email).await?;
    Ok(response
        .message
        .unwrap_or_else(|| "Verification code sent. Check your inbox.".to_string()))
}

/// Submit the emailed code and mark the form verified on success.
///
/// A rejected code clears any earlier verification.
pub async fn verify_email(ctx: &ClientContext, form: &mut SignupForm) -> BetResult<()> {
    ensure_email(&form.email)?;
    require("Verification code", &form.code)?;

    match ctx.api.verify_email(&form.email, form.code.trim()).await {
        Ok(_) => {
            form.email_verified = true;
            info!("Email {} verified", form.email);
            Ok(())
        }
        Err(e) => {
            form.email_verified = false;
            Err(e)
        }
    }
}

/// Create the account, then sign in with the same credentials.
pub async fn signup(ctx: &ClientContext, form: &SignupForm) -> BetResult<Arc<Session>> {
    let request = form.to_request()?;
    ctx.api.signup(&request).await?;
    info!("Account created for {}", request.email);

    sign_in(ctx, &form.email, &form.password, &form.as_user()).await
}

async fn sign_in(
    ctx: &ClientContext,
    email: &str,
    password: &str,
    typed: &User,
) -> BetResult<Arc<Session>> {
    let request = SigninRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = ctx.api.signin(&request).await?;

    ctx.api.tokens().set(&response.access_token).await?;

    let session = Session {
        user: response.session_user(typed),
        token: response.access_token.clone(),
    };
    Ok(ctx.session.establish(session).await)
}

fn ensure_email(email: &str) -> BetResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(BetError::Validation(format!("Invalid email address: {}", email)))
    }
}
