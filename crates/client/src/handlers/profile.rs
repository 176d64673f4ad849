use bedbet_core::errors::BetResult;
use bedbet_core::models::user::{Session, UserInfo};

use crate::handlers::ClientContext;

/// Fetch the signed-in user's profile.
///
/// Any active session picks up the fetched name, email, account and
/// balance.
pub async fn profile(ctx: &ClientContext) -> BetResult<UserInfo> {
    let info = ctx.api.user_info().await?;

    ctx.session
        .replace_with(|current| merge_profile(current, &info))
        .await;

    Ok(info)
}

fn merge_profile(current: &Session, info: &UserInfo) -> Session {
    let mut next = current.clone();
    if let Some(name) = &info.name {
        next.user.name = name.clone();
    }
    if let Some(email) = &info.email {
        next.user.email = email.clone();
    }
    if let Some(bank) = &info.bank {
        next.user.bank = bank.clone();
    }
    if let Some(account_number) = &info.account_number {
        next.user.account_number = account_number.clone();
    }
    if let Some(coin) = info.coin {
        next.user.coin = coin;
    }
    next
}
