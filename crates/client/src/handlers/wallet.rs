//! Coin balance, top-ups and withdrawals.
//!
//! The server owns the ledger; requests here only ask for a change and then
//! re-read the balance.

use bedbet_core::errors::{BetError, BetResult};
use bedbet_core::input::parse_amount;
use tracing::info;

use crate::handlers::ClientContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletUpdate {
    pub message: String,
    pub balance: i64,
}

/// Re-read the coin balance and store it in the session.
///
/// When the profile carries no balance the last known one is kept.
pub async fn refresh_balance(ctx: &ClientContext) -> BetResult<i64> {
    let info = ctx.api.user_info().await?;

    match info.coin {
        Some(coin) => {
            ctx.session.replace_with(|current| current.with_coin(coin)).await;
            Ok(coin)
        }
        None => Ok(ctx
            .session
            .current()
            .await
            .map(|session| session.user.coin)
            .unwrap_or(0)),
    }
}

/// Ask for coins to be credited.
pub async fn request_top_up(ctx: &ClientContext, amount_input: &str) -> BetResult<WalletUpdate> {
    let amount = parse_amount(amount_input)?;

    let response = ctx.api.request_coin(amount).await?;
    info!("Requested top-up of {} coins", amount);

    finish(ctx, response.message).await
}

/// Ask for `amount` coins to be paid out.
///
/// Amounts above `balance` are refused without contacting the server.
pub async fn request_withdrawal(
    ctx: &ClientContext,
    amount_input: &str,
    balance: i64,
) -> BetResult<WalletUpdate> {
    let amount = parse_amount(amount_input)?;
    if i64::try_from(amount).map_or(true, |amount| amount > balance) {
        return Err(BetError::Validation("Not enough coins".to_string()));
    }

    let response = ctx.api.request_money(amount).await?;
    info!("Requested withdrawal of {} coins", amount);

    finish(ctx, response.message).await
}

async fn finish(ctx: &ClientContext, message: Option<String>) -> BetResult<WalletUpdate> {
    let balance = refresh_balance(ctx).await?;
    Ok(WalletUpdate {
        message: message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Request completed".to_string()),
        balance,
    })
}
