//! # Room handlers
//!
//! Listing, filtering, creating and joining challenge rooms ("teams" on the
//! server side), plus the detail view of a single room.

use bedbet_core::errors::{BetError, BetResult};
use bedbet_core::filter::{filter_rooms, SlotSelection};
use bedbet_core::input::{clamp_wager, wager_exceeds_limit, MAX_WAGER};
use bedbet_core::models::team::{
    CreateTeamRequest, JoinTeamRequest, MemberInfo, RoomDetail, RoomSummary,
};
use bedbet_core::slot::{try_encode, BookingWindow, SlotIndex};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::handlers::ClientContext;

/// All rooms currently open on the server.
///
/// Teams whose window cannot be read are left out of the list.
pub async fn list_rooms(ctx: &ClientContext) -> BetResult<Vec<RoomSummary>> {
    let teams = ctx.api.team_list().await?;

    let rooms = teams
        .iter()
        .filter_map(|team| match RoomSummary::try_from(team) {
            Ok(room) => Some(room),
            Err(e) => {
                warn!("Skipping team {}: {}", team.team_uid, e);
                None
            }
        })
        .collect::<Vec<_>>();

    info!("Loaded {} of {} rooms", rooms.len(), teams.len());
    Ok(rooms)
}

/// Rooms to show for the current sleep/wake filter.
///
/// Until both slots are picked the full list is shown.
pub fn visible_rooms(
    rooms: &[RoomSummary],
    sleep: Option<SlotIndex>,
    wake: Option<SlotIndex>,
) -> Vec<RoomSummary> {
    filter_rooms(rooms, SlotSelection::from_parts(sleep, wake))
}

/// Generated room name: `room_<start HH:mm>_<end HH:mm>_<unix millis>`.
pub fn room_name(window: &BookingWindow, created_at_millis: i64) -> String {
    format!(
        "room_{}_{}_{}",
        window.start().format("%H:%M"),
        window.end().format("%H:%M"),
        created_at_millis
    )
}

/// Create a room for the picked slots on `today`, staking the typed wager.
pub async fn create_room(
    ctx: &ClientContext,
    start: SlotIndex,
    end: SlotIndex,
    wager_input: &str,
    today: NaiveDate,
) -> BetResult<CreateTeamRequest> {
    let coin = checked_wager(wager_input)?;
    let window = try_encode(start, end, today)?;

    let request = CreateTeamRequest {
        name: room_name(&window, Utc::now().timestamp_millis()),
        challenge_start_at: window.start_iso(),
        challenge_end_at: window.end_iso(),
        coin,
    };

    ctx.api.create_team(&request).await?;
    info!(
        "Created room {} ({})",
        request.name,
        window.format_range()
    );
    Ok(request)
}

/// Join an existing room with the typed wager.
pub async fn join_room(ctx: &ClientContext, team_uid: &str, wager_input: &str) -> BetResult<String> {
    let coin = checked_wager(wager_input)?;

    let request = JoinTeamRequest {
        team_uid: team_uid.to_string(),
        coin,
    };
    let response = ctx.api.join_team(&request).await?;

    info!("Joined room {} with {} coins", team_uid, coin);
    Ok(response
        .message
        .unwrap_or_else(|| "Successfully joined team".to_string()))
}

/// A room together with the profile of each participant.
///
/// Participants whose profile cannot be fetched are listed as unknown.
pub async fn room_detail(ctx: &ClientContext, team_uid: &str) -> BetResult<RoomDetail> {
    let team = ctx.api.team_info(team_uid).await?;

    let mut members = Vec::with_capacity(team.teammates.len());
    for teammate in &team.teammates {
        let member = match ctx.api.user_info_by_uid(&teammate.user_uid).await {
            Ok(profile) => MemberInfo::from_profile(teammate, &profile),
            Err(e) => {
                warn!("Could not load teammate {}: {}", teammate.user_uid, e);
                MemberInfo::unknown(teammate)
            }
        };
        members.push(member);
    }

    Ok(RoomDetail { team, members })
}

fn checked_wager(input: &str) -> BetResult<u64> {
    if wager_exceeds_limit(input) {
        return Err(BetError::Validation(format!(
            "Wager must be between 0 and {}",
            MAX_WAGER
        )));
    }
    Ok(clamp_wager(input))
}
