use serde::{Deserialize, Serialize};

use crate::errors::BetResult;
use crate::models::user::UserInfo;
use crate::slot::BookingWindow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teammate {
    #[serde(rename = "userUid")]
    pub user_uid: String,
    pub coin: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(rename = "teamUid")]
    pub team_uid: String,
    #[serde(rename = "ownerUid", default)]
    pub owner_uid: Option<String>,
    pub challenge_start_at: String,
    pub challenge_end_at: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub teammates: Vec<Teammate>,
    #[serde(default)]
    pub bet_coins: i64,
}

impl Team {
    pub fn window(&self) -> BetResult<BookingWindow> {
        BookingWindow::parse(&self.challenge_start_at, &self.challenge_end_at)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamListResponse {
    pub status_code: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfoResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub challenge_start_at: String,
    pub challenge_end_at: String,
    pub coin: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinTeamRequest {
    #[serde(rename = "teamUid")]
    pub team_uid: String,
    pub coin: u64,
}

/// One row of the room list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    pub window: BookingWindow,
    pub participants: usize,
    pub total_coin: i64,
}

impl TryFrom<&Team> for RoomSummary {
    type Error = crate::errors::BetError;

    fn try_from(team: &Team) -> BetResult<Self> {
        Ok(Self {
            id: team.team_uid.clone(),
            name: team.name.clone(),
            window: team.window()?,
            participants: team.teammates.len(),
            total_coin: team.bet_coins,
        })
    }
}

/// A teammate as shown in the room detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub user_uid: String,
    pub name: String,
    pub email: String,
    pub account_number: String,
    pub coin: i64,
}

impl MemberInfo {
    pub const UNKNOWN_NAME: &'static str = "Unknown";
    pub const PLACEHOLDER: &'static str = "-";

    pub fn from_profile(teammate: &Teammate, profile: &UserInfo) -> Self {
        Self {
            user_uid: teammate.user_uid.clone(),
            name: profile
                .name
                .clone()
                .unwrap_or_else(|| Self::UNKNOWN_NAME.to_string()),
            email: profile
                .email
                .clone()
                .unwrap_or_else(|| Self::PLACEHOLDER.to_string()),
            account_number: profile
                .account_number
                .clone()
                .unwrap_or_else(|| Self::PLACEHOLDER.to_string()),
            coin: teammate.coin,
        }
    }

    /// Stand-in for a teammate whose profile could not be fetched.
    pub fn unknown(teammate: &Teammate) -> Self {
        Self {
            user_uid: teammate.user_uid.clone(),
            name: Self::UNKNOWN_NAME.to_string(),
            email: Self::PLACEHOLDER.to_string(),
            account_number: Self::PLACEHOLDER.to_string(),
            coin: teammate.coin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub team: Team,
    pub members: Vec<MemberInfo>,
}
