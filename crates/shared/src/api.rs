use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    MatchCalendarId, MatchHistoryId, Position, Recommendation, ReportId, Role, ScoutId, TalentId,
    TeamId, UserId,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub user_type: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// The client's view of the authenticated account. `talent_id`/`scout_id`
/// are filled in by the profile probe, not by the auth payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
    pub user_type: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talent_id: Option<TalentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scout_id: Option<ScoutId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: String,
    pub password: String,
    pub user_type: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talent {
    pub id: TalentId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub position: Position,
    pub team_id: Option<TeamId>,
    pub matches_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_history_ids: Option<Vec<MatchHistoryId>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTalent {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub position: Position,
    pub team_id: Option<TeamId>,
    pub matches_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentUpdate {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub position: Position,
    pub team_id: Option<TeamId>,
    pub matches_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub city: String,
    pub age_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_ids: Option<Vec<TalentId>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    pub city: String,
    pub age_group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub name: String,
    pub city: String,
    pub age_group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistory {
    pub id: MatchHistoryId,
    pub talent_id: TalentId,
    pub match_date: NaiveDate,
    pub opponent_team: String,
    pub goals: u32,
    pub assists: u32,
    pub starter: bool,
    pub clean_sheet: bool,
    #[serde(default)]
    pub rating: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatchHistory {
    pub talent_id: TalentId,
    pub match_date: NaiveDate,
    pub opponent_team: String,
    pub goals: u32,
    pub assists: u32,
    pub starter: bool,
    pub clean_sheet: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistoryUpdate {
    pub talent_id: TalentId,
    pub match_date: NaiveDate,
    pub opponent_team: String,
    pub goals: u32,
    pub assists: u32,
    pub starter: bool,
    pub clean_sheet: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCalendar {
    pub id: MatchCalendarId,
    pub home_team_id: TeamId,
    pub guest_team_id: TeamId,
    pub match_date_time: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatchCalendar {
    pub home_team_id: TeamId,
    pub guest_team_id: TeamId,
    pub match_date_time: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCalendarUpdate {
    pub match_date_time: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_team_id: Option<TeamId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scout {
    pub id: ScoutId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub followed_talent_ids: Vec<TalentId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScout {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub followed_talent_ids: Vec<TalentId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutUpdate {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub followed_talent_ids: Vec<TalentId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReport {
    pub id: ReportId,
    pub scout_id: ScoutId,
    pub talent_id: TalentId,
    pub match_id: MatchCalendarId,
    pub report_date: NaiveDate,
    pub technical_rating: u8,
    pub tactical_rating: u8,
    pub physical_rating: u8,
    pub mental_rating: u8,
    pub notes: String,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScoutingReport {
    pub scout_id: ScoutId,
    pub talent_id: TalentId,
    pub match_id: MatchCalendarId,
    pub report_date: NaiveDate,
    pub technical_rating: u8,
    pub tactical_rating: u8,
    pub physical_rating: u8,
    pub mental_rating: u8,
    pub notes: String,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReportUpdate {
    pub report_date: NaiveDate,
    pub technical_rating: u8,
    pub tactical_rating: u8,
    pub physical_rating: u8,
    pub mental_rating: u8,
    pub notes: String,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub user_type: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub user_count: u64,
    pub talent_count: u64,
    pub scout_count: u64,
    pub team_count: u64,
    pub scheduled_match_count: u64,
    pub match_history_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUploadResponse {
    pub url: String,
}
