//! Field validation for the interactive forms, mirroring the rules the
//! original screens enforced before submitting.

use chrono::{DateTime, NaiveDate, Utc};
use shared::domain::{Position, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a dotted,
/// non-empty domain. The server does the authoritative validation.
fn is_email_shaped(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_email_shaped(email.trim()) {
        errors.push(FieldError::new("email", "Invalid email"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    errors
}

pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
    role: Role,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_email_shaped(email.trim()) {
        errors.push(FieldError::new("email", "Invalid email"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if password.len() < 6 {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if confirm_password != password {
        errors.push(FieldError::new("confirmPassword", "Passwords must match"));
    }
    // Admin accounts are provisioned, never self-registered.
    if role == Role::Admin {
        errors.push(FieldError::new(
            "userType",
            "User type must be TALENT or SCOUT",
        ));
    }
    errors
}

#[derive(Debug, Clone)]
pub struct TalentProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub age: i64,
    pub team_id: Option<i64>,
}

pub fn validate_talent_profile(form: &TalentProfileForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.first_name.trim().is_empty() {
        errors.push(FieldError::new("firstName", "First name is required"));
    }
    if form.last_name.trim().is_empty() {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }
    if Position::parse(&form.position).is_none() {
        errors.push(FieldError::new("position", "Position is required"));
    }
    if form.age < 5 {
        errors.push(FieldError::new("age", "Age must be at least 5"));
    } else if form.age > 100 {
        errors.push(FieldError::new("age", "Age must be less than 100"));
    }
    errors
}

#[derive(Debug, Clone)]
pub struct MatchHistoryForm {
    pub opponent_team: String,
    pub match_date: Option<NaiveDate>,
    pub goals: i64,
    pub assists: i64,
}

pub fn validate_match_history(form: &MatchHistoryForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.opponent_team.trim().is_empty() {
        errors.push(FieldError::new("opponentTeam", "Opponent team is required"));
    }
    if form.match_date.is_none() {
        errors.push(FieldError::new("matchDate", "Match date is required"));
    }
    if form.goals < 0 {
        errors.push(FieldError::new("goals", "Goals cannot be negative"));
    }
    if form.assists < 0 {
        errors.push(FieldError::new("assists", "Assists cannot be negative"));
    }
    errors
}

#[derive(Debug, Clone)]
pub struct MatchCalendarForm {
    pub home_team_id: Option<i64>,
    pub guest_team_id: Option<i64>,
    pub match_date_time: Option<DateTime<Utc>>,
    pub description: String,
}

pub fn validate_match_calendar(form: &MatchCalendarForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.home_team_id.is_none() {
        errors.push(FieldError::new("homeTeamId", "Home team is required"));
    }
    if form.guest_team_id.is_none() {
        errors.push(FieldError::new("guestTeamId", "Guest team is required"));
    }
    if let (Some(home), Some(guest)) = (form.home_team_id, form.guest_team_id) {
        if home == guest {
            errors.push(FieldError::new(
                "guestTeamId",
                "Home and guest teams must differ",
            ));
        }
    }
    if form.match_date_time.is_none() {
        errors.push(FieldError::new("matchDateTime", "Match date is required"));
    }
    if form.description.trim().is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }
    errors
}

#[derive(Debug, Clone)]
pub struct ScoutingReportForm {
    pub technical_rating: i64,
    pub tactical_rating: i64,
    pub physical_rating: i64,
    pub mental_rating: i64,
    pub notes: String,
}

pub fn validate_scouting_report(form: &ScoutingReportForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let ratings = [
        ("technicalRating", "Technical", form.technical_rating),
        ("tacticalRating", "Tactical", form.tactical_rating),
        ("physicalRating", "Physical", form.physical_rating),
        ("mentalRating", "Mental", form.mental_rating),
    ];
    for (field, label, value) in ratings {
        if !(1..=10).contains(&value) {
            errors.push(FieldError::new(
                field,
                format!("{label} rating must be between 1 and 10"),
            ));
        }
    }
    if form.notes.trim().is_empty() {
        errors.push(FieldError::new("notes", "Notes are required"));
    }
    errors
}
