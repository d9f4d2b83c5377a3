use chrono::{NaiveDate, TimeZone, Utc};
use shared::domain::Role;

use crate::validation::{
    validate_login, validate_match_calendar, validate_match_history, validate_registration,
    validate_scouting_report, validate_talent_profile, MatchCalendarForm, MatchHistoryForm,
    ScoutingReportForm, TalentProfileForm,
};

fn messages_for<'a>(
    errors: &'a [crate::validation::FieldError],
    field: &str,
) -> Vec<&'a str> {
    errors
        .iter()
        .filter(|error| error.field == field)
        .map(|error| error.message.as_str())
        .collect()
}

#[test]
fn login_requires_shaped_email_and_password() {
    assert!(validate_login("user@example.com", "secret").is_empty());

    let errors = validate_login("", "");
    assert_eq!(messages_for(&errors, "email"), vec!["Email is required"]);
    assert_eq!(
        messages_for(&errors, "password"),
        vec!["Password is required"]
    );

    for bad in ["plainaddress", "@nodomain.com", "user@", "user@nodot", "a@b@c.com"] {
        let errors = validate_login(bad, "secret");
        assert_eq!(messages_for(&errors, "email"), vec!["Invalid email"], "{bad}");
    }
}

#[test]
fn registration_enforces_password_rules() {
    assert!(validate_registration("user@example.com", "secret", "secret", Role::Scout).is_empty());

    let errors = validate_registration("user@example.com", "short", "short", Role::Talent);
    assert_eq!(
        messages_for(&errors, "password"),
        vec!["Password must be at least 6 characters"]
    );

    let errors = validate_registration("user@example.com", "secret", "different", Role::Talent);
    assert_eq!(
        messages_for(&errors, "confirmPassword"),
        vec!["Passwords must match"]
    );
}

#[test]
fn registration_rejects_admin_role() {
    let errors = validate_registration("user@example.com", "secret", "secret", Role::Admin);
    assert_eq!(
        messages_for(&errors, "userType"),
        vec!["User type must be TALENT or SCOUT"]
    );
}

#[test]
fn talent_profile_bounds() {
    let valid = TalentProfileForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        position: "MIDFIELDER".into(),
        age: 17,
        team_id: None,
    };
    assert!(validate_talent_profile(&valid).is_empty());

    let mut form = valid.clone();
    form.first_name = "   ".into();
    form.position = "STRIKER".into();
    let errors = validate_talent_profile(&form);
    assert_eq!(
        messages_for(&errors, "firstName"),
        vec!["First name is required"]
    );
    assert_eq!(
        messages_for(&errors, "position"),
        vec!["Position is required"]
    );

    let mut form = valid.clone();
    form.age = 4;
    assert_eq!(
        messages_for(&validate_talent_profile(&form), "age"),
        vec!["Age must be at least 5"]
    );
    form.age = 101;
    assert_eq!(
        messages_for(&validate_talent_profile(&form), "age"),
        vec!["Age must be less than 100"]
    );
    form.age = 5;
    assert!(validate_talent_profile(&form).is_empty());
    form.age = 100;
    assert!(validate_talent_profile(&form).is_empty());
}

#[test]
fn match_history_rules() {
    let valid = MatchHistoryForm {
        opponent_team: "Rivals FC".into(),
        match_date: NaiveDate::from_ymd_opt(2024, 3, 9),
        goals: 2,
        assists: 0,
    };
    assert!(validate_match_history(&valid).is_empty());

    let form = MatchHistoryForm {
        opponent_team: "".into(),
        match_date: None,
        goals: -1,
        assists: -2,
    };
    let errors = validate_match_history(&form);
    assert_eq!(
        messages_for(&errors, "opponentTeam"),
        vec!["Opponent team is required"]
    );
    assert_eq!(
        messages_for(&errors, "matchDate"),
        vec!["Match date is required"]
    );
    assert_eq!(
        messages_for(&errors, "goals"),
        vec!["Goals cannot be negative"]
    );
    assert_eq!(
        messages_for(&errors, "assists"),
        vec!["Assists cannot be negative"]
    );
}

#[test]
fn calendar_requires_two_distinct_teams() {
    let when = Utc.with_ymd_and_hms(2024, 6, 1, 18, 30, 0).unwrap();
    let valid = MatchCalendarForm {
        home_team_id: Some(1),
        guest_team_id: Some(2),
        match_date_time: Some(when),
        description: "League round 4".into(),
    };
    assert!(validate_match_calendar(&valid).is_empty());

    let form = MatchCalendarForm {
        home_team_id: Some(1),
        guest_team_id: Some(1),
        match_date_time: None,
        description: " ".into(),
    };
    let errors = validate_match_calendar(&form);
    assert_eq!(
        messages_for(&errors, "guestTeamId"),
        vec!["Home and guest teams must differ"]
    );
    assert_eq!(
        messages_for(&errors, "matchDateTime"),
        vec!["Match date is required"]
    );
    assert_eq!(
        messages_for(&errors, "description"),
        vec!["Description is required"]
    );
}

#[test]
fn report_ratings_must_be_one_to_ten() {
    let valid = ScoutingReportForm {
        technical_rating: 1,
        tactical_rating: 10,
        physical_rating: 5,
        mental_rating: 7,
        notes: "Strong in the air".into(),
    };
    assert!(validate_scouting_report(&valid).is_empty());

    let form = ScoutingReportForm {
        technical_rating: 0,
        tactical_rating: 11,
        physical_rating: 5,
        mental_rating: 5,
        notes: "".into(),
    };
    let errors = validate_scouting_report(&form);
    assert_eq!(
        messages_for(&errors, "technicalRating"),
        vec!["Technical rating must be between 1 and 10"]
    );
    assert_eq!(
        messages_for(&errors, "tacticalRating"),
        vec!["Tactical rating must be between 1 and 10"]
    );
    assert_eq!(messages_for(&errors, "notes"), vec!["Notes are required"]);
}
