use shared::domain::{Role, TalentId};

use super::support::{credentials, mint_token};
use crate::gate::{evaluate, Route, RouteAccess};

fn talent_credentials(with_profile: bool) -> crate::Credentials {
    let token = mint_token("talent@example.com", 3, &["ROLE_TALENT"]);
    let mut credentials = credentials("talent@example.com", 3, Role::Talent, token);
    if with_profile {
        credentials.user.talent_id = Some(TalentId(31));
    }
    credentials
}

#[test]
fn anonymous_visitors_are_sent_to_login() {
    assert_eq!(
        evaluate(None, None, Route::TalentDashboard),
        RouteAccess::RedirectToLogin
    );
}

#[test]
fn malformed_token_is_treated_as_logged_out() {
    let mut credentials = talent_credentials(true);
    credentials.token = "not.a-real-token".into();
    assert_eq!(
        evaluate(Some(&credentials), None, Route::TalentDashboard),
        RouteAccess::RedirectToLogin
    );
}

#[test]
fn disallowed_role_is_sent_home() {
    let credentials = talent_credentials(true);
    assert_eq!(
        evaluate(
            Some(&credentials),
            Some(&[Role::Admin]),
            Route::AdminDashboard
        ),
        RouteAccess::RedirectToHome
    );
}

#[test]
fn allowed_role_passes() {
    let credentials = talent_credentials(true);
    assert_eq!(
        evaluate(
            Some(&credentials),
            Some(&[Role::Talent, Role::Admin]),
            Route::TalentDashboard
        ),
        RouteAccess::Allow
    );
}

#[test]
fn talent_without_profile_is_pushed_to_onboarding() {
    let credentials = talent_credentials(false);
    assert_eq!(
        evaluate(Some(&credentials), None, Route::TalentDashboard),
        RouteAccess::RedirectToOnboarding
    );
    assert_eq!(
        evaluate(Some(&credentials), None, Route::TalentHistory),
        RouteAccess::RedirectToOnboarding
    );
}

#[test]
fn onboarding_routes_stay_reachable_without_profile() {
    let credentials = talent_credentials(false);
    assert_eq!(
        evaluate(Some(&credentials), None, Route::TalentOnboarding),
        RouteAccess::Allow
    );
    assert_eq!(
        evaluate(Some(&credentials), None, Route::TalentProfileEdit),
        RouteAccess::Allow
    );
}

#[test]
fn scouts_are_not_pre_gated_on_profile() {
    // Scout completeness is only knowable via the server probe, so the
    // synchronous gate lets scouts through.
    let token = mint_token("scout@example.com", 4, &["ROLE_SCOUT"]);
    let credentials = credentials("scout@example.com", 4, Role::Scout, token);
    assert_eq!(
        evaluate(Some(&credentials), None, Route::ScoutDashboard),
        RouteAccess::Allow
    );
}
