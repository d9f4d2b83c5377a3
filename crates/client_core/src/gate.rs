use shared::domain::Role;

use crate::{session::Credentials, token::BearerToken};

/// Destinations a front end can navigate to. Only the screens that influence
/// gating decisions are distinguished; everything else behaves the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    TalentOnboarding,
    TalentProfileEdit,
    ScoutOnboarding,
    TalentDashboard,
    TalentHistory,
    ScoutDashboard,
    TalentDirectory,
    TeamDirectory,
    MatchCalendar,
    AccountSettings,
    AdminDashboard,
    AdminUsers,
    AdminTeams,
    AdminCalendar,
}

impl Route {
    fn is_talent_onboarding_flow(self) -> bool {
        matches!(self, Route::TalentOnboarding | Route::TalentProfileEdit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    RedirectToLogin,
    RedirectToHome,
    RedirectToOnboarding,
}

/// Result of the profile-completeness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    /// A talent/scout record exists for the logged-in account.
    Complete,
    /// No record yet; the account must finish onboarding.
    Missing,
    /// Admins have no talent/scout record to probe.
    NotApplicable,
}

/// The protected-screen decision tree.
///
/// Talent accounts without a known talent record are pushed to onboarding
/// before reaching any other protected screen. Scout completeness is only
/// knowable through the server probe ([`ScoutingClient::ensure_profile`]),
/// so scouts pass through here and are redirected by the probe result.
///
/// [`ScoutingClient::ensure_profile`]: crate::ScoutingClient::ensure_profile
pub fn evaluate(
    credentials: Option<&Credentials>,
    allowed_roles: Option<&[Role]>,
    route: Route,
) -> RouteAccess {
    let Some(credentials) = credentials else {
        return RouteAccess::RedirectToLogin;
    };

    if BearerToken::parse(&credentials.token).is_err() {
        return RouteAccess::RedirectToLogin;
    }

    if let Some(allowed) = allowed_roles {
        if !allowed.contains(&credentials.user_role) {
            return RouteAccess::RedirectToHome;
        }
    }

    if credentials.user_role == Role::Talent
        && credentials.user.talent_id.is_none()
        && !route.is_talent_onboarding_flow()
    {
        return RouteAccess::RedirectToOnboarding;
    }

    RouteAccess::Allow
}
