use std::sync::Arc;

use reqwest::{multipart, Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    api::{
        ChangePasswordRequest, LoginRequest, MatchCalendar, MatchCalendarUpdate, MatchHistory,
        MatchHistoryUpdate, NewMatchCalendar, NewMatchHistory, NewScout, NewScoutingReport,
        NewTalent, NewTeam, NewUser, PhotoUploadResponse, RegisterRequest, Scout, ScoutUpdate,
        ScoutingReport, ScoutingReportUpdate, SystemStats, Talent, TalentUpdate, Team, TeamUpdate,
        TokenResponse, UserAccount,
    },
    domain::{
        AgeGroup, MatchCalendarId, MatchHistoryId, Position, ReportId, Role, ScoutId, TalentId,
        TeamId, UserId,
    },
    error::ApiError,
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod gate;
pub mod maintenance;
pub mod session;
pub mod store;
pub mod token;
pub mod validation;

pub use gate::{evaluate, ProfileStatus, Route, RouteAccess};
pub use maintenance::CascadeReport;
pub use session::{
    CredentialStore, Credentials, FileCredentialStore, MemoryCredentialStore, StoreError,
};
pub use token::{BearerToken, TokenClaims, TokenError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("session expired")]
    SessionExpired,
    #[error("resource not found")]
    NotFound,
    #[error("request failed with status {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Login/registration failures, mapped to the messages the original screens
/// showed. The server deliberately reports bad credentials and unknown
/// accounts identically.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Login service not available")]
    ServiceUnavailable,
    #[error("Unable to connect to server. Please check your internet connection.")]
    Connection(#[source] reqwest::Error),
    #[error("registration rejected with status {status}: {message}")]
    RegistrationRejected { status: StatusCode, message: String },
    #[error("server returned an unusable token: {0}")]
    MalformedToken(#[from] TokenError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug, Clone)]
pub enum ClientEvent {
    SessionEstablished { user: UserAccount },
    SessionExpired,
    SessionCleared,
}

/// Client-side talent search criteria. Filtering happens locally over the
/// full talent listing; the service has no search endpoint.
#[derive(Debug, Clone, Default)]
pub struct TalentFilter {
    pub age_group: Option<AgeGroup>,
    pub position: Option<Position>,
    pub team: Option<String>,
}

impl TalentFilter {
    pub fn matches(&self, talent: &Talent) -> bool {
        if let Some(age_group) = self.age_group {
            if !age_group.matches(talent.age) {
                return false;
            }
        }
        if let Some(position) = self.position {
            if talent.position != position {
                return false;
            }
        }
        if let Some(team) = self.team.as_deref() {
            if !team.is_empty() {
                let matched = talent
                    .team_name
                    .as_deref()
                    .map(|name| name.to_lowercase().contains(&team.to_lowercase()))
                    .unwrap_or(false);
                if !matched {
                    return false;
                }
            }
        }
        true
    }
}

#[derive(Debug, Default)]
struct SessionState {
    credentials: Option<Credentials>,
    profile_checked: bool,
}

/// Typed client for the talent-scouting REST service.
///
/// Owns the HTTP connection pool, the persisted login state, and an event
/// channel front ends subscribe to for session transitions. All consistency
/// is "trust the last HTTP response"; there are no retries and no caching
/// beyond the explicit profile-probe memoization.
pub struct ScoutingClient {
    http: Client,
    base_url: String,
    credential_store: Arc<dyn CredentialStore>,
    session: Mutex<SessionState>,
    events: broadcast::Sender<ClientEvent>,
}

/// Match-calendar endpoints surface auth failures to the caller instead of
/// ending the session.
fn is_calendar_path(path: &str) -> bool {
    path.starts_with("match-calendars")
}

impl ScoutingClient {
    pub fn new(base_url: impl Into<String>, credential_store: Arc<dyn CredentialStore>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential_store,
            session: Mutex::new(SessionState::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    // ---- session lifecycle -------------------------------------------------

    /// Loads persisted credentials, accepting them only if the stored token
    /// still parses. Anything suspect is discarded so a malformed token can
    /// never reach the wire on a later request.
    pub async fn restore_session(&self) -> Result<Option<UserAccount>, ClientError> {
        let loaded = match self.credential_store.load().await {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(%err, "failed to load persisted credentials; starting logged out");
                self.credential_store.clear().await?;
                return Ok(None);
            }
        };
        let Some(credentials) = loaded else {
            return Ok(None);
        };

        if let Err(err) = BearerToken::parse(&credentials.token) {
            warn!(%err, "persisted token failed validation; discarding session");
            self.credential_store.clear().await?;
            return Ok(None);
        }

        let user = credentials.user.clone();
        let mut session = self.session.lock().await;
        session.credentials = Some(credentials);
        session.profile_checked = false;
        Ok(Some(user))
    }

    pub async fn current_session(&self) -> Option<Credentials> {
        self.session.lock().await.credentials.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.credentials.is_some()
    }

    async fn establish_session(&self, credentials: Credentials) -> Result<(), ClientError> {
        self.credential_store.save(&credentials).await?;
        let user = credentials.user.clone();
        {
            let mut session = self.session.lock().await;
            session.credentials = Some(credentials);
            session.profile_checked = false;
        }
        let _ = self.events.send(ClientEvent::SessionEstablished { user });
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        {
            let mut session = self.session.lock().await;
            session.credentials = None;
            session.profile_checked = false;
        }
        self.credential_store.clear().await?;
        let _ = self.events.send(ClientEvent::SessionCleared);
        info!("session cleared");
        Ok(())
    }

    async fn expire_session(&self) {
        {
            let mut session = self.session.lock().await;
            session.credentials = None;
            session.profile_checked = false;
        }
        if let Err(err) = self.credential_store.clear().await {
            warn!(%err, "failed to clear stored credentials on expiry");
        }
        let _ = self.events.send(ClientEvent::SessionExpired);
    }

    /// Returns the bearer token to attach, clearing the session if the
    /// stored token is structurally invalid.
    async fn bearer_token(&self) -> Result<String, ClientError> {
        let credentials = { self.session.lock().await.credentials.clone() };
        let Some(credentials) = credentials else {
            return Err(ClientError::NotAuthenticated);
        };
        if let Err(err) = BearerToken::parse(&credentials.token) {
            warn!(%err, "stored bearer token is malformed; ending session");
            self.expire_session().await;
            return Err(ClientError::SessionExpired);
        }
        Ok(credentials.token)
    }

    // ---- response screening ------------------------------------------------

    async fn screen(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN)
            && !is_calendar_path(path)
        {
            warn!(%status, path, "auth failure; ending session");
            self.expire_session().await;
            return Err(ClientError::SessionExpired);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        let message = match response.json::<ApiError>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(ClientError::Api { status, message })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(&token)
            .send()
            .await?;
        Ok(self.screen(path, response).await?.json().await?)
    }

    async fn get_json_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(&token)
            .query(query)
            .send()
            .await?;
        Ok(self.screen(path, response).await?.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&token)
            .json(body)
            .send()
            .await?;
        Ok(self.screen(path, response).await?.json().await?)
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .put(self.endpoint(path))
            .bearer_auth(&token)
            .json(body)
            .send()
            .await?;
        Ok(self.screen(path, response).await?.json().await?)
    }

    async fn delete_resource(&self, path: &str) -> Result<(), ClientError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .delete(self.endpoint(path))
            .bearer_auth(&token)
            .send()
            .await?;
        self.screen(path, response).await?;
        Ok(())
    }

    // ---- auth --------------------------------------------------------------

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.endpoint("auth/register"))
            .json(request)
            .send()
            .await
            .map_err(AuthError::Connection)?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiError>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("registration failed")
                    .to_string(),
            };
            return Err(AuthError::RegistrationRejected { status, message });
        }
        info!(email = %request.email, role = request.user_type.as_str(), "account registered");
        Ok(())
    }

    /// Authenticates and establishes a session. Identity comes out of the
    /// token payload itself: subject, user id, and first role authority.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserAccount, AuthError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.endpoint("auth/login"))
            .json(&request)
            .send()
            .await
            .map_err(AuthError::Connection)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || status == StatusCode::INTERNAL_SERVER_ERROR
        {
            // The server reports bad credentials inconsistently across these
            // three; all of them mean the login was refused.
            return Err(AuthError::InvalidCredentials);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(AuthError::ServiceUnavailable);
        }
        let response = response.error_for_status().map_err(ClientError::Transport)?;

        let body: TokenResponse = response.json().await.map_err(ClientError::Transport)?;
        let token = BearerToken::parse(&body.token)?;
        let claims = token.claims();

        let user = UserAccount {
            id: claims.user_id,
            email: claims.subject.clone(),
            user_type: claims.role,
            talent_id: None,
            scout_id: None,
        };
        self.establish_session(Credentials {
            token: token.as_str().to_string(),
            user_role: claims.role,
            user: user.clone(),
        })
        .await?;

        info!(user_id = user.id.0, role = user.user_type.as_str(), "login succeeded");
        Ok(user)
    }

    pub async fn current_user(&self) -> Result<UserAccount, ClientError> {
        self.get_json("users/me").await
    }

    /// Password changes go through the account update endpoint, preserving
    /// the current role.
    pub async fn change_password(
        &self,
        user_id: UserId,
        email: &str,
        new_password: &str,
    ) -> Result<UserAccount, ClientError> {
        let role = {
            self.session
                .lock()
                .await
                .credentials
                .as_ref()
                .map(|credentials| credentials.user_role)
        }
        .ok_or(ClientError::NotAuthenticated)?;

        let request = ChangePasswordRequest {
            email: email.to_string(),
            password: new_password.to_string(),
            user_type: role,
        };
        self.put_json(&format!("users/{}", user_id.0), &request).await
    }

    // ---- profile gating ----------------------------------------------------

    /// The profile-completeness probe behind protected screens: asks the
    /// server whether a talent/scout record exists for the logged-in account
    /// and patches the stored user with the record id when found. Runs at
    /// most once per session unless [`reset_profile_check`] is called.
    ///
    /// [`reset_profile_check`]: ScoutingClient::reset_profile_check
    pub async fn ensure_profile(&self) -> Result<ProfileStatus, ClientError> {
        let (role, user) = {
            let session = self.session.lock().await;
            let Some(credentials) = session.credentials.as_ref() else {
                return Err(ClientError::NotAuthenticated);
            };
            if session.profile_checked {
                return Ok(match credentials.user_role {
                    Role::Admin => ProfileStatus::NotApplicable,
                    _ => ProfileStatus::Complete,
                });
            }
            (credentials.user_role, credentials.user.clone())
        };

        match role {
            Role::Admin => {
                self.session.lock().await.profile_checked = true;
                Ok(ProfileStatus::NotApplicable)
            }
            Role::Talent => {
                if user.talent_id.is_some() {
                    self.session.lock().await.profile_checked = true;
                    return Ok(ProfileStatus::Complete);
                }
                match self.talent_by_user(user.id).await {
                    Ok(profile) => {
                        self.record_profile_link(Some(profile.id), None).await?;
                        Ok(ProfileStatus::Complete)
                    }
                    Err(ClientError::NotFound) => {
                        info!(user_id = user.id.0, "no talent record yet; onboarding required");
                        Ok(ProfileStatus::Missing)
                    }
                    Err(err) => Err(err),
                }
            }
            Role::Scout => {
                if user.scout_id.is_some() {
                    self.session.lock().await.profile_checked = true;
                    return Ok(ProfileStatus::Complete);
                }
                match self.scout_by_user(user.id).await {
                    Ok(profile) => {
                        self.record_profile_link(None, Some(profile.id)).await?;
                        Ok(ProfileStatus::Complete)
                    }
                    Err(ClientError::NotFound) => {
                        info!(user_id = user.id.0, "no scout record yet; onboarding required");
                        Ok(ProfileStatus::Missing)
                    }
                    Err(err) => Err(err),
                }
            }
        }
    }

    /// Forgets the probe result, e.g. right after onboarding created the
    /// missing record.
    pub async fn reset_profile_check(&self) {
        self.session.lock().await.profile_checked = false;
    }

    async fn record_profile_link(
        &self,
        talent_id: Option<TalentId>,
        scout_id: Option<ScoutId>,
    ) -> Result<(), ClientError> {
        let updated = {
            let mut session = self.session.lock().await;
            let Some(credentials) = session.credentials.as_mut() else {
                return Err(ClientError::NotAuthenticated);
            };
            if talent_id.is_some() {
                credentials.user.talent_id = talent_id;
            }
            if scout_id.is_some() {
                credentials.user.scout_id = scout_id;
            }
            let updated = credentials.clone();
            session.profile_checked = true;
            updated
        };
        self.credential_store.save(&updated).await?;
        Ok(())
    }

    // ---- talents -----------------------------------------------------------

    pub async fn create_talent(&self, talent: &NewTalent) -> Result<Talent, ClientError> {
        let created: Talent = self.post_json("talents", talent).await?;
        info!(talent_id = created.id.0, "talent record created");
        Ok(created)
    }

    pub async fn talent(&self, id: TalentId) -> Result<Talent, ClientError> {
        self.get_json(&format!("talents/{}", id.0)).await
    }

    pub async fn talent_by_user(&self, user_id: UserId) -> Result<Talent, ClientError> {
        self.get_json(&format!("talents/user/{}", user_id.0)).await
    }

    pub async fn list_talents(&self) -> Result<Vec<Talent>, ClientError> {
        self.get_json("talents").await
    }

    /// Fetches the full listing and filters it locally.
    pub async fn search_talents(&self, filter: &TalentFilter) -> Result<Vec<Talent>, ClientError> {
        let mut talents = self.list_talents().await?;
        talents.retain(|talent| filter.matches(talent));
        Ok(talents)
    }

    pub async fn update_talent(
        &self,
        id: TalentId,
        update: &TalentUpdate,
    ) -> Result<Talent, ClientError> {
        self.put_json(&format!("talents/{}", id.0), update).await
    }

    pub async fn delete_talent(&self, id: TalentId) -> Result<(), ClientError> {
        self.delete_resource(&format!("talents/{}", id.0)).await
    }

    pub async fn upload_talent_photo(
        &self,
        id: TalentId,
        filename: &str,
        bytes: Vec<u8>,
        mime_type: Option<&str>,
    ) -> Result<String, ClientError> {
        let path = format!("talents/{}/photo", id.0);
        let token = self.bearer_token().await?;

        let mut part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        if let Some(mime_type) = mime_type {
            part = part.mime_str(mime_type)?;
        }
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint(&path))
            .bearer_auth(&token)
            .multipart(form)
            .send()
            .await?;
        let body: PhotoUploadResponse = self.screen(&path, response).await?.json().await?;
        info!(talent_id = id.0, url = %body.url, "talent photo uploaded");
        Ok(body.url)
    }

    // ---- teams -------------------------------------------------------------

    pub async fn create_team(&self, team: &NewTeam) -> Result<Team, ClientError> {
        self.post_json("teams", team).await
    }

    pub async fn team(&self, id: TeamId) -> Result<Team, ClientError> {
        self.get_json(&format!("teams/{}", id.0)).await
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>, ClientError> {
        self.get_json("teams").await
    }

    pub async fn update_team(&self, id: TeamId, update: &TeamUpdate) -> Result<Team, ClientError> {
        self.put_json(&format!("teams/{}", id.0), update).await
    }

    pub async fn delete_team(&self, id: TeamId) -> Result<(), ClientError> {
        self.delete_resource(&format!("teams/{}", id.0)).await
    }

    // ---- match history -----------------------------------------------------

    pub async fn create_match_history(
        &self,
        entry: &NewMatchHistory,
    ) -> Result<MatchHistory, ClientError> {
        self.post_json("match-history", entry).await
    }

    pub async fn match_history(&self, id: MatchHistoryId) -> Result<MatchHistory, ClientError> {
        self.get_json(&format!("match-history/{}", id.0)).await
    }

    pub async fn list_match_history(&self) -> Result<Vec<MatchHistory>, ClientError> {
        self.get_json("match-history").await
    }

    pub async fn match_history_for_talent(
        &self,
        talent_id: TalentId,
    ) -> Result<Vec<MatchHistory>, ClientError> {
        self.get_json(&format!("match-history/by-talent/{}", talent_id.0))
            .await
    }

    pub async fn update_match_history(
        &self,
        id: MatchHistoryId,
        update: &MatchHistoryUpdate,
    ) -> Result<MatchHistory, ClientError> {
        self.put_json(&format!("match-history/{}", id.0), update).await
    }

    pub async fn delete_match_history(&self, id: MatchHistoryId) -> Result<(), ClientError> {
        self.delete_resource(&format!("match-history/{}", id.0)).await
    }

    // ---- match calendar ----------------------------------------------------

    pub async fn create_match_calendar(
        &self,
        entry: &NewMatchCalendar,
    ) -> Result<MatchCalendar, ClientError> {
        self.post_json("match-calendars", entry).await
    }

    pub async fn match_calendar(
        &self,
        id: MatchCalendarId,
    ) -> Result<MatchCalendar, ClientError> {
        self.get_json(&format!("match-calendars/{}", id.0)).await
    }

    pub async fn list_match_calendar(&self) -> Result<Vec<MatchCalendar>, ClientError> {
        self.get_json("match-calendars").await
    }

    pub async fn match_calendar_by_date_range(
        &self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<MatchCalendar>, ClientError> {
        self.get_json_query(
            "match-calendars/date-range",
            &[("start", start.to_rfc3339()), ("end", end.to_rfc3339())],
        )
        .await
    }

    pub async fn match_calendar_for_team(
        &self,
        team_id: TeamId,
    ) -> Result<Vec<MatchCalendar>, ClientError> {
        self.get_json(&format!("match-calendars/team/{}", team_id.0)).await
    }

    pub async fn update_match_calendar(
        &self,
        id: MatchCalendarId,
        update: &MatchCalendarUpdate,
    ) -> Result<MatchCalendar, ClientError> {
        self.put_json(&format!("match-calendars/{}", id.0), update).await
    }

    pub async fn delete_match_calendar(&self, id: MatchCalendarId) -> Result<(), ClientError> {
        self.delete_resource(&format!("match-calendars/{}", id.0)).await
    }

    // ---- scouts ------------------------------------------------------------

    pub async fn create_scout(&self, scout: &NewScout) -> Result<Scout, ClientError> {
        let created: Scout = self.post_json("scouts", scout).await?;
        info!(scout_id = created.id.0, "scout record created");
        Ok(created)
    }

    pub async fn scout(&self, id: ScoutId) -> Result<Scout, ClientError> {
        self.get_json(&format!("scouts/{}", id.0)).await
    }

    pub async fn scout_by_user(&self, user_id: UserId) -> Result<Scout, ClientError> {
        self.get_json(&format!("scouts/user/{}", user_id.0)).await
    }

    pub async fn list_scouts(&self) -> Result<Vec<Scout>, ClientError> {
        self.get_json("scouts").await
    }

    pub async fn update_scout(
        &self,
        id: ScoutId,
        update: &ScoutUpdate,
    ) -> Result<Scout, ClientError> {
        self.put_json(&format!("scouts/{}", id.0), update).await
    }

    pub async fn delete_scout(&self, id: ScoutId) -> Result<(), ClientError> {
        self.delete_resource(&format!("scouts/{}", id.0)).await
    }

    pub async fn followed_talents(&self, scout_id: ScoutId) -> Result<Vec<Talent>, ClientError> {
        self.get_json(&format!("scouts/{}/followed-talents", scout_id.0)).await
    }

    pub async fn follow_talent(
        &self,
        scout_id: ScoutId,
        talent_id: TalentId,
    ) -> Result<Scout, ClientError> {
        self.post_json(
            &format!("scouts/{}/followed-talents", scout_id.0),
            &[talent_id],
        )
        .await
    }

    /// The service only accepts a replacement follow list, so unfollow is a
    /// read-modify-write: fetch the scout, drop the id, post the remainder.
    pub async fn unfollow_talent(
        &self,
        scout_id: ScoutId,
        talent_id: TalentId,
    ) -> Result<Scout, ClientError> {
        let scout = self.scout(scout_id).await?;
        let remaining: Vec<TalentId> = scout
            .followed_talent_ids
            .into_iter()
            .filter(|id| *id != talent_id)
            .collect();
        self.post_json(&format!("scouts/{}/followed-talents", scout_id.0), &remaining)
            .await
    }

    // ---- scouting reports --------------------------------------------------

    pub async fn create_scouting_report(
        &self,
        report: &NewScoutingReport,
    ) -> Result<ScoutingReport, ClientError> {
        self.post_json("scouting-reports", report).await
    }

    pub async fn scouting_report(&self, id: ReportId) -> Result<ScoutingReport, ClientError> {
        self.get_json(&format!("scouting-reports/{}", id.0)).await
    }

    pub async fn scouting_reports_by_scout(
        &self,
        scout_id: ScoutId,
    ) -> Result<Vec<ScoutingReport>, ClientError> {
        self.get_json(&format!("scouting-reports/scout/{}", scout_id.0)).await
    }

    pub async fn scouting_reports_by_talent(
        &self,
        talent_id: TalentId,
    ) -> Result<Vec<ScoutingReport>, ClientError> {
        self.get_json(&format!("scouting-reports/talent/{}", talent_id.0)).await
    }

    pub async fn update_scouting_report(
        &self,
        id: ReportId,
        update: &ScoutingReportUpdate,
    ) -> Result<ScoutingReport, ClientError> {
        self.put_json(&format!("scouting-reports/{}", id.0), update).await
    }

    pub async fn delete_scouting_report(&self, id: ReportId) -> Result<(), ClientError> {
        self.delete_resource(&format!("scouting-reports/{}", id.0)).await
    }

    // ---- admin -------------------------------------------------------------

    pub async fn list_users(&self) -> Result<Vec<UserAccount>, ClientError> {
        self.get_json("users").await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserAccount, ClientError> {
        self.post_json("users", user).await
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), ClientError> {
        self.delete_resource(&format!("users/{}", id.0)).await
    }

    pub async fn system_stats(&self) -> Result<SystemStats, ClientError> {
        self.get_json("admin/stats").await
    }
}

#[cfg(test)]
mod tests;
