//! Admin maintenance flows. The service exposes no server-side cascade, so
//! removing an account walks its dependents from the client, child records
//! before parent profiles, user record last.

use shared::domain::{ScoutId, TalentId, UserId};
use tracing::{info, warn};

use crate::{ClientError, ScoutingClient};

/// What a cascade actually removed, so callers can report and refresh.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CascadeReport {
    pub scout_deleted: Option<ScoutId>,
    pub talent_deleted: Option<TalentId>,
    pub match_history_deleted: usize,
    pub reports_deleted: usize,
    /// Human-readable notes for steps that were skipped or tolerated.
    pub skipped: Vec<String>,
}

impl ScoutingClient {
    /// Deletes a user account together with its scout/talent profile and the
    /// talent's match-history and scouting-report rows.
    ///
    /// Missing profiles (404) are normal and skipped silently. Probe and
    /// per-row failures are tolerated with a note so one stale row cannot
    /// wedge the whole removal, but a failure to delete a found talent
    /// profile aborts before the user record is touched.
    pub async fn delete_user_cascade(
        &self,
        user_id: UserId,
    ) -> Result<CascadeReport, ClientError> {
        let mut report = CascadeReport::default();

        match self.scout_by_user(user_id).await {
            Ok(scout) => {
                info!(user_id = user_id.0, scout_id = scout.id.0, "cascade: deleting scout profile");
                match self.delete_scout(scout.id).await {
                    Ok(()) => report.scout_deleted = Some(scout.id),
                    Err(err) => {
                        warn!(scout_id = scout.id.0, %err, "cascade: scout delete failed");
                        report
                            .skipped
                            .push(format!("scout {} not deleted: {err}", scout.id.0));
                    }
                }
            }
            Err(ClientError::NotFound) => {}
            Err(err) => {
                warn!(user_id = user_id.0, %err, "cascade: scout probe failed");
                report
                    .skipped
                    .push(format!("scout profile check failed: {err}"));
            }
        }

        match self.talent_by_user(user_id).await {
            Ok(talent) => {
                info!(
                    user_id = user_id.0,
                    talent_id = talent.id.0,
                    "cascade: deleting talent profile and dependents"
                );
                self.delete_talent_dependents(talent.id, &mut report).await;
                self.delete_talent(talent.id).await?;
                report.talent_deleted = Some(talent.id);
            }
            Err(ClientError::NotFound) => {}
            Err(err) => {
                warn!(user_id = user_id.0, %err, "cascade: talent probe failed");
                report
                    .skipped
                    .push(format!("talent profile check failed: {err}"));
            }
        }

        self.delete_user(user_id).await?;
        info!(
            user_id = user_id.0,
            match_history = report.match_history_deleted,
            reports = report.reports_deleted,
            "cascade: user deleted"
        );
        Ok(report)
    }

    async fn delete_talent_dependents(&self, talent_id: TalentId, report: &mut CascadeReport) {
        match self.match_history_for_talent(talent_id).await {
            Ok(rows) => {
                for row in rows {
                    match self.delete_match_history(row.id).await {
                        Ok(()) => report.match_history_deleted += 1,
                        Err(err) => {
                            warn!(entry_id = row.id.0, %err, "cascade: match history delete failed");
                            report
                                .skipped
                                .push(format!("match history {} not deleted: {err}", row.id.0));
                        }
                    }
                }
            }
            Err(ClientError::NotFound) => {}
            Err(err) => {
                warn!(talent_id = talent_id.0, %err, "cascade: match history listing failed");
                report
                    .skipped
                    .push(format!("match history listing failed: {err}"));
            }
        }

        match self.scouting_reports_by_talent(talent_id).await {
            Ok(rows) => {
                for row in rows {
                    match self.delete_scouting_report(row.id).await {
                        Ok(()) => report.reports_deleted += 1,
                        Err(err) => {
                            warn!(report_id = row.id.0, %err, "cascade: report delete failed");
                            report
                                .skipped
                                .push(format!("scouting report {} not deleted: {err}", row.id.0));
                        }
                    }
                }
            }
            Err(ClientError::NotFound) => {}
            Err(err) => {
                warn!(talent_id = talent_id.0, %err, "cascade: report listing failed");
                report
                    .skipped
                    .push(format!("scouting report listing failed: {err}"));
            }
        }
    }
}
