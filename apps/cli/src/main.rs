use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use client_core::{
    validation::{self, FieldError, MatchHistoryForm, ScoutingReportForm},
    FileCredentialStore, ProfileStatus, ScoutingClient, TalentFilter,
};
use shared::{
    api::{NewMatchHistory, NewScoutingReport, RegisterRequest},
    domain::{
        AgeGroup, MatchCalendarId, Position, Recommendation, Role, TalentId, TeamId, UserId,
    },
};

mod config;

use config::{ensure_credentials_dir, load_settings, prepare_api_url};

#[derive(Parser, Debug)]
#[command(name = "scoutnet", about = "Command-line client for the talent-scouting service")]
struct Cli {
    /// Override the API base url from scoutnet.toml / environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Override where the login session is persisted.
    #[arg(long)]
    credentials_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a talent or scout account.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        /// TALENT or SCOUT.
        #[arg(long, default_value = "TALENT")]
        role: String,
    },
    /// Authenticate and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session.
    Logout,
    /// Show the logged-in account and its profile status.
    Whoami,
    #[command(subcommand)]
    Talents(TalentsCommand),
    #[command(subcommand)]
    Teams(TeamsCommand),
    #[command(subcommand)]
    History(HistoryCommand),
    #[command(subcommand)]
    Calendar(CalendarCommand),
    #[command(subcommand)]
    Reports(ReportsCommand),
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand, Debug)]
enum TalentsCommand {
    /// List every talent profile.
    List,
    /// Filter talents by age group, position, and team name.
    Search {
        /// U18, U21, U23, or SENIOR.
        #[arg(long)]
        age_group: Option<String>,
        /// GOALKEEPER, DEFENDER, MIDFIELDER, or FORWARD.
        #[arg(long)]
        position: Option<String>,
        /// Case-insensitive team name fragment.
        #[arg(long)]
        team: Option<String>,
    },
    Show {
        id: i64,
    },
    /// Add a talent to the logged-in scout's follow list.
    Follow {
        talent_id: i64,
    },
    /// Remove a talent from the logged-in scout's follow list.
    Unfollow {
        talent_id: i64,
    },
    /// List the talents the logged-in scout follows.
    Followed,
}

#[derive(Subcommand, Debug)]
enum TeamsCommand {
    List,
    Show { id: i64 },
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List match history, optionally for one talent.
    List {
        #[arg(long)]
        talent_id: Option<i64>,
    },
    /// Record a played match for a talent.
    Add {
        #[arg(long)]
        talent_id: i64,
        /// Match date, YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        opponent: String,
        #[arg(long, default_value_t = 0)]
        goals: i64,
        #[arg(long, default_value_t = 0)]
        assists: i64,
        #[arg(long)]
        starter: bool,
        #[arg(long)]
        clean_sheet: bool,
    },
}

#[derive(Subcommand, Debug)]
enum CalendarCommand {
    List,
    /// Scheduled matches within the next N days.
    Upcoming {
        #[arg(long, default_value_t = 14)]
        days: i64,
    },
    /// Scheduled matches for one team.
    Team {
        team_id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum ReportsCommand {
    /// Scouting reports filed for a talent.
    ByTalent { talent_id: i64 },
    /// File a scouting report as the logged-in scout.
    Add {
        #[arg(long)]
        talent_id: i64,
        #[arg(long)]
        match_id: i64,
        /// Report date, YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        technical: i64,
        #[arg(long)]
        tactical: i64,
        #[arg(long)]
        physical: i64,
        #[arg(long)]
        mental: i64,
        #[arg(long)]
        notes: String,
        /// STRONG_BUY, BUY, HOLD, SELL, or STRONG_SELL.
        #[arg(long, default_value = "HOLD")]
        recommendation: String,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Service-wide record counts.
    Stats,
    /// List every user account.
    Users,
    /// Delete a user and its dependent records.
    DeleteUser { user_id: i64 },
}

fn parse_role(raw: &str) -> Result<Role> {
    Role::from_authority(&raw.to_uppercase())
        .with_context(|| format!("unknown role '{raw}', expected TALENT, SCOUT, or ADMIN"))
}

fn parse_position(raw: &str) -> Result<Position> {
    Position::parse(&raw.to_uppercase())
        .with_context(|| format!("unknown position '{raw}'"))
}

fn parse_age_group(raw: &str) -> Result<AgeGroup> {
    AgeGroup::parse(&raw.to_uppercase())
        .with_context(|| format!("unknown age group '{raw}', expected U18, U21, U23, or SENIOR"))
}

fn parse_recommendation(raw: &str) -> Result<Recommendation> {
    serde_json::from_value(serde_json::Value::String(raw.to_uppercase()))
        .with_context(|| format!("unknown recommendation '{raw}'"))
}

fn reject_invalid(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        eprintln!("{}: {}", error.field, error.message);
    }
    bail!("{} field(s) failed validation", errors.len());
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }
    if let Some(credentials_path) = cli.credentials_path {
        settings.credentials_path = credentials_path;
    }

    let api_url = prepare_api_url(&settings.api_url)?;
    ensure_credentials_dir(&settings.credentials_path)?;

    let store = Arc::new(FileCredentialStore::new(settings.credentials_path));
    let client = ScoutingClient::new(api_url, store);
    client.restore_session().await?;

    match cli.command {
        Command::Register {
            email,
            password,
            confirm_password,
            role,
        } => {
            let role = parse_role(&role)?;
            reject_invalid(validation::validate_registration(
                &email,
                &password,
                &confirm_password,
                role,
            ))?;
            client
                .register(&RegisterRequest {
                    email: email.clone(),
                    password,
                    user_type: role,
                })
                .await?;
            println!("Registered {email}. Log in with `scoutnet login`.");
        }
        Command::Login { email, password } => {
            reject_invalid(validation::validate_login(&email, &password))?;
            let user = client.login(&email, &password).await?;
            println!("Logged in as {} ({})", user.email, user.user_type.as_str());
            match client.ensure_profile().await? {
                ProfileStatus::Missing => {
                    println!("No profile record yet; finish onboarding before browsing.")
                }
                ProfileStatus::Complete | ProfileStatus::NotApplicable => {}
            }
        }
        Command::Logout => {
            client.logout().await?;
            println!("Logged out.");
        }
        Command::Whoami => {
            let Some(credentials) = client.current_session().await else {
                println!("Not logged in.");
                return Ok(());
            };
            let user = &credentials.user;
            println!("{} ({})", user.email, user.user_type.as_str());
            match client.ensure_profile().await? {
                ProfileStatus::Complete => {
                    let session = client.current_session().await;
                    let user = session.map(|c| c.user);
                    if let Some(user) = user {
                        if let Some(talent_id) = user.talent_id {
                            println!("talent profile: {}", talent_id.0);
                        }
                        if let Some(scout_id) = user.scout_id {
                            println!("scout profile: {}", scout_id.0);
                        }
                    }
                }
                ProfileStatus::Missing => println!("profile: not yet onboarded"),
                ProfileStatus::NotApplicable => println!("profile: n/a (admin)"),
            }
        }
        Command::Talents(command) => run_talents(&client, command).await?,
        Command::Teams(command) => run_teams(&client, command).await?,
        Command::History(command) => run_history(&client, command).await?,
        Command::Calendar(command) => run_calendar(&client, command).await?,
        Command::Reports(command) => run_reports(&client, command).await?,
        Command::Admin(command) => run_admin(&client, command).await?,
    }

    Ok(())
}

fn print_talent(talent: &shared::api::Talent) {
    let team = talent.team_name.as_deref().unwrap_or("unattached");
    println!(
        "{:>5}  {} {}  {}  age {}  {}  {} apps / {} goals / {} assists",
        talent.id.0,
        talent.first_name,
        talent.last_name,
        talent.position.as_str(),
        talent.age,
        team,
        talent.matches_played,
        talent.goals,
        talent.assists,
    );
}

async fn scout_profile_id(client: &ScoutingClient) -> Result<shared::domain::ScoutId> {
    match client.ensure_profile().await? {
        ProfileStatus::Missing => bail!("no scout profile yet; finish onboarding first"),
        ProfileStatus::NotApplicable => bail!("this command requires a scout account"),
        ProfileStatus::Complete => {}
    }
    let session = client
        .current_session()
        .await
        .context("not logged in")?;
    session
        .user
        .scout_id
        .context("this command requires a scout account")
}

async fn run_talents(client: &ScoutingClient, command: TalentsCommand) -> Result<()> {
    match command {
        TalentsCommand::List => {
            for talent in client.list_talents().await? {
                print_talent(&talent);
            }
        }
        TalentsCommand::Search {
            age_group,
            position,
            team,
        } => {
            let filter = TalentFilter {
                age_group: age_group.as_deref().map(parse_age_group).transpose()?,
                position: position.as_deref().map(parse_position).transpose()?,
                team,
            };
            let talents = client.search_talents(&filter).await?;
            if talents.is_empty() {
                println!("No talents matched.");
            }
            for talent in talents {
                print_talent(&talent);
            }
        }
        TalentsCommand::Show { id } => {
            let talent = client.talent(TalentId(id)).await?;
            println!("{}", serde_json::to_string_pretty(&talent)?);
        }
        TalentsCommand::Follow { talent_id } => {
            let scout_id = scout_profile_id(client).await?;
            let scout = client.follow_talent(scout_id, TalentId(talent_id)).await?;
            println!("Now following {} talent(s).", scout.followed_talent_ids.len());
        }
        TalentsCommand::Unfollow { talent_id } => {
            let scout_id = scout_profile_id(client).await?;
            let scout = client.unfollow_talent(scout_id, TalentId(talent_id)).await?;
            println!("Now following {} talent(s).", scout.followed_talent_ids.len());
        }
        TalentsCommand::Followed => {
            let scout_id = scout_profile_id(client).await?;
            for talent in client.followed_talents(scout_id).await? {
                print_talent(&talent);
            }
        }
    }
    Ok(())
}

async fn run_teams(client: &ScoutingClient, command: TeamsCommand) -> Result<()> {
    match command {
        TeamsCommand::List => {
            for team in client.list_teams().await? {
                let roster = team
                    .player_ids
                    .as_ref()
                    .map(|ids| ids.len().to_string())
                    .unwrap_or_else(|| "?".into());
                println!(
                    "{:>5}  {}  ({}, {})  {} player(s)",
                    team.id.0, team.name, team.city, team.age_group, roster
                );
            }
        }
        TeamsCommand::Show { id } => {
            let team = client.team(TeamId(id)).await?;
            println!("{}", serde_json::to_string_pretty(&team)?);
        }
    }
    Ok(())
}

async fn run_history(client: &ScoutingClient, command: HistoryCommand) -> Result<()> {
    match command {
        HistoryCommand::List { talent_id } => {
            let rows = match talent_id {
                Some(talent_id) => client.match_history_for_talent(TalentId(talent_id)).await?,
                None => client.list_match_history().await?,
            };
            for row in rows {
                let starter = if row.starter { "starter" } else { "sub" };
                println!(
                    "{:>5}  talent {}  {}  vs {}  {}g {}a  {}  rating {:.1}",
                    row.id.0,
                    row.talent_id.0,
                    row.match_date,
                    row.opponent_team,
                    row.goals,
                    row.assists,
                    starter,
                    row.rating,
                );
            }
        }
        HistoryCommand::Add {
            talent_id,
            date,
            opponent,
            goals,
            assists,
            starter,
            clean_sheet,
        } => {
            reject_invalid(validation::validate_match_history(&MatchHistoryForm {
                opponent_team: opponent.clone(),
                match_date: Some(date),
                goals,
                assists,
            }))?;
            let created = client
                .create_match_history(&NewMatchHistory {
                    talent_id: TalentId(talent_id),
                    match_date: date,
                    opponent_team: opponent,
                    goals: goals as u32,
                    assists: assists as u32,
                    starter,
                    clean_sheet,
                })
                .await?;
            println!("Recorded match {}.", created.id.0);
        }
    }
    Ok(())
}

async fn run_calendar(client: &ScoutingClient, command: CalendarCommand) -> Result<()> {
    let print_rows = |rows: Vec<shared::api::MatchCalendar>| {
        if rows.is_empty() {
            println!("No scheduled matches.");
        }
        for row in rows {
            println!(
                "{:>5}  {}  team {} vs team {}  {}",
                row.id.0,
                row.match_date_time.format("%Y-%m-%d %H:%M"),
                row.home_team_id.0,
                row.guest_team_id.0,
                row.description,
            );
        }
    };
    match command {
        CalendarCommand::List => print_rows(client.list_match_calendar().await?),
        CalendarCommand::Upcoming { days } => {
            let start: DateTime<Utc> = Utc::now();
            let end = start + Duration::days(days);
            print_rows(client.match_calendar_by_date_range(start, end).await?);
        }
        CalendarCommand::Team { team_id } => {
            print_rows(client.match_calendar_for_team(TeamId(team_id)).await?)
        }
    }
    Ok(())
}

async fn run_reports(client: &ScoutingClient, command: ReportsCommand) -> Result<()> {
    match command {
        ReportsCommand::ByTalent { talent_id } => {
            for report in client.scouting_reports_by_talent(TalentId(talent_id)).await? {
                println!(
                    "{:>5}  scout {}  {}  T{} Ta{} P{} M{}  {:?}  {}",
                    report.id.0,
                    report.scout_id.0,
                    report.report_date,
                    report.technical_rating,
                    report.tactical_rating,
                    report.physical_rating,
                    report.mental_rating,
                    report.recommendation,
                    report.notes,
                );
            }
        }
        ReportsCommand::Add {
            talent_id,
            match_id,
            date,
            technical,
            tactical,
            physical,
            mental,
            notes,
            recommendation,
        } => {
            let recommendation = parse_recommendation(&recommendation)?;
            reject_invalid(validation::validate_scouting_report(&ScoutingReportForm {
                technical_rating: technical,
                tactical_rating: tactical,
                physical_rating: physical,
                mental_rating: mental,
                notes: notes.clone(),
            }))?;
            let scout_id = scout_profile_id(client).await?;
            let created = client
                .create_scouting_report(&NewScoutingReport {
                    scout_id,
                    talent_id: TalentId(talent_id),
                    match_id: MatchCalendarId(match_id),
                    report_date: date,
                    technical_rating: technical as u8,
                    tactical_rating: tactical as u8,
                    physical_rating: physical as u8,
                    mental_rating: mental as u8,
                    notes,
                    recommendation,
                })
                .await?;
            println!("Filed report {}.", created.id.0);
        }
    }
    Ok(())
}

async fn run_admin(client: &ScoutingClient, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Stats => {
            let stats = client.system_stats().await?;
            println!("users:             {}", stats.user_count);
            println!("talents:           {}", stats.talent_count);
            println!("scouts:            {}", stats.scout_count);
            println!("teams:             {}", stats.team_count);
            println!("scheduled matches: {}", stats.scheduled_match_count);
            println!("match history:     {}", stats.match_history_count);
        }
        AdminCommand::Users => {
            for user in client.list_users().await? {
                let profile = match (user.talent_id, user.scout_id) {
                    (Some(talent_id), _) => format!("talent {}", talent_id.0),
                    (_, Some(scout_id)) => format!("scout {}", scout_id.0),
                    _ => "no profile".into(),
                };
                println!(
                    "{:>5}  {}  {}  {}",
                    user.id.0,
                    user.email,
                    user.user_type.as_str(),
                    profile
                );
            }
        }
        AdminCommand::DeleteUser { user_id } => {
            let report = client.delete_user_cascade(UserId(user_id)).await?;
            println!(
                "Deleted user {user_id} ({} match record(s), {} report(s)).",
                report.match_history_deleted, report.reports_deleted
            );
            if let Some(scout_id) = report.scout_deleted {
                println!("Deleted scout profile {}.", scout_id.0);
            }
            if let Some(talent_id) = report.talent_deleted {
                println!("Deleted talent profile {}.", talent_id.0);
            }
            for note in report.skipped {
                eprintln!("warning: {note}");
            }
        }
    }
    Ok(())
}
