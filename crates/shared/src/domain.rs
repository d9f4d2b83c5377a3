use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);
id_newtype!(TalentId);
id_newtype!(ScoutId);
id_newtype!(TeamId);
id_newtype!(MatchHistoryId);
id_newtype!(MatchCalendarId);
id_newtype!(ReportId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Talent,
    Scout,
    Admin,
}

impl Role {
    /// Accepts both bare role names and Spring-style `ROLE_` authorities.
    pub fn from_authority(raw: &str) -> Option<Self> {
        let name = raw.strip_prefix("ROLE_").unwrap_or(raw);
        match name {
            "TALENT" => Some(Role::Talent),
            "SCOUT" => Some(Role::Scout),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Talent => "TALENT",
            Role::Scout => "SCOUT",
            Role::Admin => "ADMIN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "GOALKEEPER" => Some(Position::Goalkeeper),
            "DEFENDER" => Some(Position::Defender),
            "MIDFIELDER" => Some(Position::Midfielder),
            "FORWARD" => Some(Position::Forward),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GOALKEEPER",
            Position::Defender => "DEFENDER",
            Position::Midfielder => "MIDFIELDER",
            Position::Forward => "FORWARD",
        }
    }
}

/// Scouting age brackets used by the talent search filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeGroup {
    U18,
    U21,
    U23,
    Senior,
}

impl AgeGroup {
    pub fn matches(&self, age: u8) -> bool {
        match self {
            AgeGroup::U18 => age < 18,
            AgeGroup::U21 => age < 21,
            AgeGroup::U23 => age < 23,
            AgeGroup::Senior => age >= 23,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "U18" => Some(AgeGroup::U18),
            "U21" => Some(AgeGroup::U21),
            "U23" => Some(AgeGroup::U23),
            "SENIOR" => Some(AgeGroup::Senior),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}
