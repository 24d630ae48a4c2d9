use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Scheduled,
    Canceled,
    Finished,
}

impl FromSql<Text, Pg> for CompetitionStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "scheduled" => Ok(CompetitionStatus::Scheduled),
            "canceled" => Ok(CompetitionStatus::Canceled),
            "finished" => Ok(CompetitionStatus::Finished),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for CompetitionStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            CompetitionStatus::Scheduled => out.write_all(b"scheduled")?,
            CompetitionStatus::Canceled => out.write_all(b"canceled")?,
            CompetitionStatus::Finished => out.write_all(b"finished")?,
        }
        Ok(IsNull::No)
    }
}

impl FromStr for CompetitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(CompetitionStatus::Scheduled),
            "canceled" => Ok(CompetitionStatus::Canceled),
            "finished" => Ok(CompetitionStatus::Finished),
            other => Err(format!("Invalid competition status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Completed,
    Canceled,
}

impl FromSql<Text, Pg> for MatchStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "completed" => Ok(MatchStatus::Completed),
            "canceled" => Ok(MatchStatus::Canceled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for MatchStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            MatchStatus::Scheduled => out.write_all(b"scheduled")?,
            MatchStatus::Completed => out.write_all(b"completed")?,
            MatchStatus::Canceled => out.write_all(b"canceled")?,
        }
        Ok(IsNull::No)
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "completed" => Ok(MatchStatus::Completed),
            "canceled" => Ok(MatchStatus::Canceled),
            other => Err(format!("Invalid match status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum PitchStatus {
    Active,
    Inactive,
}

impl FromSql<Text, Pg> for PitchStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "active" => Ok(PitchStatus::Active),
            "inactive" => Ok(PitchStatus::Inactive),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for PitchStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            PitchStatus::Active => out.write_all(b"active")?,
            PitchStatus::Inactive => out.write_all(b"inactive")?,
        }
        Ok(IsNull::No)
    }
}
