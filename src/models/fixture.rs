use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Link, id_from_href};
use crate::error::ApiError;

/// Raw fixture payload. Team and competition ids only appear as hyperlink
/// tails; the result and odds blocks are optional.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FixturePayload {
    #[serde(rename = "_links")]
    pub links: FixtureLinks,
    pub date: String,
    pub status: String,
    pub matchday: u32,
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "awayTeamName")]
    pub away_team_name: String,
    #[serde(default)]
    pub result: Option<ResultPayload>,
    #[serde(default)]
    pub odds: Option<Odds>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FixtureLinks {
    #[serde(rename = "homeTeam")]
    pub home_team: Link,
    #[serde(rename = "awayTeam")]
    pub away_team: Link,
    pub competition: Link,
}

/// The API sends a result block with null goals for fixtures that have not
/// been played yet, so both goal fields stay optional at the wire level.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResultPayload {
    #[serde(rename = "goalsHomeTeam")]
    pub goals_home_team: Option<u32>,
    #[serde(rename = "goalsAwayTeam")]
    pub goals_away_team: Option<u32>,
    #[serde(rename = "halfTime", default)]
    pub half_time: Option<HalfTime>,
}

/// Envelope for fixture collection responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FixturesResponse {
    pub fixtures: Vec<FixturePayload>,
}

/// Envelope for the single-fixture endpoint, which wraps the fixture next
/// to a head-to-head block this client does not consume.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FixtureDetailResponse {
    pub fixture: FixturePayload,
}

/// Half-time score of a played fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfTime {
    #[serde(rename = "goalsHomeTeam")]
    pub goals_home_team: u32,
    #[serde(rename = "goalsAwayTeam")]
    pub goals_away_team: u32,
}

/// Full-time result of a played fixture. Absent on fixtures that have not
/// started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureResult {
    pub goals_home_team: u32,
    pub goals_away_team: u32,
    pub half_time: Option<HalfTime>,
}

/// Pre-match betting odds. Not provided for every fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    #[serde(rename = "homeWin")]
    pub home_win: f64,
    pub draw: f64,
    #[serde(rename = "awayWin")]
    pub away_win: f64,
}

/// A scheduled or completed match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    /// Kickoff timestamp as reported by the API (RFC 3339).
    pub date: String,
    /// Lifecycle status, e.g. "TIMED", "IN_PLAY", "FINISHED".
    pub status: String,
    pub matchday: u32,
    pub home_team_name: String,
    pub home_team_id: u32,
    pub away_team_name: String,
    pub away_team_id: u32,
    pub competition_id: u32,
    pub result: Option<FixtureResult>,
    pub odds: Option<Odds>,
}

impl Fixture {
    /// Parses the kickoff timestamp into a UTC datetime.
    pub fn kickoff(&self) -> Result<DateTime<Utc>, ApiError> {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                ApiError::datetime_parse_error(format!(
                    "Invalid fixture date {:?}: {e}",
                    self.date
                ))
            })
    }
}

impl TryFrom<FixturePayload> for Fixture {
    type Error = ApiError;

    fn try_from(payload: FixturePayload) -> Result<Self, Self::Error> {
        let home_team_id = id_from_href(&payload.links.home_team.href)?;
        let away_team_id = id_from_href(&payload.links.away_team.href)?;
        let competition_id = id_from_href(&payload.links.competition.href)?;

        // A result block with null goals means the fixture has no result
        // yet; only a populated home goal count marks a played fixture.
        let result = match payload.result {
            Some(raw) if raw.goals_home_team.is_some() => {
                let goals_home_team = raw.goals_home_team.unwrap_or_default();
                let goals_away_team = raw.goals_away_team.ok_or_else(|| {
                    ApiError::api_unexpected_structure(
                        "Fixture result has home goals but no away goals",
                        &payload.links.competition.href,
                    )
                })?;
                Some(FixtureResult {
                    goals_home_team,
                    goals_away_team,
                    half_time: raw.half_time,
                })
            }
            _ => None,
        };

        Ok(Fixture {
            date: payload.date,
            status: payload.status,
            matchday: payload.matchday,
            home_team_name: payload.home_team_name,
            home_team_id,
            away_team_name: payload.away_team_name,
            away_team_id,
            competition_id,
            result,
            odds: payload.odds,
        })
    }
}
