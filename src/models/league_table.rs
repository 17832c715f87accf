use serde::{Deserialize, Serialize};

use super::{Link, id_from_href};
use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeagueTablePayload {
    #[serde(rename = "leagueCaption")]
    pub league_caption: String,
    pub matchday: u32,
    pub standing: Vec<StandingPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StandingPayload {
    #[serde(rename = "_links")]
    pub links: StandingLinks,
    pub position: u32,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "crestURI", default)]
    pub crest_uri: Option<String>,
    #[serde(rename = "playedGames")]
    pub played_games: u32,
    /// Signed: point deductions can push a team below zero.
    pub points: i32,
    pub goals: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StandingLinks {
    pub team: Link,
}

/// The league table of one competition at a given matchday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueTable {
    /// League caption, e.g. "Premier League 2016/17".
    pub name: String,
    pub matchday: u32,
    /// Rows ordered by position, as returned by the API.
    pub standings: Vec<Standing>,
}

/// One row of a league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub position: u32,
    pub team_name: String,
    /// Numeric team id, extracted from the row's team hyperlink.
    pub team_id: u32,
    pub crest_uri: Option<String>,
    pub played_games: u32,
    pub points: i32,
    pub goals: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl TryFrom<LeagueTablePayload> for LeagueTable {
    type Error = ApiError;

    fn try_from(payload: LeagueTablePayload) -> Result<Self, Self::Error> {
        let standings = payload
            .standing
            .into_iter()
            .map(Standing::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LeagueTable {
            name: payload.league_caption,
            matchday: payload.matchday,
            standings,
        })
    }
}

impl TryFrom<StandingPayload> for Standing {
    type Error = ApiError;

    fn try_from(payload: StandingPayload) -> Result<Self, Self::Error> {
        let team_id = id_from_href(&payload.links.team.href)?;
        Ok(Standing {
            position: payload.position,
            team_name: payload.team_name,
            team_id,
            crest_uri: payload.crest_uri,
            played_games: payload.played_games,
            points: payload.points,
            goals: payload.goals,
            goals_against: payload.goals_against,
            goal_difference: payload.goal_difference,
            wins: payload.wins,
            draws: payload.draws,
            losses: payload.losses,
        })
    }
}
