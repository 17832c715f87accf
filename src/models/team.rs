use serde::{Deserialize, Serialize};

use super::{Link, id_from_href};
use crate::error::ApiError;

/// Raw team payload as returned by the API. The team id is not a field of
/// its own; it only appears as the tail of the self link.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TeamPayload {
    #[serde(rename = "_links")]
    pub links: TeamLinks,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(rename = "squadMarketValue", default)]
    pub squad_market_value: Option<String>,
    #[serde(rename = "crestUrl", default)]
    pub crest_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TeamLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// Envelope for team collection responses (competition teams and name
/// search share the same shape).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TeamsResponse {
    #[serde(default)]
    pub count: u32,
    pub teams: Vec<TeamPayload>,
}

/// One football team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    /// Numeric id, extracted from the tail of the API's self link.
    pub id: u32,
    pub name: String,
    /// Three-letter code, e.g. "MUFC". Not set for every team.
    pub code: Option<String>,
    pub short_name: Option<String>,
    /// Formatted currency string as reported by the API.
    pub squad_market_value: Option<String>,
    pub crest_url: Option<String>,
}

impl TryFrom<TeamPayload> for Team {
    type Error = ApiError;

    fn try_from(payload: TeamPayload) -> Result<Self, Self::Error> {
        let id = id_from_href(&payload.links.self_link.href)?;
        Ok(Team {
            id,
            name: payload.name,
            code: payload.code,
            short_name: payload.short_name,
            squad_market_value: payload.squad_market_value,
            crest_url: payload.crest_url,
        })
    }
}

/// One hit from a team name search: just the id and name needed to follow
/// up with a full team fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMatch {
    pub id: u32,
    pub name: String,
}

impl TryFrom<TeamPayload> for TeamMatch {
    type Error = ApiError;

    fn try_from(payload: TeamPayload) -> Result<Self, Self::Error> {
        let id = id_from_href(&payload.links.self_link.href)?;
        Ok(TeamMatch {
            id,
            name: payload.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> &'static str {
        r#"{
            "_links": {
                "self": { "href": "http://api.football-data.org/v1/teams/66" },
                "fixtures": { "href": "http://api.football-data.org/v1/teams/66/fixtures" },
                "players": { "href": "http://api.football-data.org/v1/teams/66/players" }
            },
            "name": "Manchester United FC",
            "code": "MUFC",
            "shortName": "ManU",
            "squadMarketValue": "377,000,000 €",
            "crestUrl": "http://upload.wikimedia.org/manchester_united.svg"
        }"#
    }

    #[test]
    fn test_team_projection_extracts_id_from_self_link() {
        let payload: TeamPayload = serde_json::from_str(sample_payload()).unwrap();
        let team = Team::try_from(payload).unwrap();

        assert_eq!(team.id, 66);
        assert_eq!(team.name, "Manchester United FC");
        assert_eq!(team.code.as_deref(), Some("MUFC"));
        assert_eq!(team.short_name.as_deref(), Some("ManU"));
        assert_eq!(team.squad_market_value.as_deref(), Some("377,000,000 €"));
        assert_eq!(
            team.crest_url.as_deref(),
            Some("http://upload.wikimedia.org/manchester_united.svg")
        );
    }

    #[test]
    fn test_team_optional_fields_tolerate_null() {
        let json = r#"{
            "_links": {
                "self": { "href": "http://api.football-data.org/v1/teams/1044" }
            },
            "name": "AS Monaco FC",
            "code": null,
            "shortName": null,
            "squadMarketValue": null,
            "crestUrl": null
        }"#;

        let payload: TeamPayload = serde_json::from_str(json).unwrap();
        let team = Team::try_from(payload).unwrap();
        assert_eq!(team.id, 1044);
        assert_eq!(team.code, None);
        assert_eq!(team.squad_market_value, None);
    }

    #[test]
    fn test_team_non_numeric_self_link_is_error() {
        let json = r#"{
            "_links": {
                "self": { "href": "http://api.football-data.org/v1/teams/unknown" }
            },
            "name": "Mystery FC"
        }"#;

        let payload: TeamPayload = serde_json::from_str(json).unwrap();
        let result = Team::try_from(payload);
        assert!(matches!(
            result,
            Err(ApiError::ApiUnexpectedStructure { .. })
        ));
    }

    #[test]
    fn test_team_match_projection() {
        let payload: TeamPayload = serde_json::from_str(sample_payload()).unwrap();
        let team_match = TeamMatch::try_from(payload).unwrap();
        assert_eq!(team_match.id, 66);
        assert_eq!(team_match.name, "Manchester United FC");
    }

    #[test]
    fn test_teams_response_envelope() {
        let json = format!(
            r#"{{ "count": 1, "teams": [{}] }}"#,
            sample_payload()
        );
        let response: TeamsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(response.teams.len(), 1);
    }
}
